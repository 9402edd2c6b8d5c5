//! Enable gate in front of the step timer.
//!
//! Motion code drives the engine rather than the raw timer: while the engine
//! is disabled, timing changes and start requests are dropped, so stepping
//! cannot resume behind the back of whoever disabled it.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::config::SteppingConfig;
use crate::error::TimerError;

use super::timer::{StepCallback, StepTimer, StepTimerHardware};

/// Step timer gated by an enabled flag.
///
/// `const`-constructible like [`StepTimer`], for use from a `static`.
pub struct StepEngine<T> {
    timer: StepTimer<T>,
    enabled: AtomicBool,
}

impl<T: StepTimerHardware> StepEngine<T> {
    /// Create an uninitialized, disabled engine.
    pub const fn new() -> Self {
        Self {
            timer: StepTimer::new(),
            enabled: AtomicBool::new(false),
        }
    }

    /// Initialize the underlying timer. The engine is left disabled.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::ZeroFrequency` if the configured frequency is zero.
    pub fn init(
        &self,
        hardware: T,
        config: &SteppingConfig,
        callback: StepCallback,
    ) -> Result<(), TimerError> {
        self.enabled.store(false, Ordering::Release);
        self.timer.init_from(hardware, config, callback)
    }

    /// Accept timing and start requests from now on.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NotInitialized` before `init`.
    pub fn enable(&self) -> Result<(), TimerError> {
        if !self.timer.is_initialized() {
            return Err(TimerError::NotInitialized);
        }
        if !self.enabled.swap(true, Ordering::AcqRel) {
            debug!("Step engine enabled");
        }
        Ok(())
    }

    /// Stop the timer and drop further requests until re-enabled.
    pub fn disable(&self) {
        if self.enabled.swap(false, Ordering::AcqRel) {
            self.timer.stop();
            debug!("Step engine disabled");
        }
    }

    /// Whether requests are accepted.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Forward [`StepTimer::set_ticks`] when enabled, ignore otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`StepTimer::set_ticks`] while enabled.
    pub fn set_timing(&self, ticks: u32) -> Result<(), TimerError> {
        if self.is_enabled() {
            self.timer.set_ticks(ticks)
        } else {
            Ok(())
        }
    }

    /// Forward [`StepTimer::start`] when enabled, ignore otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`StepTimer::start`] while enabled.
    pub fn start(&self) -> Result<(), TimerError> {
        if self.is_enabled() {
            self.timer.start()
        } else {
            Ok(())
        }
    }

    /// Stop the timer. Ignored while disabled, where it is already stopped.
    pub fn stop(&self) {
        if self.is_enabled() {
            self.timer.stop();
        }
    }

    /// Interrupt entry point, forwarded to the timer.
    #[inline]
    pub fn on_interrupt(&self) {
        self.timer.on_interrupt();
    }

    /// The gated timer, for status queries.
    #[inline]
    pub fn timer(&self) -> &StepTimer<T> {
        &self.timer
    }
}

impl<T: StepTimerHardware> Default for StepEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeTimer {
        frequency: u32,
        enabled: bool,
    }

    impl StepTimerHardware for FakeTimer {
        fn set_frequency(&mut self, frequency_hz: u32) {
            self.frequency = frequency_hz;
        }

        fn resume(&mut self) {
            self.enabled = true;
        }

        fn pause(&mut self) {
            self.enabled = false;
        }
    }

    fn keep_going() -> bool {
        true
    }

    fn ready_engine() -> StepEngine<FakeTimer> {
        let engine = StepEngine::new();
        let config = SteppingConfig {
            timer_frequency_hz: 1_000_000,
            ..SteppingConfig::default()
        };
        engine.init(FakeTimer::default(), &config, keep_going).unwrap();
        engine
    }

    #[test]
    fn test_enable_requires_init() {
        let engine: StepEngine<FakeTimer> = StepEngine::new();
        assert_eq!(engine.enable(), Err(TimerError::NotInitialized));
        assert!(!engine.is_enabled());
    }

    #[test]
    fn test_requests_ignored_while_disabled() {
        let engine = ready_engine();
        assert!(!engine.is_enabled());

        assert_eq!(engine.set_timing(250), Ok(()));
        assert_eq!(engine.start(), Ok(()));
        assert_eq!(engine.timer().ticks(), 0);
        assert!(!engine.timer().is_running());
        assert_eq!(engine.timer().with_hardware(|hw| hw.enabled), Some(false));
    }

    #[test]
    fn test_enabled_engine_forwards_to_timer() {
        let engine = ready_engine();
        engine.enable().unwrap();

        engine.set_timing(250).unwrap();
        engine.start().unwrap();
        assert_eq!(engine.timer().interrupt_frequency(), 4_000);
        assert!(engine.timer().is_running());
        assert_eq!(engine.set_timing(0), Err(TimerError::ZeroTicks));

        engine.stop();
        assert!(!engine.timer().is_running());
        assert!(engine.is_enabled());
    }

    #[test]
    fn test_disable_stops_and_gates() {
        let engine = ready_engine();
        engine.enable().unwrap();
        engine.start().unwrap();

        engine.disable();
        assert!(!engine.is_enabled());
        assert!(!engine.timer().is_running());

        engine.start().unwrap();
        assert!(!engine.timer().is_running());

        engine.enable().unwrap();
        engine.start().unwrap();
        assert!(engine.timer().is_running());
    }

    #[test]
    fn test_reinit_disables() {
        let engine = ready_engine();
        engine.enable().unwrap();
        engine.start().unwrap();

        let config = SteppingConfig::default();
        engine.init(FakeTimer::default(), &config, keep_going).unwrap();
        assert!(!engine.is_enabled());
        assert!(!engine.timer().is_running());
    }
}
