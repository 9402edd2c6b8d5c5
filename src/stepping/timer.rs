//! Interrupt-driven step timer.
//!
//! A periodic hardware timer fires the step interrupt; the registered
//! callback generates step pulses for the current planner segment and
//! reports whether stepping should continue.
//!
//! ```rust,ignore
//! static STEP_TIMER: StepTimer<Tim2> = StepTimer::new();
//!
//! fn pulse() -> bool {
//!     // emit the steps due at this tick
//!     segments_remaining()
//! }
//!
//! STEP_TIMER.init(Tim2::new(), 1_000_000, pulse)?;
//! STEP_TIMER.set_ticks(250)?; // 4 kHz step rate
//! STEP_TIMER.start()?;
//!
//! #[interrupt]
//! fn TIM2() {
//!     STEP_TIMER.on_interrupt();
//! }
//! ```

use core::cell::{Cell, RefCell};
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use critical_section::Mutex;

use crate::config::SteppingConfig;
use crate::error::TimerError;

/// Platform periodic timer driving the step interrupt.
pub trait StepTimerHardware {
    /// Program the interrupt rate.
    fn set_frequency(&mut self, frequency_hz: u32);

    /// Enable the periodic interrupt.
    fn resume(&mut self);

    /// Disable the periodic interrupt.
    fn pause(&mut self);

    /// Restart the current period from zero.
    fn reset_count(&mut self) {}
}

/// Step generation callback.
///
/// Runs in interrupt context: it must not block, allocate or take locks held
/// by the main context. Returning `false` stops the timer.
pub type StepCallback = fn() -> bool;

/// Periodic step interrupt source.
///
/// `const`-constructible so it can live in a `static` shared by the main
/// context (`init`, `start`, `stop`, `set_ticks`) and the interrupt handler
/// (`on_interrupt`). Hardware access happens inside short critical sections;
/// the callback itself runs outside of them, so it may call [`stop`](Self::stop).
pub struct StepTimer<T> {
    hardware: Mutex<RefCell<Option<T>>>,
    callback: Mutex<Cell<Option<StepCallback>>>,
    frequency: AtomicU32,
    rate: AtomicU32,
    ticks: AtomicU32,
    running: AtomicBool,
}

impl<T: StepTimerHardware> StepTimer<T> {
    /// Create an uninitialized timer.
    pub const fn new() -> Self {
        Self {
            hardware: Mutex::new(RefCell::new(None)),
            callback: Mutex::new(Cell::new(None)),
            frequency: AtomicU32::new(0),
            rate: AtomicU32::new(0),
            ticks: AtomicU32::new(0),
            running: AtomicBool::new(false),
        }
    }

    /// Record the base tick frequency and callback and arm the hardware.
    ///
    /// The interrupt stays disabled until [`start`](Self::start). A timer
    /// that was already running is stopped first.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::ZeroFrequency` if `frequency_hz` is zero.
    pub fn init(
        &self,
        mut hardware: T,
        frequency_hz: u32,
        callback: StepCallback,
    ) -> Result<(), TimerError> {
        if frequency_hz == 0 {
            return Err(TimerError::ZeroFrequency);
        }

        self.stop();

        hardware.pause();
        hardware.set_frequency(frequency_hz);

        critical_section::with(|cs| {
            *self.hardware.borrow_ref_mut(cs) = Some(hardware);
            self.callback.borrow(cs).set(Some(callback));
            self.ticks.store(0, Ordering::Release);
            self.rate.store(frequency_hz, Ordering::Release);
            self.frequency.store(frequency_hz, Ordering::Release);
        });

        info!("Step timer {} Hz", frequency_hz);
        Ok(())
    }

    /// [`init`](Self::init) at the configured `timer_frequency_hz`.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::ZeroFrequency` if the configured frequency is zero.
    pub fn init_from(
        &self,
        hardware: T,
        config: &SteppingConfig,
        callback: StepCallback,
    ) -> Result<(), TimerError> {
        self.init(hardware, config.timer_frequency_hz, callback)
    }

    /// Whether `init` has run.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.frequency.load(Ordering::Acquire) != 0
    }

    /// Enable the periodic interrupt. No-op if already running.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NotInitialized` before `init`.
    pub fn start(&self) -> Result<(), TimerError> {
        if !self.is_initialized() {
            return Err(TimerError::NotInitialized);
        }

        critical_section::with(|cs| {
            if self.running.load(Ordering::Acquire) {
                return;
            }
            if let Some(hardware) = self.hardware.borrow_ref_mut(cs).as_mut() {
                hardware.resume();
                self.running.store(true, Ordering::Release);
            }
        });
        Ok(())
    }

    /// Disable the periodic interrupt. No-op if stopped or uninitialized.
    ///
    /// Safe to call from the step callback.
    pub fn stop(&self) {
        critical_section::with(|cs| {
            if !self.running.load(Ordering::Acquire) {
                return;
            }
            if let Some(hardware) = self.hardware.borrow_ref_mut(cs).as_mut() {
                hardware.pause();
            }
            self.running.store(false, Ordering::Release);
        });
    }

    /// Fire the callback once every `ticks` base ticks.
    ///
    /// The hardware period is rewritten in a single critical section, so the
    /// interrupt never observes a partial update. A quotient that rounds to
    /// zero leaves the current period in place.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::ZeroTicks` for `ticks == 0` and
    /// `TimerError::NotInitialized` before `init`.
    pub fn set_ticks(&self, ticks: u32) -> Result<(), TimerError> {
        if ticks == 0 {
            return Err(TimerError::ZeroTicks);
        }

        let frequency = self.frequency.load(Ordering::Acquire);
        if frequency == 0 {
            return Err(TimerError::NotInitialized);
        }

        critical_section::with(|cs| {
            self.ticks.store(ticks, Ordering::Release);
            let rate = frequency / ticks;
            if rate > 0 {
                if let Some(hardware) = self.hardware.borrow_ref_mut(cs).as_mut() {
                    hardware.set_frequency(rate);
                    self.rate.store(rate, Ordering::Release);
                }
            }
        });
        Ok(())
    }

    /// Base ticks per callback last requested, 0 if never set.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Base tick frequency, 0 before `init`.
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.frequency.load(Ordering::Acquire)
    }

    /// Callback rate currently programmed into the hardware.
    #[inline]
    pub fn interrupt_frequency(&self) -> u32 {
        self.rate.load(Ordering::Acquire)
    }

    /// Whether the periodic interrupt is enabled.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Restart the current period from zero.
    pub fn reset(&self) {
        critical_section::with(|cs| {
            if let Some(hardware) = self.hardware.borrow_ref_mut(cs).as_mut() {
                hardware.reset_count();
            }
        });
    }

    /// Interrupt entry point. Call from the timer's interrupt handler.
    ///
    /// Invokes the callback unless the timer is stopped, and stops the timer
    /// when the callback returns `false`.
    pub fn on_interrupt(&self) {
        if !self.running.load(Ordering::Acquire) {
            return;
        }

        let callback = critical_section::with(|cs| self.callback.borrow(cs).get());
        if let Some(callback) = callback {
            if !callback() {
                self.stop();
            }
        }
    }

    /// Run a closure against the hardware timer, if initialized.
    ///
    /// The closure runs inside a critical section with interrupts masked,
    /// the step interrupt included. Keep it to a few register accesses; it
    /// must not block, wait or call back into this timer.
    pub fn with_hardware<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.hardware.borrow_ref_mut(cs).as_mut().map(f))
    }
}

impl<T: StepTimerHardware> Default for StepTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}
