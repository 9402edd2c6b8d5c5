//! Step generation timing configuration.

use serde::Deserialize;

/// `[stepping]` section.
///
/// The registry consumes `disable_delay_us` as the settle time after a bulk
/// enable, and [`StepTimer::init_from`](crate::StepTimer::init_from) consumes
/// `timer_frequency_hz`. The remaining fields belong to the step generation
/// layer built on top of this crate: it reads them when emitting pulses,
/// sizing its segment buffer and idling motors.
#[derive(Debug, Clone, Deserialize)]
pub struct SteppingConfig {
    /// Step pulse width in microseconds. Read by the step callback.
    #[serde(default = "default_pulse_us")]
    pub pulse_us: u32,

    /// Delay between a direction change and the next step pulse. Read by
    /// the step callback.
    #[serde(default)]
    pub dir_delay_us: u32,

    /// Settle time after re-enabling disabled motors.
    #[serde(default)]
    pub disable_delay_us: u32,

    /// Idle time before motors are disabled. 255 keeps them enabled.
    #[serde(default = "default_idle_ms")]
    pub idle_ms: u32,

    /// Number of planner segments buffered for the step interrupt. Sizes the
    /// caller's segment queue.
    #[serde(default = "default_segments")]
    pub segments: u32,

    /// Base tick frequency of the step timer.
    #[serde(default = "default_timer_frequency")]
    pub timer_frequency_hz: u32,
}

/// `idle_ms` value that keeps motors enabled indefinitely.
pub const IDLE_FOREVER_MS: u32 = 255;

fn default_pulse_us() -> u32 {
    4
}

fn default_idle_ms() -> u32 {
    IDLE_FOREVER_MS
}

fn default_segments() -> u32 {
    12
}

fn default_timer_frequency() -> u32 {
    1_000_000
}

impl Default for SteppingConfig {
    fn default() -> Self {
        Self {
            pulse_us: default_pulse_us(),
            dir_delay_us: 0,
            disable_delay_us: 0,
            idle_ms: default_idle_ms(),
            segments: default_segments(),
            timer_frequency_hz: default_timer_frequency(),
        }
    }
}

impl SteppingConfig {
    /// Idle time after which motors should be disabled, if any.
    pub fn idle_disable_after_ms(&self) -> Option<u32> {
        if self.idle_ms == IDLE_FOREVER_MS {
            None
        } else {
            Some(self.idle_ms)
        }
    }
}
