//! Process-wide motor disable mark and the settle wait it implies.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

/// Whether motors were disabled and not yet re-enabled in bulk.
///
/// Shared by reference between the registry operations and any context that
/// needs to know the motor state, including the step interrupt. Any disable
/// request sets the mark; only a bulk enable clears it.
#[derive(Debug, Default)]
pub struct MotorsDisabled {
    disabled: AtomicBool,
}

impl MotorsDisabled {
    /// Create with motors considered enabled.
    pub const fn new() -> Self {
        Self {
            disabled: AtomicBool::new(false),
        }
    }

    /// Whether the mark is set.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Acquire)
    }

    /// Set the mark. Interrupt safe.
    #[inline]
    pub fn mark(&self) {
        self.disabled.store(true, Ordering::Release);
    }

    /// Clear the mark, returning whether it was set.
    #[inline]
    pub fn take(&self) -> bool {
        self.disabled.swap(false, Ordering::AcqRel)
    }
}

/// Settle time owed after a bulk enable.
///
/// Returned by [`Axes::set_disable`](super::Axes::set_disable) so the wait
/// happens after the registry is released, never while it is locked.
#[must_use = "re-enabled drivers need the settle time before stepping"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settle {
    delay_us: u32,
}

impl Settle {
    /// Nothing to wait for.
    pub const NONE: Self = Self { delay_us: 0 };

    pub(crate) const fn new(delay_us: u32) -> Self {
        Self { delay_us }
    }

    /// Remaining settle time in microseconds.
    #[inline]
    pub fn delay_us(self) -> u32 {
        self.delay_us
    }

    /// Whether a wait is owed.
    #[inline]
    pub fn is_pending(self) -> bool {
        self.delay_us > 0
    }

    /// Block for the settle time. Main context only.
    pub fn wait<DELAY: DelayNs>(self, delay: &mut DELAY) {
        if self.is_pending() {
            debug!("Motor settle {}us", self.delay_us);
            delay.delay_us(self.delay_us);
        }
    }
}
