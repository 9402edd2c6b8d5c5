//! Per-motor step suppression.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::machine::MotorMask;

/// Lock-free set of axis-motor pairs whose step pulses are suppressed.
///
/// Shared between the step interrupt, which filters its output through it,
/// and the main context, which blocks motors as their switches trip during
/// homing and unblocks them when entering or leaving homing mode. Every
/// operation is a single atomic access: safe from interrupt context, bounded
/// time, no allocation.
#[derive(Debug, Default)]
pub struct StepBlocks {
    blocked: AtomicU32,
}

impl StepBlocks {
    /// Create with no motor blocked.
    pub const fn new() -> Self {
        Self {
            blocked: AtomicU32::new(0),
        }
    }

    /// Suppress steps for one axis-motor pair.
    #[inline]
    pub fn block(&self, axis: usize, motor: usize) {
        self.blocked
            .fetch_or(MotorMask::from_motor(axis, motor).bits(), Ordering::AcqRel);
    }

    /// Lift step suppression for one axis-motor pair.
    #[inline]
    pub fn unblock(&self, axis: usize, motor: usize) {
        self.blocked
            .fetch_and(!MotorMask::from_motor(axis, motor).bits(), Ordering::AcqRel);
    }

    /// Suppress steps for every motor in the mask.
    #[inline]
    pub fn block_mask(&self, mask: MotorMask) {
        self.blocked.fetch_or(mask.bits(), Ordering::AcqRel);
    }

    /// Whether one axis-motor pair is suppressed.
    #[inline]
    pub fn is_blocked(&self, axis: usize, motor: usize) -> bool {
        self.blocked().contains(axis, motor)
    }

    /// Snapshot of every suppressed motor.
    #[inline]
    pub fn blocked(&self) -> MotorMask {
        MotorMask(self.blocked.load(Ordering::Acquire))
    }

    /// Lift suppression for every motor.
    #[inline]
    pub fn clear(&self) {
        self.blocked.store(0, Ordering::Release);
    }

    /// Drop suppressed motors from a mask of motors due to step.
    #[inline]
    pub fn filter(&self, steps: MotorMask) -> MotorMask {
        steps & !self.blocked()
    }
}
