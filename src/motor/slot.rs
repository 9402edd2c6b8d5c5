//! Motor slot owned by an axis.

use crate::config::units::Millimeters;
use crate::config::MotorConfig;

use super::driver::MotorDriver;

/// One physical actuator driving (a share of) an axis.
#[derive(Debug)]
pub struct Motor<D> {
    driver: D,
    hard_limits: bool,
    pulloff: Millimeters,
}

impl<D: MotorDriver> Motor<D> {
    /// Create a motor with hard limits enabled and the default pulloff.
    pub fn new(driver: D) -> Self {
        Self::from_config(driver, &MotorConfig::default())
    }

    /// Create a motor from its configuration section.
    pub fn from_config(driver: D, config: &MotorConfig) -> Self {
        Self {
            driver,
            hard_limits: config.hard_limits,
            pulloff: config.pulloff,
        }
    }

    /// Set whether limit switches on this motor apply outside homing.
    pub fn with_hard_limits(mut self, hard_limits: bool) -> Self {
        self.hard_limits = hard_limits;
        self
    }

    /// Get the driver.
    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get the driver mutably.
    #[inline]
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Whether limit switches on this motor stop motion outside homing.
    #[inline]
    pub fn hard_limits(&self) -> bool {
        self.hard_limits
    }

    /// Distance backed off the switch after homing.
    #[inline]
    pub fn pulloff(&self) -> Millimeters {
        self.pulloff
    }

    /// Whether this slot holds the given driver instance.
    #[inline]
    pub fn is_driver(&self, driver: &D) -> bool {
        core::ptr::eq(&self.driver, driver)
    }
}
