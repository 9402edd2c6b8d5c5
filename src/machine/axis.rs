//! A single logical machine axis.

use crate::config::units::{Millimeters, MmPerMin, MmPerSecSquared};
use crate::config::{AxisConfig, HomingConfig};
use crate::error::{AxisError, Error, Result};
use crate::motor::{Motor, MotorDriver};

use super::mask::{AXIS_NAMES, MAX_MOTORS_PER_AXIS};

/// One logical machine axis (X, Y, Z, A, B or C) and its motor slots.
///
/// Motor slots may be empty. They are fixed once the registry leaves the
/// builder: no motor is added or removed at runtime.
#[derive(Debug)]
pub struct Axis<D> {
    index: usize,
    motors: [Option<Motor<D>>; MAX_MOTORS_PER_AXIS],
    homing: Option<HomingConfig>,
    steps_per_mm: f32,
    max_rate: MmPerMin,
    acceleration: MmPerSecSquared,
    max_travel: Millimeters,
}

impl<D: MotorDriver> Axis<D> {
    /// Create an axis with default settings, no homing and no motors.
    ///
    /// This is what the registry synthesizes for axes below the axis count
    /// that have no configuration section.
    pub fn new(index: usize) -> Self {
        Self::from_config(index, &AxisConfig::default())
    }

    /// Create an axis from its configuration section.
    ///
    /// Motor sections are not turned into motors here, see
    /// [`AxesBuilder::from_config`](super::AxesBuilder::from_config).
    pub fn from_config(index: usize, config: &AxisConfig) -> Self {
        Self {
            index,
            motors: [None, None],
            homing: config.homing.clone(),
            steps_per_mm: config.steps_per_mm,
            max_rate: config.max_rate,
            acceleration: config.acceleration,
            max_travel: config.max_travel,
        }
    }

    /// Place a motor in a slot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AxisError::MotorOutOfRange` if `slot` is not a valid motor slot.
    pub fn with_motor(mut self, slot: usize, motor: Motor<D>) -> Result<Self> {
        let entry = self
            .motors
            .get_mut(slot)
            .ok_or(Error::Axis(AxisError::MotorOutOfRange(slot)))?;
        *entry = Some(motor);
        Ok(self)
    }

    /// Set the homing configuration.
    pub fn with_homing(mut self, homing: HomingConfig) -> Self {
        self.homing = Some(homing);
        self
    }

    /// Get the axis index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the axis letter.
    #[inline]
    pub fn name(&self) -> char {
        AXIS_NAMES.get(self.index).copied().unwrap_or('?')
    }

    /// Get the motor in a slot, if any.
    #[inline]
    pub fn motor(&self, slot: usize) -> Option<&Motor<D>> {
        self.motors.get(slot).and_then(Option::as_ref)
    }

    /// Get the motor in a slot mutably, if any.
    #[inline]
    pub fn motor_mut(&mut self, slot: usize) -> Option<&mut Motor<D>> {
        self.motors.get_mut(slot).and_then(Option::as_mut)
    }

    /// Iterate over populated motor slots as `(slot, motor)`.
    pub fn motors(&self) -> impl Iterator<Item = (usize, &Motor<D>)> {
        self.motors
            .iter()
            .enumerate()
            .filter_map(|(slot, m)| m.as_ref().map(|m| (slot, m)))
    }

    /// Number of populated motor slots.
    pub fn motor_count(&self) -> usize {
        self.motors.iter().filter(|m| m.is_some()).count()
    }

    /// Get the homing configuration.
    #[inline]
    pub fn homing(&self) -> Option<&HomingConfig> {
        self.homing.as_ref()
    }

    /// Whether the axis homes toward negative travel.
    pub fn homes_negative(&self) -> bool {
        self.homing.as_ref().map_or(false, |h| !h.positive_direction)
    }

    /// Motor steps per millimeter.
    #[inline]
    pub fn steps_per_mm(&self) -> f32 {
        self.steps_per_mm
    }

    /// Maximum feed rate.
    #[inline]
    pub fn max_rate(&self) -> MmPerMin {
        self.max_rate
    }

    /// Maximum acceleration.
    #[inline]
    pub fn acceleration(&self) -> MmPerSecSquared {
        self.acceleration
    }

    /// Length of travel.
    #[inline]
    pub fn max_travel(&self) -> Millimeters {
        self.max_travel
    }

    /// Step rate at maximum feed, in steps per second.
    pub fn max_step_rate(&self) -> f32 {
        self.max_rate.per_second() * self.steps_per_mm
    }

    /// Soft travel limits in machine coordinates as `(min, max)`.
    ///
    /// The home position bounds travel on the homing side; without homing
    /// the axis travels from `-max_travel` up to 0.
    pub fn travel_limits(&self) -> (Millimeters, Millimeters) {
        let mpos = self.homing.as_ref().map_or(Millimeters(0.0), |h| h.mpos);
        if self.homes_negative() {
            (mpos, mpos + self.max_travel)
        } else {
            (mpos - self.max_travel, mpos)
        }
    }

    /// Whether this axis owns the given driver instance.
    pub fn has_motor(&self, driver: &D) -> bool {
        self.motor_slot(driver).is_some()
    }

    /// Slot index of the given driver instance on this axis.
    pub fn motor_slot(&self, driver: &D) -> Option<usize> {
        self.motors().find(|(_, m)| m.is_driver(driver)).map(|(slot, _)| slot)
    }

    /// Whether any motor on this axis applies hard limits.
    pub fn hard_limits(&self) -> bool {
        self.motors().any(|(_, m)| m.hard_limits())
    }

    /// Forward an enable/disable command to every motor.
    ///
    /// Interrupt safe as long as the drivers' `set_disable` is.
    pub fn set_disable(&mut self, disable: bool) {
        for motor in self.motors.iter_mut().flatten() {
            motor.driver_mut().set_disable(disable);
        }
    }

    /// Initialize every motor driver.
    pub(crate) fn init(&mut self) {
        for motor in self.motors.iter_mut().flatten() {
            motor.driver_mut().init();
        }
    }

    /// Apply driver-specific settings to every motor.
    pub(crate) fn config_motors(&mut self) {
        for motor in self.motors.iter_mut().flatten() {
            motor.driver_mut().config_motor();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::NullMotor;

    #[test]
    fn test_default_axis() {
        let axis: Axis<NullMotor> = Axis::new(2);
        assert_eq!(axis.name(), 'Z');
        assert_eq!(axis.motor_count(), 0);
        assert!(axis.homing().is_none());
        assert!(!axis.hard_limits());
    }

    #[test]
    fn test_motor_slot_out_of_range() {
        let axis: Axis<NullMotor> = Axis::new(0);
        let result = axis.with_motor(2, Motor::new(NullMotor));
        assert!(matches!(
            result,
            Err(Error::Axis(AxisError::MotorOutOfRange(2)))
        ));
    }

    #[test]
    fn test_secondary_slot_only() {
        let axis = Axis::new(1).with_motor(1, Motor::new(NullMotor)).unwrap();
        assert!(axis.motor(0).is_none());
        assert!(axis.motor(1).is_some());
        let slots: heapless::Vec<usize, 2> = axis.motors().map(|(slot, _)| slot).collect();
        assert_eq!(slots.as_slice(), &[1]);
    }

    #[test]
    fn test_travel_limits_without_homing() {
        let config = AxisConfig {
            max_travel: Millimeters(300.0),
            ..AxisConfig::default()
        };
        let axis: Axis<NullMotor> = Axis::from_config(0, &config);
        assert_eq!(axis.travel_limits(), (Millimeters(-300.0), Millimeters(0.0)));
    }

    #[test]
    fn test_travel_limits_homing_negative() {
        let config = AxisConfig {
            max_travel: Millimeters(200.0),
            homing: Some(HomingConfig {
                positive_direction: false,
                mpos: Millimeters(5.0),
                ..HomingConfig::default()
            }),
            ..AxisConfig::default()
        };
        let axis: Axis<NullMotor> = Axis::from_config(0, &config);
        assert!(axis.homes_negative());
        assert_eq!(axis.travel_limits(), (Millimeters(5.0), Millimeters(205.0)));
    }

    #[test]
    fn test_max_step_rate() {
        let config = AxisConfig {
            steps_per_mm: 100.0,
            max_rate: MmPerMin(6000.0),
            ..AxisConfig::default()
        };
        let axis: Axis<NullMotor> = Axis::from_config(0, &config);
        assert!((axis.max_step_rate() - 10_000.0).abs() < 0.01);
    }

    #[derive(Debug)]
    struct Tagged(u8);

    impl MotorDriver for Tagged {
        fn set_disable(&mut self, _disable: bool) {}

        fn set_homing_mode(&mut self, _is_homing: bool) -> bool {
            true
        }
    }

    #[test]
    fn test_driver_identity() {
        let axis = Axis::new(0)
            .with_motor(0, Motor::new(Tagged(0)))
            .unwrap()
            .with_motor(1, Motor::new(Tagged(0)))
            .unwrap();

        let second = axis.motor(1).unwrap().driver();
        assert_eq!(axis.motor_slot(second), Some(1));

        // Same value, different instance
        let stranger = Tagged(0);
        assert!(!axis.has_motor(&stranger));
    }
}
