//! Builder collecting the axis table before it is finalized.

use core::marker::PhantomData;

use embedded_hal::digital::OutputPin;

use crate::config::{MachineConfig, MotorConfig, HOMING_RUNS_RANGE};
use crate::error::{AxisError, ConfigError, Error, Result};
use crate::motor::{Motor, MotorDriver};

use super::axes::Axes;
use super::axis::Axis;
use super::mask::{AxisMask, AXIS_NAMES, MAX_N_AXIS};
use super::pin::NoPin;
use super::state::Parsed;

/// Axis count reported at minimum; senders assume at least X, Y and Z.
pub const MIN_AXIS_COUNT: usize = 3;

/// Builder for the axis registry.
///
/// Collects axis slots, shared stepper lines and homing settings while the
/// configuration is applied, then [`after_parse`](Self::after_parse)
/// finalizes the axis table.
pub struct AxesBuilder<D, P = NoPin> {
    axes: [Option<Axis<D>>; MAX_N_AXIS],
    shared_disable: Option<P>,
    shared_reset: Option<P>,
    homing_runs: u32,
    disable_delay_us: u32,
}

impl<D, P> Default for AxesBuilder<D, P>
where
    D: MotorDriver,
    P: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D, P> AxesBuilder<D, P>
where
    D: MotorDriver,
    P: OutputPin,
{
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            axes: core::array::from_fn(|_| None),
            shared_disable: None,
            shared_reset: None,
            homing_runs: 2,
            disable_delay_us: 0,
        }
    }

    /// Place an axis in the slot given by its index, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AxisError::AxisOutOfRange` if the index exceeds the platform maximum.
    pub fn axis(mut self, axis: Axis<D>) -> Result<Self> {
        let index = axis.index();
        let slot = self
            .axes
            .get_mut(index)
            .ok_or(Error::Axis(AxisError::AxisOutOfRange(index)))?;
        *slot = Some(axis);
        Ok(self)
    }

    /// Set the line that disables every stepper driver at once.
    pub fn shared_disable_pin(mut self, pin: P) -> Self {
        self.shared_disable = Some(pin);
        self
    }

    /// Set the line that holds every stepper driver in reset.
    pub fn shared_reset_pin(mut self, pin: P) -> Self {
        self.shared_reset = Some(pin);
        self
    }

    /// Set the number of homing approach/pulloff runs (clamped to 1-5).
    pub fn homing_runs(mut self, runs: u32) -> Self {
        self.homing_runs = runs.clamp(*HOMING_RUNS_RANGE.start(), *HOMING_RUNS_RANGE.end());
        self
    }

    /// Set the settle time applied when disabled motors are re-enabled.
    pub fn disable_delay_us(mut self, delay_us: u32) -> Self {
        self.disable_delay_us = delay_us;
        self
    }

    /// Apply a machine configuration.
    ///
    /// Every axis section becomes an axis; every motor section is handed to
    /// `factory` together with its axis index and slot, and the returned
    /// driver is placed in that slot. Shared pins are not created here: check
    /// `config.axes.shared_stepper_*_pin` and attach them with
    /// [`shared_disable_pin`](Self::shared_disable_pin) and
    /// [`shared_reset_pin`](Self::shared_reset_pin).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DriverUnavailable` if the factory returns `None`.
    pub fn from_config<F>(mut self, config: &MachineConfig, mut factory: F) -> Result<Self>
    where
        F: FnMut(usize, usize, &MotorConfig) -> Option<D>,
    {
        self = self
            .homing_runs(config.axes.homing_runs)
            .disable_delay_us(config.stepping.disable_delay_us);

        for (index, axis_config) in config.axes.axes().into_iter().enumerate() {
            let Some(axis_config) = axis_config else {
                continue;
            };

            let mut axis = Axis::from_config(index, axis_config);
            for (slot, motor_config) in axis_config.motors().into_iter().enumerate() {
                let Some(motor_config) = motor_config else {
                    continue;
                };

                let driver = factory(index, slot, motor_config).ok_or(Error::Config(
                    ConfigError::DriverUnavailable {
                        axis: AXIS_NAMES[index],
                        motor: slot,
                    },
                ))?;
                axis = axis.with_motor(slot, Motor::from_config(driver, motor_config))?;
            }

            self.axes[index] = Some(axis);
        }

        Ok(self)
    }

    /// Finalize the axis table.
    ///
    /// The axis count is one past the highest populated slot, raised to at
    /// least [`MIN_AXIS_COUNT`]. Every empty slot below the count is filled
    /// with a default [`Axis`], so the resulting registry has no gaps.
    pub fn after_parse(self) -> Axes<D, P, Parsed> {
        let count = self
            .axes
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1)
            .max(MIN_AXIS_COUNT);

        let mut table = heapless::Vec::new();
        for (index, slot) in self.axes.into_iter().enumerate().take(count) {
            // count <= MAX_N_AXIS, the table cannot overflow
            let _ = table.push(slot.unwrap_or_else(|| Axis::new(index)));
        }

        Axes {
            axes: table,
            shared_disable: self.shared_disable,
            shared_reset: self.shared_reset,
            homing_runs: self.homing_runs,
            disable_delay_us: self.disable_delay_us,
            homing_direction_mask: AxisMask::EMPTY,
            _state: PhantomData,
        }
    }
}
