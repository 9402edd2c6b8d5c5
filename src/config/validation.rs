//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::machine::AXIS_NAMES;

use super::{AxisConfig, HomingConfig, MachineConfig, SteppingConfig};

/// Range accepted for the number of homing approach/pulloff runs.
pub const HOMING_RUNS_RANGE: core::ops::RangeInclusive<u32> = 1..=5;

/// Validate a machine configuration.
///
/// Checks:
/// - Homing runs are within 1-5
/// - Axis rates, accelerations and steps per mm are finite and positive
/// - Homing rates are positive and scalers exceed 1.0
/// - Travel and motor pulloff distances are finite and not negative
/// - Step pulse width and timer frequency are positive
pub fn validate_config(config: &MachineConfig) -> Result<()> {
    validate_stepping(&config.stepping)?;

    if !HOMING_RUNS_RANGE.contains(&config.axes.homing_runs) {
        return Err(Error::Config(ConfigError::InvalidHomingRuns(
            config.axes.homing_runs,
        )));
    }

    for (index, axis) in config.axes.axes().into_iter().enumerate() {
        if let Some(axis) = axis {
            validate_axis(AXIS_NAMES[index], axis)?;
        }
    }

    Ok(())
}

fn validate_stepping(config: &SteppingConfig) -> Result<()> {
    if config.pulse_us == 0 {
        return Err(Error::Config(ConfigError::InvalidPulseWidth(config.pulse_us)));
    }

    if config.timer_frequency_hz == 0 {
        return Err(Error::Config(ConfigError::InvalidTimerFrequency(
            config.timer_frequency_hz,
        )));
    }

    Ok(())
}

fn validate_axis(name: char, config: &AxisConfig) -> Result<()> {
    if !positive(config.steps_per_mm) {
        return Err(Error::Config(ConfigError::InvalidStepsPerMm {
            axis: name,
            value: config.steps_per_mm,
        }));
    }

    if !positive(config.max_rate.0) {
        return Err(Error::Config(ConfigError::InvalidMaxRate {
            axis: name,
            value: config.max_rate.0,
        }));
    }

    if !positive(config.acceleration.0) {
        return Err(Error::Config(ConfigError::InvalidAcceleration {
            axis: name,
            value: config.acceleration.0,
        }));
    }

    if !non_negative(config.max_travel.0) {
        return Err(Error::Config(ConfigError::InvalidMaxTravel {
            axis: name,
            value: config.max_travel.0,
        }));
    }

    if let Some(ref homing) = config.homing {
        validate_homing(name, homing)?;
    }

    for (slot, motor) in config.motors().into_iter().enumerate() {
        if let Some(motor) = motor {
            if !non_negative(motor.pulloff.0) {
                return Err(Error::Config(ConfigError::InvalidPulloff {
                    axis: name,
                    motor: slot,
                    value: motor.pulloff.0,
                }));
            }
        }
    }

    Ok(())
}

// NaN fails every comparison, so test for the accepted range.
fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn validate_homing(name: char, homing: &HomingConfig) -> Result<()> {
    for rate in [homing.feed_rate, homing.seek_rate] {
        if !positive(rate.0) {
            return Err(Error::Config(ConfigError::InvalidHomingRate {
                axis: name,
                value: rate.0,
            }));
        }
    }

    for scaler in [homing.seek_scaler, homing.feed_scaler] {
        if !scaler.is_finite() || scaler <= 1.0 {
            return Err(Error::Config(ConfigError::InvalidHomingScaler {
                axis: name,
                value: scaler,
            }));
        }
    }

    Ok(())
}
