//! Per-axis configuration.

use serde::Deserialize;

use super::homing::HomingConfig;
use super::motor::MotorConfig;
use super::units::{Millimeters, MmPerMin, MmPerSecSquared};

/// Axis section (`x`, `y`, `z`, `a`, `b` or `c`).
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Motor steps per millimeter of travel.
    #[serde(default = "default_steps_per_mm")]
    pub steps_per_mm: f32,

    /// Maximum feed rate.
    #[serde(default = "default_max_rate", rename = "max_rate_mm_per_min")]
    pub max_rate: MmPerMin,

    /// Maximum acceleration.
    #[serde(default = "default_acceleration", rename = "acceleration_mm_per_sec2")]
    pub acceleration: MmPerSecSquared,

    /// Length of travel, used for soft limits and homing search distance.
    #[serde(default = "default_max_travel", rename = "max_travel_mm")]
    pub max_travel: Millimeters,

    /// Optional homing section.
    #[serde(default)]
    pub homing: Option<HomingConfig>,

    /// Primary motor.
    #[serde(default)]
    pub motor0: Option<MotorConfig>,

    /// Secondary motor (e.g. the second side of a gantry).
    #[serde(default)]
    pub motor1: Option<MotorConfig>,
}

fn default_steps_per_mm() -> f32 {
    80.0
}

fn default_max_rate() -> MmPerMin {
    MmPerMin(1000.0)
}

fn default_acceleration() -> MmPerSecSquared {
    MmPerSecSquared(25.0)
}

fn default_max_travel() -> Millimeters {
    Millimeters(1000.0)
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            steps_per_mm: default_steps_per_mm(),
            max_rate: default_max_rate(),
            acceleration: default_acceleration(),
            max_travel: default_max_travel(),
            homing: None,
            motor0: None,
            motor1: None,
        }
    }
}

impl AxisConfig {
    /// Motor sections by slot index.
    pub fn motors(&self) -> [Option<&MotorConfig>; 2] {
        [self.motor0.as_ref(), self.motor1.as_ref()]
    }
}
