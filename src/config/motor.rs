//! Per-motor configuration.

use serde::Deserialize;

use super::pin::PinSpec;
use super::units::Millimeters;

/// Motor section of an axis (`motor0` or `motor1`).
///
/// Driver-specific settings are not interpreted here; the driver factory
/// passed to the axes builder turns this section into a concrete driver.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Whether limit switches on this motor stop motion outside homing.
    #[serde(default = "default_hard_limits")]
    pub hard_limits: bool,

    /// Distance backed off the switch after homing.
    #[serde(default = "default_pulloff", rename = "pulloff_mm")]
    pub pulloff: Millimeters,

    /// Switch at the negative end of travel.
    #[serde(default)]
    pub limit_neg_pin: PinSpec,

    /// Switch at the positive end of travel.
    #[serde(default)]
    pub limit_pos_pin: PinSpec,

    /// Single switch covering both ends.
    #[serde(default)]
    pub limit_all_pin: PinSpec,
}

fn default_hard_limits() -> bool {
    true
}

fn default_pulloff() -> Millimeters {
    Millimeters(1.0)
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            hard_limits: default_hard_limits(),
            pulloff: default_pulloff(),
            limit_neg_pin: PinSpec::default(),
            limit_pos_pin: PinSpec::default(),
            limit_all_pin: PinSpec::default(),
        }
    }
}

impl MotorConfig {
    /// Whether any limit switch is wired to this motor.
    pub fn has_limit_switch(&self) -> bool {
        self.limit_neg_pin.is_defined()
            || self.limit_pos_pin.is_defined()
            || self.limit_all_pin.is_defined()
    }
}
