//! Machine configuration - root configuration structure.

use serde::Deserialize;

use crate::machine::MAX_N_AXIS;

use super::axis::AxisConfig;
use super::pin::PinSpec;
use super::stepping::SteppingConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MachineConfig {
    /// Step generation timing.
    #[serde(default)]
    pub stepping: SteppingConfig,

    /// Axis table and shared stepper lines.
    #[serde(default)]
    pub axes: AxesConfig,
}

/// `[axes]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AxesConfig {
    /// Line that disables every stepper driver at once.
    #[serde(default)]
    pub shared_stepper_disable_pin: PinSpec,

    /// Line that holds every stepper driver in reset.
    #[serde(default)]
    pub shared_stepper_reset_pin: PinSpec,

    /// Number of approach/pulloff repetitions during homing.
    #[serde(default = "default_homing_runs")]
    pub homing_runs: u32,

    /// X axis.
    #[serde(default)]
    pub x: Option<AxisConfig>,
    /// Y axis.
    #[serde(default)]
    pub y: Option<AxisConfig>,
    /// Z axis.
    #[serde(default)]
    pub z: Option<AxisConfig>,
    /// A axis.
    #[serde(default)]
    pub a: Option<AxisConfig>,
    /// B axis.
    #[serde(default)]
    pub b: Option<AxisConfig>,
    /// C axis.
    #[serde(default)]
    pub c: Option<AxisConfig>,
}

fn default_homing_runs() -> u32 {
    2
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            shared_stepper_disable_pin: PinSpec::default(),
            shared_stepper_reset_pin: PinSpec::default(),
            homing_runs: default_homing_runs(),
            x: None,
            y: None,
            z: None,
            a: None,
            b: None,
            c: None,
        }
    }
}

impl AxesConfig {
    /// Axis sections in index order (X, Y, Z, A, B, C).
    pub fn axes(&self) -> [Option<&AxisConfig>; MAX_N_AXIS] {
        [
            self.x.as_ref(),
            self.y.as_ref(),
            self.z.as_ref(),
            self.a.as_ref(),
            self.b.as_ref(),
            self.c.as_ref(),
        ]
    }

    /// Get an axis section by index.
    pub fn axis(&self, index: usize) -> Option<&AxisConfig> {
        self.axes().get(index).copied().flatten()
    }

    /// Number of axis sections present.
    pub fn configured_count(&self) -> usize {
        self.axes().iter().filter(|a| a.is_some()).count()
    }
}
