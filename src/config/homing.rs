//! Per-axis homing configuration.

use serde::Deserialize;

use super::units::{Millimeters, MmPerMin};

/// Homing section of an axis.
#[derive(Debug, Clone, Deserialize)]
pub struct HomingConfig {
    /// Homing cycle this axis takes part in. `None` excludes it from the
    /// automatic homing sequence.
    #[serde(default)]
    pub cycle: Option<u8>,

    /// Home toward the positive end of travel.
    #[serde(default = "default_positive_direction")]
    pub positive_direction: bool,

    /// Machine position assigned at the home switch.
    #[serde(default, rename = "mpos_mm")]
    pub mpos: Millimeters,

    /// Slow locate rate.
    #[serde(default = "default_feed_rate", rename = "feed_mm_per_min")]
    pub feed_rate: MmPerMin,

    /// Fast search rate.
    #[serde(default = "default_seek_rate", rename = "seek_mm_per_min")]
    pub seek_rate: MmPerMin,

    /// Pause between approach and pulloff phases.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u32,

    /// Search distance multiplier applied to max travel.
    #[serde(default = "default_scaler")]
    pub seek_scaler: f32,

    /// Locate distance multiplier applied to pulloff.
    #[serde(default = "default_scaler")]
    pub feed_scaler: f32,

    /// Allow homing this axis on its own.
    #[serde(default = "default_allow_single_axis")]
    pub allow_single_axis: bool,
}

fn default_positive_direction() -> bool {
    true
}

fn default_feed_rate() -> MmPerMin {
    MmPerMin(50.0)
}

fn default_seek_rate() -> MmPerMin {
    MmPerMin(200.0)
}

fn default_settle_ms() -> u32 {
    250
}

fn default_scaler() -> f32 {
    1.1
}

fn default_allow_single_axis() -> bool {
    true
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            cycle: None,
            positive_direction: default_positive_direction(),
            mpos: Millimeters::default(),
            feed_rate: default_feed_rate(),
            seek_rate: default_seek_rate(),
            settle_ms: default_settle_ms(),
            seek_scaler: default_scaler(),
            feed_scaler: default_scaler(),
            allow_single_axis: default_allow_single_axis(),
        }
    }
}

impl HomingConfig {
    /// Whether the axis takes part in the automatic homing sequence.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.cycle.is_some()
    }
}
