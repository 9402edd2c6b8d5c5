//! Configuration module for stepper-axes.
//!
//! Provides types for loading and validating the axis table, homing and
//! stepping configuration from TOML files (with `std` feature) or pre-parsed
//! data.

mod axis;
mod homing;
mod motor;
mod pin;
mod stepping;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::AxisConfig;
pub use homing::HomingConfig;
pub use motor::MotorConfig;
pub use pin::PinSpec;
pub use stepping::{SteppingConfig, IDLE_FOREVER_MS};
pub use system::{AxesConfig, MachineConfig};
pub use validation::{validate_config, HOMING_RUNS_RANGE};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millimeters, MmPerMin, MmPerSecSquared};
