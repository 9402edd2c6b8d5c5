//! # stepper-axes
//!
//! Axis registry and step timing core for CNC motion controllers, with
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Axis registry**: Up to 6 axes (X, Y, Z, A, B, C), two motor slots each
//! - **Mask addressing**: Bulk enable/disable and homing by axis or motor mask
//! - **Shared stepper lines**: One disable and one reset pin for every driver
//! - **Step timer**: Interrupt-driven periodic callback with runtime rate changes
//! - **no_std compatible**: Core library works without standard library
//! - **Type-state safety**: Runtime operations only exist after `init`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_axes::{AxesBuilder, AxisMask, MotorsDisabled, StepBlocks};
//!
//! static BLOCKS: StepBlocks = StepBlocks::new();
//! static DISABLED: MotorsDisabled = MotorsDisabled::new();
//!
//! // Load configuration from TOML
//! let config = stepper_axes::load_config("machine.toml")?;
//!
//! // Build the registry, creating a driver for every configured motor
//! let mut axes = AxesBuilder::new()
//!     .from_config(&config, |axis, motor, _| make_driver(axis, motor))?
//!     .shared_disable_pin(disable_pin)
//!     .after_parse()
//!     .init()?;
//!
//! // Enable motors, then wait for the drivers to settle
//! axes.set_disable(false, &DISABLED)?.wait(&mut delay);
//!
//! // Home X and Y
//! let mask = axes.names_to_mask("XY").mask;
//! let active = axes.set_homing_mode(mask, true, &BLOCKS);
//! log::info!("Homing{}", axes.motor_mask_to_names(active));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables boxed motor drivers for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod machine;
pub mod motor;
pub mod stepping;

// Re-exports for ergonomic API
pub use config::{validate_config, AxesConfig, AxisConfig, HomingConfig, MachineConfig, MotorConfig};
pub use error::{Error, Result};
pub use machine::{
    state, Axes, AxesBuilder, Axis, AxisMask, AxisNames, MotorMask, MotorsDisabled, NoPin, Settle,
};
pub use motor::{Motor, MotorDriver, NullMotor};
pub use stepping::{StepBlocks, StepCallback, StepEngine, StepTimer, StepTimerHardware};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Millimeters, MmPerMin, MmPerSecSquared};
