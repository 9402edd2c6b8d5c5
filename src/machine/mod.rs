//! Machine axis registry.
//!
//! Provides the axis table, its builder and lifecycle states, axis and motor
//! masks, and the conversions between masks and axis letters.

mod axes;
mod axis;
mod builder;
mod disabled;
mod mask;
mod names;
mod pin;
pub mod state;

pub use axes::Axes;
pub use axis::Axis;
pub use builder::{AxesBuilder, MIN_AXIS_COUNT};
pub use disabled::{MotorsDisabled, Settle};
pub use mask::{
    AxisMask, MotorMask, AXIS_NAMES, MAX_MOTORS_PER_AXIS, MAX_N_AXIS, SECONDARY_MOTOR_SHIFT,
};
pub use names::{
    mask_to_names, motor_mask_to_names, names_to_mask, AxisNames, MAX_INVALID_NAMES,
    MOTOR_NAMES_CAPACITY,
};
pub use pin::NoPin;
pub use state::{AxesState, Parsed, Ready, StateName};
