//! Motor module for stepper-axes.
//!
//! Provides the driver capability trait and the motor slot owned by an axis.

mod driver;
mod slot;

pub use driver::{MotorDriver, NullMotor};
pub use slot::Motor;
