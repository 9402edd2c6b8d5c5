//! Unit test harness for stepper-axes.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod masks;
mod step_timer;
