//! Registry lifecycle type-state markers.
//!
//! Uses Rust's type system to enforce the configuration phase ordering at
//! compile time: the axis table is finalized before `init`, and `init`
//! completes before any homing or enable/disable operation.

/// Axis table finalized, hardware not yet initialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parsed;

/// Shared pins and motors initialized; runtime operations available.
#[derive(Debug, Clone, Copy)]
pub struct Ready;

/// Trait for registry states.
pub trait AxesState: private::Sealed {}

impl AxesState for Parsed {}
impl AxesState for Ready {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Parsed {}
    impl Sealed for super::Ready {}
}

/// State name for display/debugging.
pub trait StateName {
    /// Get the state name as a static string.
    fn name() -> &'static str;
}

impl StateName for Parsed {
    fn name() -> &'static str {
        "Parsed"
    }
}

impl StateName for Ready {
    fn name() -> &'static str {
        "Ready"
    }
}
