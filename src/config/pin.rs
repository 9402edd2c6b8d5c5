//! Opaque pin specifications.

use heapless::String;
use serde::Deserialize;

/// Pin assignment as written in the configuration file, e.g. `"gpio.13:low"`.
///
/// The text is handed untouched to the platform layer; this crate
/// only needs to know whether a pin was assigned at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct PinSpec(pub String<32>);

impl PinSpec {
    /// Spelling of an explicitly unassigned pin.
    pub const UNDEFINED: &'static str = "NO_PIN";

    /// Create a pin specification from text.
    ///
    /// Text longer than the fixed capacity yields an undefined pin.
    pub fn new(spec: &str) -> Self {
        Self(String::try_from(spec).unwrap_or_default())
    }

    /// Get the raw pin text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether a physical pin was assigned.
    pub fn is_defined(&self) -> bool {
        let spec = self.0.trim();
        !spec.is_empty() && !spec.eq_ignore_ascii_case(Self::UNDEFINED)
    }
}
