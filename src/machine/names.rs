//! Conversions between axis letters and masks.

use heapless::{String, Vec};

use super::mask::{AxisMask, MotorMask, MAX_N_AXIS, SECONDARY_MOTOR_SHIFT};

/// Longest rendering of a motor mask: `" X"` and `" X2"` for every axis.
pub const MOTOR_NAMES_CAPACITY: usize = 32;

/// Invalid letters remembered by [`names_to_mask`]; later ones are dropped.
pub const MAX_INVALID_NAMES: usize = 8;

/// Result of resolving a string of axis letters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AxisNames {
    /// Axes whose letters resolved.
    pub mask: AxisMask,
    /// Characters that matched no configured axis, in input order.
    pub invalid: Vec<char, MAX_INVALID_NAMES>,
}

impl AxisNames {
    /// Whether every character resolved.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Render an axis mask as concatenated letters in index order, e.g. `"XZ"`.
pub fn mask_to_names(names: &[char], mask: AxisMask) -> String<MAX_N_AXIS> {
    let mut out = String::new();
    for (axis, &name) in names.iter().enumerate() {
        if mask.contains(axis) {
            let _ = out.push(name);
        }
    }
    out
}

/// Render a motor mask as space-prefixed letters, primary motors first and
/// then secondary motors with a `2` suffix, e.g. `" X Y X2"`.
pub fn motor_mask_to_names(names: &[char], mask: MotorMask) -> String<MOTOR_NAMES_CAPACITY> {
    let mut out = String::new();
    for (axis, &name) in names.iter().enumerate() {
        if mask.contains(axis, 0) {
            let _ = out.push(' ');
            let _ = out.push(name);
        }
    }
    for (axis, &name) in names.iter().enumerate().take(SECONDARY_MOTOR_SHIFT) {
        if mask.contains(axis, 1) {
            let _ = out.push(' ');
            let _ = out.push(name);
            let _ = out.push('2');
        }
    }
    out
}

/// Resolve axis letters, case-insensitively, against the configured names.
///
/// Unknown characters are collected in [`AxisNames::invalid`] and logged;
/// they never set a bit, and the remaining characters are still resolved.
pub fn names_to_mask(names: &[char], input: &str) -> AxisNames {
    let mut result = AxisNames::default();
    for ch in input.chars() {
        let upper = ch.to_ascii_uppercase();
        match names.iter().position(|&name| name == upper) {
            Some(axis) => result.mask.set(axis),
            None => {
                error!("Invalid axis name {}", ch);
                let _ = result.invalid.push(ch);
            }
        }
    }
    result
}
