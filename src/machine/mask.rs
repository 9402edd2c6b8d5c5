//! Axis and motor bit masks.
//!
//! Masks are the addressing primitive of the registry. An [`AxisMask`] has
//! one bit per axis index. A [`MotorMask`] holds two parallel axis-indexed
//! ranges in one `u32`: bits `0..16` address the primary motor (slot 0) of
//! each axis, bits `16..32` the secondary motor (slot 1).

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Platform maximum number of axes.
pub const MAX_N_AXIS: usize = 6;

/// Motor slots per axis.
pub const MAX_MOTORS_PER_AXIS: usize = 2;

/// Axis letters in index order.
pub const AXIS_NAMES: [char; MAX_N_AXIS] = ['X', 'Y', 'Z', 'A', 'B', 'C'];

/// Bit offset of the secondary motor range in a [`MotorMask`].
pub const SECONDARY_MOTOR_SHIFT: usize = 16;

/// Set of axes, one bit per axis index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisMask(pub u8);

impl AxisMask {
    /// No axes.
    pub const EMPTY: Self = Self(0);

    /// Mask holding a single axis.
    #[inline]
    pub const fn from_axis(axis: usize) -> Self {
        if axis < 8 {
            Self(1 << axis)
        } else {
            Self(0)
        }
    }

    /// Mask holding every axis below `count`.
    #[inline]
    pub const fn all(count: usize) -> Self {
        if count >= 8 {
            Self(u8::MAX)
        } else {
            Self(((1u16 << count) - 1) as u8)
        }
    }

    /// Get the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the axis bit is set.
    #[inline]
    pub const fn contains(self, axis: usize) -> bool {
        axis < 8 && self.0 & (1 << axis) != 0
    }

    /// Set the axis bit. Indices beyond the mask width are ignored.
    #[inline]
    pub fn set(&mut self, axis: usize) {
        self.0 |= Self::from_axis(axis).0;
    }

    /// Clear the axis bit.
    #[inline]
    pub fn clear(&mut self, axis: usize) {
        self.0 &= !Self::from_axis(axis).0;
    }

    /// Whether no bit is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indices of the set bits, ascending.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..8).filter(move |&axis| self.contains(axis))
    }
}

impl BitOr for AxisMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AxisMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for AxisMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

/// Set of axis-motor pairs, see the module docs for the bit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorMask(pub u32);

impl MotorMask {
    /// No motors.
    pub const EMPTY: Self = Self(0);

    /// Bit index of a motor slot. Slot 0 maps to `axis`, slot 1 to `axis + 16`.
    #[inline]
    pub const fn motor_bit(axis: usize, motor: usize) -> usize {
        axis + SECONDARY_MOTOR_SHIFT * motor
    }

    /// Mask holding one axis-motor pair. Out-of-range pairs yield an empty mask.
    #[inline]
    pub const fn from_motor(axis: usize, motor: usize) -> Self {
        if axis < SECONDARY_MOTOR_SHIFT && motor < MAX_MOTORS_PER_AXIS {
            Self(1 << Self::motor_bit(axis, motor))
        } else {
            Self(0)
        }
    }

    /// Mask holding the primary motor of an axis.
    #[inline]
    pub const fn primary(axis: usize) -> Self {
        Self::from_motor(axis, 0)
    }

    /// Mask holding the secondary motor of an axis.
    #[inline]
    pub const fn secondary(axis: usize) -> Self {
        Self::from_motor(axis, 1)
    }

    /// Get the raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether the axis-motor pair is set.
    #[inline]
    pub const fn contains(self, axis: usize, motor: usize) -> bool {
        let bit = Self::from_motor(axis, motor).0;
        bit != 0 && self.0 & bit != 0
    }

    /// Set an axis-motor pair.
    #[inline]
    pub fn set(&mut self, axis: usize, motor: usize) {
        self.0 |= Self::from_motor(axis, motor).0;
    }

    /// Clear an axis-motor pair.
    #[inline]
    pub fn clear(&mut self, axis: usize, motor: usize) {
        self.0 &= !Self::from_motor(axis, motor).0;
    }

    /// Whether no bit is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Axes whose primary motor is set.
    #[inline]
    pub const fn primary_axes(self) -> AxisMask {
        AxisMask(self.0 as u8)
    }

    /// Axes whose secondary motor is set.
    #[inline]
    pub const fn secondary_axes(self) -> AxisMask {
        AxisMask((self.0 >> SECONDARY_MOTOR_SHIFT) as u8)
    }

    /// Axes with at least one motor set.
    #[inline]
    pub const fn axes(self) -> AxisMask {
        AxisMask(self.primary_axes().0 | self.secondary_axes().0)
    }
}

impl BitOr for MotorMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for MotorMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for MotorMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl Not for MotorMask {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}
