//! Unit tests for axis and motor masks and their letter renderings.

use proptest::prelude::*;

use stepper_axes::machine::{
    mask_to_names, motor_mask_to_names, names_to_mask, AXIS_NAMES, MAX_N_AXIS,
};
use stepper_axes::{AxisMask, MotorMask};

#[test]
fn test_motor_bit_layout() {
    assert_eq!(MotorMask::from_motor(0, 0).bits(), 1);
    assert_eq!(MotorMask::from_motor(2, 0).bits(), 1 << 2);
    assert_eq!(MotorMask::from_motor(0, 1).bits(), 1 << 16);
    assert_eq!(MotorMask::from_motor(5, 1).bits(), 1 << 21);
}

#[test]
fn test_motor_mask_axes() {
    let mask = MotorMask::primary(1) | MotorMask::secondary(3);
    assert_eq!(mask.primary_axes(), AxisMask::from_axis(1));
    assert_eq!(mask.secondary_axes(), AxisMask::from_axis(3));
    assert_eq!(mask.axes(), AxisMask(0b1010));
}

proptest! {
    #[test]
    fn prop_names_roundtrip_mask(count in 3usize..=MAX_N_AXIS, bits in any::<u8>()) {
        let names = &AXIS_NAMES[..count];
        let mask = AxisMask(bits) & AxisMask::all(count);

        let rendered = mask_to_names(names, mask);
        let resolved = names_to_mask(names, &rendered);

        prop_assert!(resolved.is_valid());
        prop_assert_eq!(resolved.mask, mask);
        prop_assert_eq!(rendered.len() as u32, mask.bits().count_ones());
    }

    #[test]
    fn prop_lowercase_resolves_like_uppercase(count in 3usize..=MAX_N_AXIS, bits in any::<u8>()) {
        let names = &AXIS_NAMES[..count];
        let mask = AxisMask(bits) & AxisMask::all(count);

        let upper = mask_to_names(names, mask);
        let lower: String = upper.chars().map(|c| c.to_ascii_lowercase()).collect();

        prop_assert_eq!(names_to_mask(names, &lower).mask, mask);
    }

    #[test]
    fn prop_motor_names_count_set_bits(primary in 0u32..64, secondary in 0u32..64) {
        let mask = MotorMask(primary | (secondary << 16));
        let rendered = motor_mask_to_names(&AXIS_NAMES, mask);

        prop_assert_eq!(
            rendered.matches(' ').count() as u32,
            primary.count_ones() + secondary.count_ones()
        );
        prop_assert_eq!(rendered.matches('2').count() as u32, secondary.count_ones());
    }
}
