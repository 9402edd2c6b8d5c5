//! Motor driver capability contract.
//!
//! Concrete drivers (step/dir steppers, smart drivers, servos) live outside
//! this crate and plug into the axis registry through [`MotorDriver`].

/// Capabilities the axis registry needs from a physical motor driver.
///
/// `set_disable` may be called from the step interrupt as a fault response:
/// implementations must not block or allocate there.
pub trait MotorDriver {
    /// Bring up the driver. Called once per motor from the registry `init`.
    fn init(&mut self) {}

    /// Apply driver-specific settings after every axis is initialized.
    fn config_motor(&mut self) {}

    /// Enable (`false`) or disable (`true`) the motor.
    fn set_disable(&mut self, disable: bool);

    /// Enter or leave homing mode.
    ///
    /// Returns `true` if the motor actively moves during homing. Motors that
    /// return `false` are carried along passively.
    fn set_homing_mode(&mut self, is_homing: bool) -> bool;

    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        "motor"
    }
}

impl<T: MotorDriver + ?Sized> MotorDriver for &mut T {
    fn init(&mut self) {
        (**self).init()
    }

    fn config_motor(&mut self) {
        (**self).config_motor()
    }

    fn set_disable(&mut self, disable: bool) {
        (**self).set_disable(disable)
    }

    fn set_homing_mode(&mut self, is_homing: bool) -> bool {
        (**self).set_homing_mode(is_homing)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(feature = "alloc")]
impl<T: MotorDriver + ?Sized> MotorDriver for alloc::boxed::Box<T> {
    fn init(&mut self) {
        (**self).init()
    }

    fn config_motor(&mut self) {
        (**self).config_motor()
    }

    fn set_disable(&mut self, disable: bool) {
        (**self).set_disable(disable)
    }

    fn set_homing_mode(&mut self, is_homing: bool) -> bool {
        (**self).set_homing_mode(is_homing)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Placeholder driver for motor slots that are declared but not wired.
///
/// Never takes part in homing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullMotor;

impl MotorDriver for NullMotor {
    fn set_disable(&mut self, _disable: bool) {}

    fn set_homing_mode(&mut self, _is_homing: bool) -> bool {
        false
    }

    fn name(&self) -> &str {
        "null_motor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        disables: u32,
    }

    impl MotorDriver for Counting {
        fn set_disable(&mut self, disable: bool) {
            if disable {
                self.disables += 1;
            }
        }

        fn set_homing_mode(&mut self, is_homing: bool) -> bool {
            is_homing
        }
    }

    #[test]
    fn test_null_motor_never_homes() {
        let mut motor = NullMotor;
        assert!(!motor.set_homing_mode(true));
        assert_eq!(motor.name(), "null_motor");
    }

    fn disable_and_home<M: MotorDriver>(mut motor: M) -> bool {
        motor.set_disable(true);
        motor.set_homing_mode(true)
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut inner = Counting { disables: 0 };
        assert!(disable_and_home(&mut inner));
        assert!(disable_and_home(&mut inner));
        assert_eq!(inner.disables, 2);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_boxed_dyn_driver() {
        let mut boxed: alloc::boxed::Box<dyn MotorDriver> = alloc::boxed::Box::new(NullMotor);
        boxed.set_disable(true);
        assert!(!boxed.set_homing_mode(true));
        assert_eq!(boxed.name(), "null_motor");
    }
}
