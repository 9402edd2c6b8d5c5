//! Placeholder for unwired shared stepper lines.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

/// Output pin that is not connected to anything.
///
/// Used as the pin type of a registry without shared disable or reset lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
