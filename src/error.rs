//! Error types for stepper-axes.
//!
//! Provides unified error handling across configuration, the axis registry and
//! the step timer.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-axes operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Axis registry operation error
    Axis(AxisError),
    /// Step timer misuse
    Timer(TimerError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Homing runs out of range (must be 1-5)
    InvalidHomingRuns(u32),
    /// Invalid steps per millimeter (must be > 0)
    InvalidStepsPerMm {
        /// Axis letter
        axis: char,
        /// Configured value
        value: f32,
    },
    /// Invalid max rate (must be > 0)
    InvalidMaxRate {
        /// Axis letter
        axis: char,
        /// Configured value
        value: f32,
    },
    /// Invalid acceleration (must be > 0)
    InvalidAcceleration {
        /// Axis letter
        axis: char,
        /// Configured value
        value: f32,
    },
    /// Invalid max travel (must be >= 0)
    InvalidMaxTravel {
        /// Axis letter
        axis: char,
        /// Configured value
        value: f32,
    },
    /// Invalid homing feed or seek rate (must be > 0)
    InvalidHomingRate {
        /// Axis letter
        axis: char,
        /// Configured value
        value: f32,
    },
    /// Invalid homing rate scaler (must be > 1.0)
    InvalidHomingScaler {
        /// Axis letter
        axis: char,
        /// Configured value
        value: f32,
    },
    /// Invalid motor pulloff distance (must be >= 0)
    InvalidPulloff {
        /// Axis letter
        axis: char,
        /// Motor slot
        motor: usize,
        /// Configured value
        value: f32,
    },
    /// Invalid step pulse width (must be > 0)
    InvalidPulseWidth(u32),
    /// Invalid step timer base frequency (must be > 0)
    InvalidTimerFrequency(u32),
    /// The driver factory could not provide a driver for a configured motor
    DriverUnavailable {
        /// Axis letter
        axis: char,
        /// Motor slot
        motor: usize,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Axis registry errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisError {
    /// Shared disable or reset pin operation failed
    PinError,
    /// Axis index beyond the platform maximum
    AxisOutOfRange(usize),
    /// Motor slot beyond the per-axis maximum
    MotorOutOfRange(usize),
}

/// Step timer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// Timer used before `init`
    NotInitialized,
    /// Zero ticks per callback requested
    ZeroTicks,
    /// Zero base frequency requested
    ZeroFrequency,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Axis(e) => write!(f, "Axis error: {}", e),
            Error::Timer(e) => write!(f, "Step timer error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidHomingRuns(v) => write!(f, "Invalid homing runs: {}. Must be 1-5", v),
            ConfigError::InvalidStepsPerMm { axis, value } => {
                write!(f, "Axis {}: invalid steps per mm {}. Must be > 0", axis, value)
            }
            ConfigError::InvalidMaxRate { axis, value } => {
                write!(f, "Axis {}: invalid max rate {}. Must be > 0", axis, value)
            }
            ConfigError::InvalidAcceleration { axis, value } => {
                write!(f, "Axis {}: invalid acceleration {}. Must be > 0", axis, value)
            }
            ConfigError::InvalidMaxTravel { axis, value } => {
                write!(f, "Axis {}: invalid max travel {}. Must be >= 0", axis, value)
            }
            ConfigError::InvalidHomingRate { axis, value } => {
                write!(f, "Axis {}: invalid homing rate {}. Must be > 0", axis, value)
            }
            ConfigError::InvalidHomingScaler { axis, value } => {
                write!(f, "Axis {}: invalid homing scaler {}. Must be > 1.0", axis, value)
            }
            ConfigError::InvalidPulloff { axis, motor, value } => {
                write!(f, "Axis {} motor {}: invalid pulloff {}. Must be >= 0", axis, motor, value)
            }
            ConfigError::InvalidPulseWidth(v) => write!(f, "Invalid step pulse width: {}us. Must be > 0", v),
            ConfigError::InvalidTimerFrequency(v) => {
                write!(f, "Invalid step timer frequency: {}Hz. Must be > 0", v)
            }
            ConfigError::DriverUnavailable { axis, motor } => {
                write!(f, "No driver available for axis {} motor {}", axis, motor)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::PinError => write!(f, "Shared stepper pin operation failed"),
            AxisError::AxisOutOfRange(axis) => write!(f, "Axis index {} out of range", axis),
            AxisError::MotorOutOfRange(slot) => write!(f, "Motor slot {} out of range", slot),
        }
    }
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::NotInitialized => write!(f, "Step timer not initialized"),
            TimerError::ZeroTicks => write!(f, "Step timer ticks must be > 0"),
            TimerError::ZeroFrequency => write!(f, "Step timer frequency must be > 0"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<AxisError> for Error {
    fn from(e: AxisError) -> Self {
        Error::Axis(e)
    }
}

impl From<TimerError> for Error {
    fn from(e: TimerError) -> Self {
        Error::Timer(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for AxisError {}

#[cfg(feature = "std")]
impl std::error::Error for TimerError {}
