//! Error types for motor-shield library.
//!
//! Provides unified error handling across configuration, hardware access, and stepping.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all motor-shield operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing, validation, or selector error
    Config(ConfigError),
    /// Hardware (pin, PWM, latch) error
    Motor(MotorError),
    /// Speed or pacing error
    Motion(MotionError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Stepper port selector is not 1 (M1/M2) or 2 (M3/M4)
    UnknownPort(u8),
    /// DC motor header selector is not in 1..=4
    UnknownHeader(u8),
    /// Direction selector is not 1 (forward) or 2 (backward)
    UnknownDirection(u8),
    /// Step style selector is not in 1..=4
    UnknownStyle(u8),
    /// DC motor command selector is not 1, 2 or 4
    UnknownCommand(u8),
    /// Microstep curve resolution is not 8 or 16
    InvalidMicrosteps(u16),
    /// Steps per revolution must be > 0
    ZeroStepsPerRevolution,
    /// Configured speed must be > 0 rpm
    ZeroSpeed,
    /// DC motor speed percent must be 0-100
    InvalidSpeedPercent(u8),
    /// Builder is missing a required part
    MissingField(&'static str),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Latch lines are already claimed by another motor
    PortInUse(u8),
    /// Two configured motors share latch lines
    PortConflict {
        /// First motor claiming the lines
        first: heapless::String<32>,
        /// Second motor claiming the lines
        second: heapless::String<32>,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Hardware access errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// GPIO pin operation failed
    PinError,
    /// PWM duty cycle update failed
    PwmError,
    /// Latch register is already borrowed (re-entrant access)
    LatchBusy,
}

/// Speed and pacing errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Speed cannot be derived because the divisor is zero
    InvalidSpeed {
        /// Configured steps per revolution
        steps_per_revolution: u32,
        /// Requested revolutions per minute
        rpm: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::UnknownPort(v) => write!(f, "Unknown stepper port {}. Valid values: 1, 2", v),
            ConfigError::UnknownHeader(v) => write!(f, "Unknown motor header {}. Valid values: 1-4", v),
            ConfigError::UnknownDirection(v) => {
                write!(f, "Unknown direction {}. Valid values: 1 (forward), 2 (backward)", v)
            }
            ConfigError::UnknownStyle(v) => write!(f, "Unknown step style {}. Valid values: 1-4", v),
            ConfigError::UnknownCommand(v) => {
                write!(f, "Unknown DC motor command {}. Valid values: 1, 2, 4", v)
            }
            ConfigError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: 8, 16", v)
            }
            ConfigError::ZeroStepsPerRevolution => write!(f, "Steps per revolution must be > 0"),
            ConfigError::ZeroSpeed => write!(f, "Speed must be > 0 rpm"),
            ConfigError::InvalidSpeedPercent(v) => {
                write!(f, "Invalid speed percent: {}. Must be 0-100", v)
            }
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::PortInUse(mask) => {
                write!(f, "Latch lines {:#010b} are already claimed", mask)
            }
            ConfigError::PortConflict { first, second } => {
                write!(f, "Motors '{}' and '{}' share latch lines", first, second)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::PwmError => write!(f, "PWM duty cycle update failed"),
            MotorError::LatchBusy => write!(f, "Latch register is already in use"),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::InvalidSpeed {
                steps_per_revolution,
                rpm,
            } => write!(
                f,
                "Cannot derive step interval from {} steps/rev at {} rpm",
                steps_per_revolution, rpm
            ),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}
