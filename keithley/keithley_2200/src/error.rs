//! Error types of the driver.

use instrument_channel::CommunicationError;
use thiserror::Error;

/// An argument was rejected before anything was sent to the instrument.
///
/// These errors are always recoverable: call again with a corrected argument.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The capability takes a different number of arguments.
    #[error("{header} takes {expected} argument(s), but {got} were given")]
    ArgumentCount {
        /// SCPI header of the capability.
        header: &'static str,
        /// Number of arguments the capability takes.
        expected: usize,
        /// Number of arguments that were given.
        got: usize,
    },
    /// A given float value is out of the specified range.
    #[error("Float value {value} is out of range. Allowed range is [{min}, {max}]")]
    FloatValueOutOfRange {
        /// The value that is out of range, in base units.
        value: f64,
        /// The minimum value that is allowed.
        min: f64,
        /// The maximum value that is allowed.
        max: f64,
    },
    /// A given integer value is not in the allowed set.
    #[error("Integer value {value} is out of range. Allowed values are {allowed}")]
    IntValueOutOfRange {
        /// The value that is out of range.
        value: i64,
        /// Human readable description of the allowed values, e.g. `[1, 22] or 64`.
        allowed: String,
    },
    /// A toggle was given something other than `0`, `1`, `ON`, or `OFF`.
    #[error("Invalid state '{0}'. Please enter 0, 1, ON, or OFF.")]
    InvalidToggle(String),
    /// The value cannot be read as an integer.
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
    /// The value cannot be read as a finite number.
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// The capability can only be queried.
    #[error("{0} can only be queried")]
    NotWritable(&'static str),
    /// The capability cannot be queried.
    #[error("{0} cannot be queried")]
    NotQueryable(&'static str),
    /// Only the baud rates the instrument supports can be configured.
    #[error("Baud rate {0} is not supported. Use 4800, 9600, 19200, 38400, 57600, or 115200.")]
    UnsupportedBaudRate(u32),
    /// The instrument reported a model for which no ratings are known.
    #[error("No ratings are known for model '{0}'")]
    UnsupportedModel(String),
    /// A unit was given for a value that does not take one.
    #[error("Unit '{0}' given for a value without unit")]
    UnexpectedUnit(String),
    /// The token is not one the capability accepts.
    #[error("Invalid value '{value}'. Allowed values are {allowed}")]
    UnknownToken {
        /// The rejected token.
        value: String,
        /// Comma separated list of accepted tokens.
        allowed: String,
    },
    /// The unit is unknown or of the wrong kind, e.g. `mA` for a voltage.
    #[error("Unit '{unit}' cannot be converted to {base}")]
    UnknownUnit {
        /// The rejected unit.
        unit: String,
        /// The base unit the value must be given in.
        base: &'static str,
    },
}

/// The error enum for all operations of the driver.
///
/// Validation errors are raised before any I/O. Communication errors come unmodified from the
/// [`instrument_channel::InstrumentChannel`] and are neither retried nor interpreted.
#[derive(Debug, Error)]
pub enum Keithley2200Error {
    /// An argument was rejected. Nothing was written to the instrument.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The channel failed: timeout, disconnect, or a reply that cannot be decoded.
    #[error(transparent)]
    Communication(#[from] CommunicationError),
}
