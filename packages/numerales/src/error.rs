//! Error types for number spelling.
//!
//! Every function in this crate returns [`Result`], so callers building
//! documents can surface a single error type for any malformed field.

use thiserror::Error;

/// Main error type for the numerales library.
#[derive(Debug, Error)]
pub enum NumeralesError {
    /// Value above the largest number the word tables can spell.
    #[error("Value {value} is out of range. Supported values are 0 to {max}")]
    OutOfRange { value: u64, max: u32 },

    /// Negative numbers have no cardinal spelling in legal amounts.
    #[error("Negative value '{0}' cannot be spelled. Expected a non-negative integer")]
    Negative(String),

    /// Text that is not a whole number.
    #[error("Invalid number: '{0}'. Expected digits, optionally grouped (e.g., 25000 or 25 000)")]
    InvalidNumber(String),

    /// Character in an identification number that is not a digit or separator.
    #[error("Invalid character '{character}' in identification number '{input}'")]
    InvalidDigit { character: char, input: String },

    /// Identification number without any digits.
    #[error("Identification number contains no digits")]
    EmptyInput,

    /// Hour outside 0-23.
    #[error("Invalid hour: {0}. Expected 0 to 23")]
    InvalidHour(u32),

    /// Minute outside 0-59.
    #[error("Invalid minute: {0}. Expected 0 to 59")]
    InvalidMinute(u32),

    /// Invalid date or timestamp text.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD or YYYY-MM-DD HH:MM")]
    InvalidDate(String),

    /// Unit name not known to [`crate::types::Unit::from_name`].
    #[error("Unknown unit: '{0}'. Expected one of: years, quotas, shares, colones, hours, minutes")]
    UnknownUnit(String),

    /// Orthography name not known to [`crate::types::Orthography`].
    #[error("Unknown orthography: '{0}'. Expected 'legacy' or 'standard'")]
    UnknownOrthography(String),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for numerales operations.
pub type Result<T> = std::result::Result<T, NumeralesError>;
