//! Configuration constants and input validation for number spelling.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{NumeralesError, Result};

/// Largest value the word tables can spell.
///
/// There is no table entry for "millón", so anything from one million
/// upwards is rejected instead of producing a truncated phrase.
pub const MAX_SUPPORTED: u32 = 999_999;

/// Last hour of the day in 24-hour notation.
pub const MAX_HOUR: u32 = 23;

/// Last minute of an hour.
pub const MAX_MINUTE: u32 = 59;

/// Date format accepted on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format accepted on the command line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Whole number, optionally grouped in thousands by `,`, `.` or a space.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+|\d{1,3}(?:[,. ]\d{3})+)$").expect("valid regex"));

/// A minus sign followed by anything that looks numeric.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NEGATIVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*\d[\d,. ]*$").expect("valid regex"));

/// Validate that a value lies in the supported domain.
///
/// # Arguments
/// * `value` - The value to validate
///
/// # Returns
/// * `Ok(u32)` with the value if `value <= MAX_SUPPORTED`
/// * `Err(NumeralesError::OutOfRange)` otherwise
///
/// # Examples
/// ```
/// use notaria_numerales::config::validate_amount;
///
/// assert_eq!(validate_amount(2025).unwrap(), 2025);
/// assert!(validate_amount(1_000_000).is_err());
/// ```
pub fn validate_amount(value: u64) -> Result<u32> {
    match u32::try_from(value) {
        Ok(v) if v <= MAX_SUPPORTED => Ok(v),
        _ => Err(NumeralesError::OutOfRange {
            value,
            max: MAX_SUPPORTED,
        }),
    }
}

/// Parse a whole number as typed into a document form.
///
/// Accepts plain digits (`25000`) and thousands groups separated by a
/// comma, dot or space (`25,000`, `25.000`, `25 000`). Surrounding
/// whitespace is ignored.
///
/// # Returns
/// * `Ok(u32)` for a value in `0..=MAX_SUPPORTED`
/// * `Err(NumeralesError::Negative)` for a negative number
/// * `Err(NumeralesError::OutOfRange)` for a value above `MAX_SUPPORTED`
/// * `Err(NumeralesError::InvalidNumber)` for anything else
///
/// # Examples
/// ```
/// use notaria_numerales::config::parse_amount;
///
/// assert_eq!(parse_amount("25 000").unwrap(), 25_000);
/// assert_eq!(parse_amount("1.500").unwrap(), 1_500);
/// assert!(parse_amount("-3").is_err());
/// assert!(parse_amount("12.5").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<u32> {
    let trimmed = input.trim();

    if NEGATIVE_PATTERN.is_match(trimmed) {
        return Err(NumeralesError::Negative(trimmed.to_string()));
    }
    if !AMOUNT_PATTERN.is_match(trimmed) {
        return Err(NumeralesError::InvalidNumber(input.to_string()));
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    // Too many digits for u64 is still just "too large"
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    tracing::debug!(input, value, "Parsed amount");

    validate_amount(value)
}

/// Validate an hour of the day (0-23).
pub fn validate_hour(hour: u32) -> Result<()> {
    if hour <= MAX_HOUR {
        Ok(())
    } else {
        Err(NumeralesError::InvalidHour(hour))
    }
}

/// Validate a minute of the hour (0-59).
pub fn validate_minute(minute: u32) -> Result<()> {
    if minute <= MAX_MINUTE {
        Ok(())
    } else {
        Err(NumeralesError::InvalidMinute(minute))
    }
}

/// Parse a date in YYYY-MM-DD format.
///
/// # Examples
/// ```
/// use notaria_numerales::config::parse_date;
///
/// assert!(parse_date("2025-03-15").is_ok());
/// assert!(parse_date("2025-02-30").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| NumeralesError::InvalidDate(input.to_string()))
}

/// Parse a timestamp in `YYYY-MM-DD HH:MM` format.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| NumeralesError::InvalidDate(input.to_string()))
}
