//! Digit-by-digit reading of identification numbers.
//!
//! Deeds spell out cédula and registry numbers one digit at a time so that
//! leading zeros survive: `1-0567-0089` reads
//! `"uno cero cinco seis siete cero cero ocho nueve"`.

use crate::error::{NumeralesError, Result};
use crate::words::DIGITS;

/// Characters that group the digits of an identification number.
const SEPARATORS: [char; 3] = ['-', ' ', '.'];

/// Spell every decimal digit of `id`, joined by single spaces.
///
/// Separators (`-`, space, `.`) are skipped.
///
/// # Errors
/// * `NumeralesError::InvalidDigit` for any other non-digit character
/// * `NumeralesError::EmptyInput` if `id` contains no digits
///
/// # Examples
/// ```
/// use notaria_numerales::spell_digits;
///
/// assert_eq!(spell_digits("305").unwrap(), "tres cero cinco");
/// assert_eq!(spell_digits("1-02").unwrap(), "uno cero dos");
/// assert!(spell_digits("12a").is_err());
/// ```
pub fn spell_digits(id: &str) -> Result<String> {
    let mut names: Vec<&str> = Vec::with_capacity(id.len());

    for c in id.chars() {
        if let Some(d) = c.to_digit(10) {
            names.push(DIGITS[d as usize]);
        } else if !SEPARATORS.contains(&c) {
            return Err(NumeralesError::InvalidDigit {
                character: c,
                input: id.to_string(),
            });
        }
    }

    if names.is_empty() {
        return Err(NumeralesError::EmptyInput);
    }

    tracing::debug!(id, digits = names.len(), "Spelled identification number");
    Ok(names.join(" "))
}
