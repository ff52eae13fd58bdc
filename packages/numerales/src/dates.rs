//! Date and time phrases for notarization text.
//!
//! Deeds state when they were signed in words, for example
//! `"a las catorce horas treinta minutos del quince de marzo de dos mil
//! veinticinco"`.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::cardinal::Speller;
use crate::config::{validate_hour, validate_minute};
use crate::error::{NumeralesError, Result};
use crate::types::Unit;
use crate::words::{FIRST_DAY, MONTHS};

/// Spell the day of the month. The first day is written `"primero"`.
///
/// # Examples
/// ```
/// use notaria_numerales::{dates::spell_day, Speller};
///
/// assert_eq!(spell_day(&Speller::new(), 1).unwrap(), "primero");
/// assert_eq!(spell_day(&Speller::new(), 15).unwrap(), "quince");
/// ```
pub fn spell_day(speller: &Speller, day: u32) -> Result<String> {
    if day == 1 {
        return Ok(FIRST_DAY.to_string());
    }
    speller.spell(day)
}

/// Spelled month name for a 1-based month number.
fn month_name(month: u32) -> &'static str {
    // chrono guarantees 1..=12
    MONTHS[(month as usize).saturating_sub(1) % MONTHS.len()]
}

/// Spell a calendar date: `"<day> de <month> de <year>"`.
///
/// # Errors
/// Returns `NumeralesError::Negative` for years before year zero.
pub fn spell_date(speller: &Speller, date: NaiveDate) -> Result<String> {
    let year = u32::try_from(date.year())
        .map_err(|_| NumeralesError::Negative(date.year().to_string()))?;

    Ok(format!(
        "{} de {} de {}",
        spell_day(speller, date.day())?,
        month_name(date.month()),
        speller.spell(year)?
    ))
}

/// Spell an hour of the day followed by `hora`/`horas`.
///
/// # Errors
/// Returns `NumeralesError::InvalidHour` for hours above 23.
///
/// # Examples
/// ```
/// use notaria_numerales::{dates::spell_hour, Orthography, Speller};
///
/// let speller = Speller::new().with_orthography(Orthography::Standard);
/// assert_eq!(spell_hour(&speller, 14).unwrap(), "catorce horas");
/// assert_eq!(spell_hour(&speller, 1).unwrap(), "una hora");
/// assert!(spell_hour(&speller, 24).is_err());
/// ```
pub fn spell_hour(speller: &Speller, hour: u32) -> Result<String> {
    validate_hour(hour)?;
    speller.spell_quantity(hour, &Unit::HOURS)
}

/// Spell a minute of the hour followed by `minuto`/`minutos`.
///
/// # Errors
/// Returns `NumeralesError::InvalidMinute` for minutes above 59.
pub fn spell_minute(speller: &Speller, minute: u32) -> Result<String> {
    validate_minute(minute)?;
    speller.spell_quantity(minute, &Unit::MINUTES)
}

/// Spell a full notarization timestamp.
///
/// Minutes are left out on the hour. Seconds are ignored.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use notaria_numerales::{dates::spell_timestamp, Speller};
///
/// let at = NaiveDate::from_ymd_opt(2025, 3, 15)
///     .and_then(|d| d.and_hms_opt(14, 30, 0))
///     .unwrap();
/// assert_eq!(
///     spell_timestamp(&Speller::new(), at).unwrap(),
///     "a las catorce horas treinta minutos del quince de marzo de dos mil veinticinco"
/// );
/// ```
pub fn spell_timestamp(speller: &Speller, at: NaiveDateTime) -> Result<String> {
    let hour = at.hour();
    let article = if hour == 1 { "a la" } else { "a las" };

    let mut phrase = format!("{article} {}", spell_hour(speller, hour)?);
    if at.minute() != 0 {
        phrase.push(' ');
        phrase.push_str(&spell_minute(speller, at.minute())?);
    }
    phrase.push_str(" del ");
    phrase.push_str(&spell_date(speller, at.date())?);

    Ok(phrase)
}
