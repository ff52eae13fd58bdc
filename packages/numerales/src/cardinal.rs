//! Spanish cardinal number spelling.
//!
//! [`spell_integer`] reproduces the wording of the documents generated so
//! far, including its orthographic quirks. [`Speller`] exposes the same
//! decomposition with a choice of [`Orthography`] and [`Gender`], and can
//! attach a counted noun (`"noventa y nueve años"`, `"cien cuotas"`).

use crate::config::validate_amount;
use crate::error::Result;
use crate::types::{Gender, Orthography, Unit};
use crate::words::{
    accented_twenty_unit, feminine_hundred, AND, HUNDREDS, ONE_HUNDRED, TEENS, TENS, THOUSAND,
    TWENTY_PREFIX, UNITS, ZERO,
};

/// Spell a non-negative integer in Spanish words.
///
/// Uses [`Orthography::Legacy`], so `22` is `"veintidos"` and `21000` is
/// `"veintiuno mil"`. Use a [`Speller`] with [`Orthography::Standard`] for
/// RAE-conformant output.
///
/// # Errors
/// Returns `NumeralesError::OutOfRange` for values above 999,999.
///
/// # Examples
/// ```
/// use notaria_numerales::spell_integer;
///
/// assert_eq!(spell_integer(0).unwrap(), "cero");
/// assert_eq!(spell_integer(45).unwrap(), "cuarenta y cinco");
/// assert_eq!(spell_integer(2025).unwrap(), "dos mil veinticinco");
/// ```
pub fn spell_integer(n: u32) -> Result<String> {
    Speller::default().spell(n)
}

/// Where the spelled number ends up in a phrase.
///
/// Only affects a trailing "one" under [`Orthography::Standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// The number stands alone (`veintiuno`).
    Standalone,
    /// The number precedes a noun or `mil` (`veintiún`, `veintiuna`).
    BeforeNoun,
}

/// Configurable Spanish number speller.
///
/// # Examples
/// ```
/// use notaria_numerales::{Gender, Orthography, Speller, Unit};
///
/// let speller = Speller::new().with_orthography(Orthography::Standard);
/// assert_eq!(speller.spell(22).unwrap(), "veintidós");
/// assert_eq!(speller.spell(21_000).unwrap(), "veintiún mil");
/// assert_eq!(
///     speller.spell_quantity(201, &Unit::QUOTAS).unwrap(),
///     "doscientas una cuotas"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Speller {
    orthography: Orthography,
    gender: Gender,
}

impl Speller {
    /// Create a speller with legacy orthography and masculine gender.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the orthography.
    #[must_use]
    pub fn with_orthography(mut self, orthography: Orthography) -> Self {
        self.orthography = orthography;
        self
    }

    /// Set the gender used by [`Speller::spell`].
    ///
    /// [`Speller::spell_quantity`] takes the gender from the unit instead.
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// The configured orthography.
    #[must_use]
    pub fn orthography(&self) -> Orthography {
        self.orthography
    }

    /// The configured gender.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Spell `n` as a standalone number.
    ///
    /// # Errors
    /// Returns `NumeralesError::OutOfRange` for values above 999,999.
    pub fn spell(&self, n: u32) -> Result<String> {
        let n = validate_amount(u64::from(n))?;
        Ok(self.compose(n, self.gender, Position::Standalone))
    }

    /// Spell `n` followed by the matching form of `unit`.
    ///
    /// The noun is singular only for exactly one. Under
    /// [`Orthography::Standard`] the number agrees with the unit's gender
    /// and a trailing "one" is shortened (`un año`, `veintiuna cuotas`).
    ///
    /// # Errors
    /// Returns `NumeralesError::OutOfRange` for values above 999,999.
    pub fn spell_quantity(&self, n: u32, unit: &Unit) -> Result<String> {
        let n = validate_amount(u64::from(n))?;
        let number = self.compose(n, unit.gender, Position::BeforeNoun);
        Ok(format!("{number} {}", unit.noun_for(n)))
    }

    fn compose(&self, n: u32, gender: Gender, position: Position) -> String {
        if n == 0 {
            return ZERO.to_string();
        }
        if n == 100 {
            return ONE_HUNDRED.to_string();
        }

        let standard = self.orthography == Orthography::Standard;
        let mut parts: Vec<String> = Vec::new();
        let mut rest = n;

        if rest >= 1000 {
            let thousands = rest / 1000;
            if thousands == 1 {
                parts.push(THOUSAND.to_string());
            } else {
                parts.push(self.compose(thousands, gender, Position::BeforeNoun));
                parts.push(THOUSAND.to_string());
            }
            rest %= 1000;
        }

        if standard && rest == 100 {
            tracing::debug!(n, "Using 'cien' for hundred remainder");
            parts.push(ONE_HUNDRED.to_string());
            rest = 0;
        }

        if rest >= 100 {
            let hundred = (rest / 100) as usize;
            if standard && gender == Gender::Feminine {
                parts.push(feminine_hundred(hundred));
            } else {
                parts.push(HUNDREDS[hundred].to_string());
            }
            rest %= 100;
        }

        if rest >= 20 {
            let ten = (rest / 10) as usize;
            let unit = (rest % 10) as usize;
            if unit == 0 {
                parts.push(TENS[ten].to_string());
            } else if ten == 2 {
                parts.push(format!(
                    "{TWENTY_PREFIX}{}",
                    self.twenty_unit_word(unit, gender, position)
                ));
            } else {
                parts.push(TENS[ten].to_string());
                parts.push(AND.to_string());
                parts.push(self.unit_word(unit, gender, position).to_string());
            }
        } else if rest >= 10 {
            parts.push(TEENS[(rest - 10) as usize].to_string());
        } else if rest >= 1 {
            parts.push(self.unit_word(rest as usize, gender, position).to_string());
        }

        parts.join(" ").trim().to_string()
    }

    /// Unit word for 1-9, outside the `veinti` compound.
    fn unit_word(&self, unit: usize, gender: Gender, position: Position) -> &'static str {
        if unit != 1 || self.orthography == Orthography::Legacy {
            return UNITS[unit];
        }
        match (gender, position) {
            (Gender::Feminine, _) => "una",
            (Gender::Masculine, Position::BeforeNoun) => "un",
            (Gender::Masculine, Position::Standalone) => UNITS[1],
        }
    }

    /// Unit suffix joined to `veinti`.
    fn twenty_unit_word(&self, unit: usize, gender: Gender, position: Position) -> &'static str {
        if self.orthography == Orthography::Legacy {
            return UNITS[unit];
        }
        if unit == 1 {
            return match (gender, position) {
                (Gender::Feminine, _) => "una",
                (Gender::Masculine, Position::BeforeNoun) => "ún",
                (Gender::Masculine, Position::Standalone) => UNITS[1],
            };
        }
        accented_twenty_unit(unit).unwrap_or(UNITS[unit])
    }
}
