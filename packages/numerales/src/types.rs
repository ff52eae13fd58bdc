//! Core value types for number spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NumeralesError;

/// Spelling rules applied by a [`crate::cardinal::Speller`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orthography {
    /// Output identical to the documents generated so far.
    ///
    /// No accents after `veinti`, no apocope before `mil`, and a hundreds
    /// remainder of exactly 100 is written `ciento`.
    #[default]
    Legacy,

    /// Orthography following RAE rules: `veintidós`, `veintiún mil`,
    /// `mil cien`, and gender agreement with the counted noun.
    Standard,
}

impl Orthography {
    /// Get the lowercase name used in CLI arguments and JSON.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for Orthography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orthography {
    type Err = NumeralesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "standard" | "rae" => Ok(Self::Standard),
            _ => Err(NumeralesError::UnknownOrthography(s.to_string())),
        }
    }
}

/// Grammatical gender of the counted noun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

/// A countable noun that follows a spelled quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    /// Form used when the quantity is exactly one.
    pub singular: &'static str,

    /// Form used for every other quantity, zero included.
    pub plural: &'static str,

    /// Gender the number agrees with.
    pub gender: Gender,
}

impl Unit {
    /// Company term and other durations.
    pub const YEARS: Unit = Unit::new("año", "años", Gender::Masculine);

    /// Quota-shares of a limited-liability company.
    pub const QUOTAS: Unit = Unit::new("cuota", "cuotas", Gender::Feminine);

    /// Shares of a corporation.
    pub const SHARES: Unit = Unit::new("acción", "acciones", Gender::Feminine);

    /// Costa Rican currency.
    pub const COLONES: Unit = Unit::new("colón", "colones", Gender::Masculine);

    /// Hours in notarization timestamps.
    pub const HOURS: Unit = Unit::new("hora", "horas", Gender::Feminine);

    /// Minutes in notarization timestamps.
    pub const MINUTES: Unit = Unit::new("minuto", "minutos", Gender::Masculine);

    /// Create a unit from its singular and plural forms.
    #[must_use]
    pub const fn new(singular: &'static str, plural: &'static str, gender: Gender) -> Self {
        Self {
            singular,
            plural,
            gender,
        }
    }

    /// Noun form for a given quantity.
    #[must_use]
    pub fn noun_for(&self, quantity: u32) -> &'static str {
        if quantity == 1 {
            self.singular
        } else {
            self.plural
        }
    }

    /// Look up a unit by its English or Spanish name.
    ///
    /// # Examples
    /// ```
    /// use notaria_numerales::types::Unit;
    ///
    /// assert_eq!(Unit::from_name("quotas").unwrap(), Unit::QUOTAS);
    /// assert_eq!(Unit::from_name("años").unwrap(), Unit::YEARS);
    /// assert!(Unit::from_name("parsecs").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, NumeralesError> {
        match name.trim().to_lowercase().as_str() {
            "years" | "year" | "años" | "anos" => Ok(Self::YEARS),
            "quotas" | "quota" | "cuotas" => Ok(Self::QUOTAS),
            "shares" | "share" | "acciones" => Ok(Self::SHARES),
            "colones" | "colon" | "crc" => Ok(Self::COLONES),
            "hours" | "hour" | "horas" => Ok(Self::HOURS),
            "minutes" | "minute" | "minutos" => Ok(Self::MINUTES),
            _ => Err(NumeralesError::UnknownUnit(name.to_string())),
        }
    }
}

/// A spelled value, as emitted by the CLI's JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spelled {
    /// The numeric value.
    pub value: u32,

    /// The value in words.
    pub words: String,

    /// Rules used to produce `words`.
    pub orthography: Orthography,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthography_from_str() {
        assert_eq!("legacy".parse::<Orthography>().unwrap(), Orthography::Legacy);
        assert_eq!(
            "Standard".parse::<Orthography>().unwrap(),
            Orthography::Standard
        );
        assert_eq!("rae".parse::<Orthography>().unwrap(), Orthography::Standard);
        assert!("klingon".parse::<Orthography>().is_err());
    }

    #[test]
    fn test_orthography_default_is_legacy() {
        assert_eq!(Orthography::default(), Orthography::Legacy);
    }

    #[test]
    fn test_noun_for() {
        assert_eq!(Unit::YEARS.noun_for(1), "año");
        assert_eq!(Unit::YEARS.noun_for(0), "años");
        assert_eq!(Unit::QUOTAS.noun_for(100), "cuotas");
    }

    #[test]
    fn test_unit_from_name_unknown() {
        let err = Unit::from_name("furlongs").unwrap_err();
        assert!(err.to_string().contains("furlongs"));
    }

    #[test]
    fn test_spelled_serializes_orthography_lowercase() {
        let spelled = Spelled {
            value: 21,
            words: "veintiuno".to_string(),
            orthography: Orthography::Legacy,
        };
        let json = serde_json::to_string(&spelled).unwrap();
        assert_eq!(
            json,
            r#"{"value":21,"words":"veintiuno","orthography":"legacy"}"#
        );
    }
}
