//! Spanish word tables.
//!
//! The cardinal tables are indexed by digit value. Unused slots hold an
//! empty string so that `TENS[ten]` and `HUNDREDS[hundred]` index directly.

/// Units, indexed 0-9. Index 0 is never emitted.
pub const UNITS: [&str; 10] = [
    "", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

/// Teens, indexed by `n - 10` for `n` in 10-19.
pub const TEENS: [&str; 10] = [
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
];

/// Tens, indexed 0-9. Indices 0 and 1 are unused.
pub const TENS: [&str; 10] = [
    "", "", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
    "noventa",
];

/// Hundreds, indexed 0-9. Index 0 is unused.
pub const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

/// Prefix joined directly to the unit word for 21-29.
pub const TWENTY_PREFIX: &str = "veinti";

/// Word for exactly one hundred.
pub const ONE_HUNDRED: &str = "cien";

/// Word for one thousand and the thousands separator.
pub const THOUSAND: &str = "mil";

/// Word for zero.
pub const ZERO: &str = "cero";

/// Conjunction between tens and units from 31 upwards.
pub const AND: &str = "y";

/// Digit names used when reading identification numbers digit by digit.
pub const DIGITS: [&str; 10] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

/// Month names, indexed by `month - 1`.
pub const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Day 1 is written as an ordinal in dates.
pub const FIRST_DAY: &str = "primero";

/// Accented form of a unit word after `veinti`.
///
/// Returns `None` when the unit keeps its plain spelling.
#[must_use]
pub fn accented_twenty_unit(unit: usize) -> Option<&'static str> {
    match unit {
        2 => Some("dós"),
        3 => Some("trés"),
        6 => Some("séis"),
        _ => None,
    }
}

/// Feminine form of a hundreds word (`doscientos` -> `doscientas`).
///
/// `ciento` has no feminine form and is returned unchanged.
#[must_use]
pub fn feminine_hundred(hundred: usize) -> String {
    let word = HUNDREDS[hundred];
    match word.strip_suffix("os") {
        Some(stem) if hundred >= 2 => format!("{stem}as"),
        _ => word.to_string(),
    }
}
