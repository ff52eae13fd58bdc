//! End-to-end tests for the public spelling API.
//!
//! Covers the values that appear in generated company deeds: terms in
//! years, quota-share counts, capital amounts and signing timestamps.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use notaria_numerales::dates::{spell_date, spell_timestamp};
use notaria_numerales::{
    parse_amount, spell_digits, spell_integer, NumeralesError, Orthography, Speller, Unit,
    MAX_SUPPORTED,
};

#[test]
fn test_reference_values() {
    let cases = [
        (0, "cero"),
        (100, "cien"),
        (15, "quince"),
        (21, "veintiuno"),
        (30, "treinta"),
        (45, "cuarenta y cinco"),
        (120, "ciento veinte"),
        (1000, "mil"),
        (2025, "dos mil veinticinco"),
    ];

    for (n, expected) in cases {
        assert_eq!(spell_integer(n).unwrap(), expected, "spelling {n}");
    }
}

#[test]
fn test_spelling_is_repeatable() {
    for n in [0, 7, 21, 100, 1100, 2025, 999_999] {
        assert_eq!(spell_integer(n).unwrap(), spell_integer(n).unwrap());
    }
}

#[test]
fn test_no_stray_whitespace_below_one_thousand() {
    for n in 0..=999 {
        let words = spell_integer(n).unwrap();
        assert!(!words.starts_with(' ') && !words.ends_with(' '), "{n}: '{words}'");
        assert!(!words.contains("  "), "{n}: '{words}'");
        assert!(!words.is_empty(), "{n}");
    }
}

#[test]
fn test_domain_boundary() {
    assert!(spell_integer(MAX_SUPPORTED).is_ok());
    assert!(matches!(
        spell_integer(MAX_SUPPORTED + 1),
        Err(NumeralesError::OutOfRange { .. })
    ));
}

#[test]
fn test_text_input_to_words() {
    let value = parse_amount("10 000").unwrap();
    assert_eq!(spell_integer(value).unwrap(), "diez mil");

    assert!(matches!(
        parse_amount("-1"),
        Err(NumeralesError::Negative(_))
    ));
}

#[test]
fn test_company_deed_clauses() {
    let speller = Speller::new().with_orthography(Orthography::Standard);

    assert_eq!(
        speller.spell_quantity(99, &Unit::YEARS).unwrap(),
        "noventa y nueve años"
    );
    assert_eq!(
        speller.spell_quantity(100, &Unit::QUOTAS).unwrap(),
        "cien cuotas"
    );
    assert_eq!(
        speller.spell_quantity(221_000, &Unit::COLONES).unwrap(),
        "doscientos veintiún mil colones"
    );
    assert_eq!(
        speller.spell_quantity(221_000, &Unit::SHARES).unwrap(),
        "doscientas veintiuna mil acciones"
    );
}

#[test]
fn test_orthographies_differ_only_where_expected() {
    let legacy = Speller::new();
    let standard = Speller::new().with_orthography(Orthography::Standard);

    let mut differing = Vec::new();
    for n in 0..=999 {
        if legacy.spell(n).unwrap() != standard.spell(n).unwrap() {
            differing.push(n);
        }
    }

    // Only the accented veinti- forms, alone or after a hundred
    assert!(differing.iter().all(|n| matches!(n % 100, 22 | 23 | 26)));
    assert_eq!(differing.len(), 30);
}

#[test]
fn test_notarization_header() {
    let speller = Speller::new().with_orthography(Orthography::Standard);
    let signed = NaiveDate::from_ymd_opt(2023, 11, 21)
        .and_then(|d| d.and_hms_opt(21, 15, 0))
        .unwrap();

    assert_eq!(
        spell_timestamp(&speller, signed).unwrap(),
        "a las veintiuna horas quince minutos del veintiuno de noviembre de dos mil veintitrés"
    );
    assert_eq!(
        spell_date(&speller, signed.date()).unwrap(),
        "veintiuno de noviembre de dos mil veintitrés"
    );
}

#[test]
fn test_identification_number() {
    assert_eq!(
        spell_digits("3-101-123456").unwrap(),
        "tres uno cero uno uno dos tres cuatro cinco seis"
    );
}
