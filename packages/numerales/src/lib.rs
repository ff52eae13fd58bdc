//! Notaria Numerales - Spanish number spelling for legal documents.
//!
//! This crate renders numeric fields of corporate and notarial documents
//! as Spanish words: company terms, capital and quota-share counts,
//! signing timestamps, and identification numbers.
//!
//! # Example
//!
//! ```
//! use notaria_numerales::{spell_digits, spell_integer};
//!
//! assert_eq!(spell_integer(99).unwrap(), "noventa y nueve");
//! assert_eq!(spell_digits("1-0567").unwrap(), "uno cero cinco seis siete");
//! ```
//!
//! # Architecture
//!
//! - [`words`]: Word tables
//! - [`cardinal`]: Cardinal number spelling and the configurable [`Speller`]
//! - [`digits`]: Digit-by-digit spelling of identification numbers
//! - [`dates`]: Date and timestamp phrases
//! - [`types`]: Orthography, gender and unit types
//! - [`config`]: Constants and input validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cardinal;
pub mod cli;
pub mod config;
pub mod dates;
pub mod digits;
pub mod error;
pub mod types;
pub mod words;

// Re-export main functions
pub use cardinal::{spell_integer, Speller};
pub use digits::spell_digits;

// Re-export commonly used items
pub use config::{parse_amount, MAX_SUPPORTED};
pub use error::{NumeralesError, Result};
pub use types::{Gender, Orthography, Spelled, Unit};
