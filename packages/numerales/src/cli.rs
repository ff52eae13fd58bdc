//! Command-line interface for number spelling.

use clap::{Parser, Subcommand};
use console::style;

use crate::cardinal::Speller;
use crate::config::{parse_amount, parse_date, parse_timestamp, validate_amount};
use crate::dates::{spell_date, spell_timestamp};
use crate::digits::spell_digits;
use crate::error::{NumeralesError, Result};
use crate::types::{Gender, Orthography, Spelled, Unit};

/// Notaria Numerales - Spell numbers in Spanish for legal documents.
#[derive(Parser)]
#[command(name = "notaria-numerales")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Spell a whole number (0 to 999999).
    Cardinal {
        /// Number to spell (e.g., 2025 or 25,000)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Use RAE orthography instead of the legacy wording
        #[arg(short, long)]
        standard: bool,

        /// Agree with a feminine noun (only with --standard)
        #[arg(short, long)]
        feminine: bool,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Spell a number followed by a counted noun.
    Quantity {
        /// Number to spell
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Counted noun: years, quotas, shares, colones, hours or minutes
        #[arg(short, long)]
        unit: String,

        /// Use RAE orthography instead of the legacy wording
        #[arg(short, long)]
        standard: bool,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Spell an identification number digit by digit.
    Digits {
        /// Identification number (e.g., 1-0567-0089)
        id: String,
    },

    /// Spell a calendar date.
    Date {
        /// Date in YYYY-MM-DD format (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Use RAE orthography instead of the legacy wording
        #[arg(short, long)]
        standard: bool,
    },

    /// Spell a notarization timestamp.
    Timestamp {
        /// Timestamp in "YYYY-MM-DD HH:MM" format (default: now)
        #[arg(short, long)]
        at: Option<String>,

        /// Use RAE orthography instead of the legacy wording
        #[arg(short, long)]
        standard: bool,
    },

    /// Print a reference table of spelled numbers.
    Table {
        /// First value (inclusive)
        #[arg(long, default_value_t = 0)]
        from: u32,

        /// Last value (inclusive)
        #[arg(long, default_value_t = 30)]
        to: u32,

        /// Use RAE orthography instead of the legacy wording
        #[arg(short, long)]
        standard: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = execute(cli.command)?;
    println!("{output}");
    Ok(())
}

/// Execute a parsed command and return the text to print.
pub fn execute(command: Commands) -> Result<String> {
    match command {
        Commands::Cardinal {
            value,
            standard,
            feminine,
            json,
        } => {
            let gender = if feminine {
                Gender::Feminine
            } else {
                Gender::Masculine
            };
            let speller = speller_for(standard).with_gender(gender);
            let value = parse_amount(&value)?;
            render(value, speller.spell(value)?, &speller, json)
        }
        Commands::Quantity {
            value,
            unit,
            standard,
            json,
        } => {
            let speller = speller_for(standard);
            let unit = Unit::from_name(&unit)?;
            let value = parse_amount(&value)?;
            render(value, speller.spell_quantity(value, &unit)?, &speller, json)
        }
        Commands::Digits { id } => spell_digits(&id),
        Commands::Date { date, standard } => {
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => chrono::Local::now().date_naive(),
            };
            spell_date(&speller_for(standard), date)
        }
        Commands::Timestamp { at, standard } => {
            let at = match at {
                Some(text) => parse_timestamp(&text)?,
                None => chrono::Local::now().naive_local(),
            };
            spell_timestamp(&speller_for(standard), at)
        }
        Commands::Table { from, to, standard } => table(from, to, &speller_for(standard)),
    }
}

fn speller_for(standard: bool) -> Speller {
    let orthography = if standard {
        Orthography::Standard
    } else {
        Orthography::Legacy
    };
    Speller::new().with_orthography(orthography)
}

/// Format a spelled value as plain text or JSON.
fn render(value: u32, words: String, speller: &Speller, json: bool) -> Result<String> {
    if !json {
        return Ok(words);
    }
    let spelled = Spelled {
        value,
        words,
        orthography: speller.orthography(),
    };
    Ok(serde_json::to_string(&spelled)?)
}

/// Build a two-column table of values and their spelling.
fn table(from: u32, to: u32, speller: &Speller) -> Result<String> {
    validate_amount(u64::from(to))?;
    if from > to {
        return Err(NumeralesError::InvalidNumber(format!("{from}..{to}")));
    }

    let width = to.to_string().len();
    let rows = (from..=to)
        .map(|n| {
            let words = speller.spell(n)?;
            Ok(format!(
                "{}  {}",
                style(format!("{n:>width$}")).cyan(),
                words
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_cardinal() {
        let cli = Cli::parse_from(["notaria-numerales", "cardinal", "2025"]);

        let Commands::Cardinal {
            value,
            standard,
            feminine,
            json,
        } = cli.command
        else {
            unreachable!("expected cardinal command");
        };
        assert_eq!(value, "2025");
        assert!(!standard);
        assert!(!feminine);
        assert!(!json);
    }

    #[test]
    fn test_cli_parse_cardinal_negative_value() {
        let cli = Cli::parse_from(["notaria-numerales", "cardinal", "-5"]);

        let Commands::Cardinal { value, .. } = cli.command else {
            unreachable!("expected cardinal command");
        };
        assert_eq!(value, "-5");
    }

    #[test]
    fn test_cli_parse_quantity() {
        let cli = Cli::parse_from([
            "notaria-numerales",
            "quantity",
            "100",
            "--unit",
            "quotas",
            "--standard",
        ]);

        let Commands::Quantity {
            value,
            unit,
            standard,
            ..
        } = cli.command
        else {
            unreachable!("expected quantity command");
        };
        assert_eq!(value, "100");
        assert_eq!(unit, "quotas");
        assert!(standard);
    }

    #[test]
    fn test_execute_cardinal() {
        let out = execute(Commands::Cardinal {
            value: "21000".to_string(),
            standard: true,
            feminine: false,
            json: false,
        })
        .unwrap();
        assert_eq!(out, "veintiún mil");
    }

    #[test]
    fn test_execute_cardinal_json() {
        let out = execute(Commands::Cardinal {
            value: "22".to_string(),
            standard: false,
            feminine: false,
            json: true,
        })
        .unwrap();
        assert_eq!(
            out,
            r#"{"value":22,"words":"veintidos","orthography":"legacy"}"#
        );
    }

    #[test]
    fn test_execute_quantity_unknown_unit() {
        let err = execute(Commands::Quantity {
            value: "3".to_string(),
            unit: "parsecs".to_string(),
            standard: false,
            json: false,
        })
        .unwrap_err();
        assert!(matches!(err, NumeralesError::UnknownUnit(_)));
    }

    #[test]
    fn test_execute_timestamp() {
        let out = execute(Commands::Timestamp {
            at: Some("2025-03-15 14:00".to_string()),
            standard: false,
        })
        .unwrap();
        assert_eq!(
            out,
            "a las catorce horas del quince de marzo de dos mil veinticinco"
        );
    }

    #[test]
    fn test_table_rows() {
        console::set_colors_enabled(false);
        let out = table(8, 10, &Speller::new()).unwrap();
        assert_eq!(out, " 8  ocho\n 9  nueve\n10  diez");
    }

    #[test]
    fn test_table_rejects_reversed_range() {
        assert!(table(10, 5, &Speller::new()).is_err());
        assert!(table(0, 1_000_000, &Speller::new()).is_err());
    }
}
