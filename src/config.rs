use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::io::{read_interest_rates, read_transactions};
use crate::schedule::ScheduleRunner;

/// how the schedule is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// everything needed to produce a schedule from files on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub transactions_path: PathBuf,
    pub rates_path: PathBuf,
    pub first_day: NaiveDate,
    pub principal: Decimal,
    pub input_delimiter: char,
    pub output_delimiter: char,
    pub format: OutputFormat,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            transactions_path: PathBuf::from("transactions.csv"),
            rates_path: PathBuf::from("interest_rates.csv"),
            first_day: NaiveDate::from_ymd_opt(2022, 6, 27).unwrap_or_default(),
            principal: dec!(200000),
            input_delimiter: ';',
            output_delimiter: ';',
            format: OutputFormat::Csv,
        }
    }
}

impl ScheduleConfig {
    /// check delimiters are usable single-byte field separators
    pub fn validate(&self) -> Result<()> {
        delimiter_byte(self.input_delimiter)?;
        delimiter_byte(self.output_delimiter)?;
        Ok(())
    }

    pub fn input_delimiter_byte(&self) -> Result<u8> {
        delimiter_byte(self.input_delimiter)
    }

    pub fn output_delimiter_byte(&self) -> Result<u8> {
        delimiter_byte(self.output_delimiter)
    }

    /// read both input files and set up a runner for them
    pub fn load_runner(&self) -> Result<ScheduleRunner> {
        self.validate()?;
        let delimiter = self.input_delimiter_byte()?;

        let transactions = read_transactions(&self.transactions_path, delimiter)?;
        let rates = read_interest_rates(&self.rates_path, delimiter)?;

        info!(
            "calculating loan based on {} transaction(s) and {} interest rate entries",
            transactions.len(),
            rates.len()
        );

        Ok(ScheduleRunner::new(
            self.first_day,
            Money::from_decimal(self.principal),
            transactions,
            rates,
        ))
    }
}

/// a delimiter given as text must be exactly one character
pub fn parse_delimiter(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            delimiter_byte(c)?;
            Ok(c)
        }
        _ => Err(ScheduleError::InvalidConfiguration {
            message: format!("delimiter {:?} must be a single character", s),
        }),
    }
}

fn delimiter_byte(c: char) -> Result<u8> {
    if !c.is_ascii() || matches!(c, '"' | '\n' | '\r') {
        return Err(ScheduleError::InvalidConfiguration {
            message: format!("delimiter {:?} cannot separate csv fields", c),
        });
    }
    Ok(c as u8)
}
