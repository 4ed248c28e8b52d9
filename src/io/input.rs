use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::calendar::parse_day;
use crate::decimal::{ExactDecimal, Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::types::{AnnualInterestRate, Transaction};

// bank export layout
const TX_DATE: usize = 0;
const TX_KIND: usize = 2;
const TX_DESCRIPTION: usize = 3;
const TX_AMOUNT: usize = 6;
const TX_CURRENCY: usize = 8;

const RATE_DATE: usize = 0;
const RATE_PERCENTAGE: usize = 1;

/// turn `3 003,90` into `3003.90`
///
/// The first comma becomes the decimal point and every space is dropped as
/// a thousands separator. Anything else is left for the decimal parser to
/// reject.
pub fn normalize_amount(amount: &str) -> String {
    amount.replacen(',', ".", 1).replace(' ', "")
}

fn parse_decimal(field: &'static str, value: &str) -> Result<ExactDecimal> {
    let normalized = normalize_amount(value);

    if !normalized.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ScheduleError::malformed(field, value, "no digits"));
    }

    ExactDecimal::from_str(&normalized).map_err(|e| ScheduleError::malformed(field, value, e))
}

/// parse a monetary amount written with `,` decimals and space thousands
pub fn parse_amount(amount: &str) -> Result<Money> {
    parse_decimal("amount", amount).map(Money::from_exact)
}

fn column<'r>(record: &'r StringRecord, index: usize, field: &'static str) -> Result<&'r str> {
    record
        .get(index)
        .ok_or_else(|| ScheduleError::malformed(field, "", format!("missing column {}", index + 1)))
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn parse_transaction(record: &StringRecord) -> Result<Transaction> {
    let date = column(record, TX_DATE, "date")?;
    let date = parse_day(date).map_err(|e| ScheduleError::malformed("date", date, e))?;

    Ok(Transaction {
        date,
        kind: column(record, TX_KIND, "kind")?.to_string(),
        description: column(record, TX_DESCRIPTION, "description")?.to_string(),
        amount: parse_amount(column(record, TX_AMOUNT, "amount")?)?,
        currency: column(record, TX_CURRENCY, "currency")?.to_string(),
    })
}

fn parse_rate(record: &StringRecord) -> Result<AnnualInterestRate> {
    let date = column(record, RATE_DATE, "date")?;
    let effective_day = parse_day(date).map_err(|e| ScheduleError::malformed("date", date, e))?;
    let percentage = parse_decimal("rate", column(record, RATE_PERCENTAGE, "rate")?)?;

    Ok(AnnualInterestRate::new(effective_day, Rate::from_percentage(percentage)))
}

fn read_records<R, T, F>(reader: R, delimiter: u8, parse: F) -> Result<Vec<T>>
where
    R: Read,
    F: Fn(&StringRecord) -> Result<T>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let mut parsed = Vec::new();
    for record in reader.records() {
        let record = record?;
        parsed.push(parse(&record).map_err(|e| e.at_line(line_of(&record)))?);
    }

    Ok(parsed)
}

/// read transactions from a bank export, skipping its header row
pub fn read_transactions_from<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Transaction>> {
    read_records(reader, delimiter, parse_transaction)
}

pub fn read_transactions(path: impl AsRef<Path>, delimiter: u8) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let transactions = read_transactions_from(File::open(path)?, delimiter)?;
    debug!(path = %path.display(), count = transactions.len(), "read transactions");
    Ok(transactions)
}

/// read `date;percentage` rate changes, skipping the header row
///
/// Percentages are stored as fractions, so `1.14` becomes `0.0114`.
pub fn read_interest_rates_from<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<Vec<AnnualInterestRate>> {
    read_records(reader, delimiter, parse_rate)
}

pub fn read_interest_rates(
    path: impl AsRef<Path>,
    delimiter: u8,
) -> Result<Vec<AnnualInterestRate>> {
    let path = path.as_ref();
    let rates = read_interest_rates_from(File::open(path)?, delimiter)?;
    debug!(path = %path.display(), count = rates.len(), "read interest rates");
    Ok(rates)
}
