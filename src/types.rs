use chrono::NaiveDate;
use std::fmt;

use crate::calendar::DATE_FORMAT;
use crate::decimal::{Money, Rate};

/// a dated cash movement against the loan
///
/// A positive amount is a deposit and reduces the balance owed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub kind: String,
    pub description: String,
    pub amount: Money,
    pub currency: String,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self {
            date,
            kind: String::new(),
            description: String::new(),
            amount,
            currency: String::new(),
        }
    }
}

/// an annual rate effective from `effective_day` until superseded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualInterestRate {
    pub effective_day: NaiveDate,
    pub rate: Rate,
}

impl AnnualInterestRate {
    pub fn new(effective_day: NaiveDate, rate: Rate) -> Self {
        Self { effective_day, rate }
    }
}

impl fmt::Display for AnnualInterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.effective_day.format(DATE_FORMAT), self.rate)
    }
}
