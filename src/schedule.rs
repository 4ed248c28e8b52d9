use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bank::Bank;
use crate::calendar::DATE_FORMAT;
use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::loan::Loan;
use crate::types::{AnnualInterestRate, Transaction};

/// shown instead of a rate when none is in effect
pub const NO_RATE: &str = "-";

/// state of the loan at the end of one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub date: NaiveDate,
    pub rate: Option<Rate>,
    pub loan: Loan,
}

impl ScheduleRow {
    /// row rendered for output, amounts rounded to two places
    pub fn record(&self) -> ScheduleRecord {
        ScheduleRecord {
            date: self.date.format(DATE_FORMAT).to_string(),
            annual_interest_rate: self
                .rate
                .as_ref()
                .map(|r| r.as_percentage().to_fixed(2))
                .unwrap_or_else(|| NO_RATE.to_string()),
            balance: self.loan.balance().to_fixed(),
            accrued_interest: self.loan.interest().to_fixed(),
        }
    }
}

/// display form of a [`ScheduleRow`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub date: String,
    pub annual_interest_rate: String,
    pub balance: String,
    pub accrued_interest: String,
}

/// one row per calendar day, oldest first
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    rows: Vec<ScheduleRow>,
}

impl Schedule {
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&ScheduleRow> {
        self.rows.last()
    }

    pub fn row_on(&self, date: NaiveDate) -> Option<&ScheduleRow> {
        self.rows
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|i| &self.rows[i])
    }

    pub fn records(&self) -> impl Iterator<Item = ScheduleRecord> + '_ {
        self.rows.iter().map(ScheduleRow::record)
    }

    pub fn into_rows(self) -> Vec<ScheduleRow> {
        self.rows
    }
}

/// drives the bank from the first day of the loan through today
#[derive(Debug, Clone)]
pub struct ScheduleRunner {
    first_day: NaiveDate,
    principal: Money,
    bank: Bank,
}

impl ScheduleRunner {
    pub fn new(
        first_day: NaiveDate,
        principal: Money,
        transactions: Vec<Transaction>,
        rates: Vec<AnnualInterestRate>,
    ) -> Self {
        Self {
            first_day,
            principal,
            bank: Bank::new(transactions, rates),
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// run through today's utc date as seen by the time provider
    pub fn run(&self, time_provider: &SafeTimeProvider) -> Result<Schedule> {
        self.run_until(time_provider.now().date_naive())
    }

    /// run from the first day through `today`, both inclusive
    ///
    /// Yields `today - first_day + 1` rows, or none when the loan starts
    /// after `today`. Fails before producing anything if the rate history
    /// does not cover the first day.
    pub fn run_until(&self, today: NaiveDate) -> Result<Schedule> {
        if today >= self.first_day && self.bank.annual_interest_rate(self.first_day).is_none() {
            return Err(ScheduleError::MissingRateCoverage {
                day: self.first_day,
            });
        }

        info!(
            first_day = %self.first_day,
            %today,
            principal = %self.principal,
            transactions = self.bank.ledger().len(),
            rates = self.bank.rates().len(),
            "running loan schedule"
        );

        let mut loan = Loan::new(self.principal.clone());
        let mut rows = Vec::new();

        for day in self.first_day.iter_days().take_while(|d| *d <= today) {
            loan = self.bank.advance(day, &loan)?;
            rows.push(ScheduleRow {
                date: day,
                rate: self.bank.annual_interest_rate(day),
                loan: loan.clone(),
            });
        }

        if let Some(last) = rows.last() {
            debug!(
                days = rows.len(),
                balance = %last.loan.balance(),
                interest = %last.loan.interest(),
                "schedule complete"
            );
        }

        Ok(Schedule { rows })
    }
}
