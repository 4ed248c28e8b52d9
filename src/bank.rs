use tracing::{debug, trace};

use crate::calendar::{days_in_month_of, is_first_of_month, CalendarDay};
use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::ledger::TransactionLedger;
use crate::loan::Loan;
use crate::rates::RateHistory;
use crate::types::{AnnualInterestRate, Transaction};

/// amortization engine
///
/// Holds the transaction ledger and the rate history, both read-only once
/// built, and moves a [`Loan`] forward one calendar day at a time.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    ledger: TransactionLedger,
    rates: RateHistory,
}

impl Bank {
    pub fn new(transactions: Vec<Transaction>, rates: Vec<AnnualInterestRate>) -> Self {
        Self {
            ledger: TransactionLedger::new(transactions),
            rates: RateHistory::new(rates),
        }
    }

    pub fn ledger(&self) -> &TransactionLedger {
        &self.ledger
    }

    pub fn rates(&self) -> &RateHistory {
        &self.rates
    }

    /// state of the loan at the end of `day`, given its state at the start
    ///
    /// On the first of a month accrued interest is capitalized before the
    /// day's transactions are applied. Interest for the day is the balance
    /// after transactions times `annual / 12 / days_in_month`.
    pub fn advance(&self, day: impl CalendarDay, loan: &Loan) -> Result<Loan> {
        let day = day.calendar_day();

        let start = if is_first_of_month(day) {
            debug!(%day, capitalized = %loan.interest(), "capitalizing accrued interest");
            loan.capitalized()
        } else {
            loan.clone()
        };

        let amount = self.ledger.amount_on(day);
        if !amount.is_zero() {
            debug!(%day, %amount, "applying transactions");
        }
        let balance = start.balance().clone() - amount;

        let rate = self
            .annual_interest_rate(day)
            .ok_or(ScheduleError::MissingRateCoverage { day })?;
        let days = days_in_month_of(day).ok_or_else(|| ScheduleError::InvalidDate {
            message: format!("no month length for {}", day),
        })?;

        let accrued = &balance * &rate.daily_rate(days);
        trace!(%day, %rate, %accrued, "accrued daily interest");

        let interest = start.interest().clone() + accrued;

        Ok(Loan::with_interest(balance, interest))
    }

    /// net transaction amount on the calendar day of `day`, zero if none
    pub fn transactions_amount(&self, day: impl CalendarDay) -> Money {
        self.ledger.amount_on(day)
    }

    /// annual rate in effect on the calendar day of `day`
    pub fn annual_interest_rate(&self, day: impl CalendarDay) -> Option<Rate> {
        self.rates.rate_on(day).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bank() -> Bank {
        Bank::new(
            vec![
                Transaction::new(day(2022, 1, 2), Money::from_decimal(dec!(3003.90))),
                Transaction::new(day(2022, 2, 3), Money::from_decimal(dec!(4000.50))),
                Transaction::new(day(2022, 3, 1), Money::from_decimal(dec!(2000.70))),
            ],
            vec![
                AnnualInterestRate::new(day(2018, 1, 1), Rate::from_decimal(dec!(0.0099))),
                AnnualInterestRate::new(day(2021, 6, 27), Rate::from_decimal(dec!(0.0114))),
                AnnualInterestRate::new(day(2022, 7, 31), Rate::from_decimal(dec!(0.0164))),
                AnnualInterestRate::new(day(2022, 12, 31), Rate::from_decimal(dec!(0.0179))),
            ],
        )
    }

    #[test]
    fn test_advance_first_of_thirty_day_month() {
        let loan = Loan::new(Money::from_major(100_000));

        let out = bank().advance(day(2020, 6, 1), &loan).unwrap();

        // 100000 * 0.0099 / 12 / 30
        assert_eq!(out.balance(), &Money::from_major(100_000));
        assert_eq!(out.interest(), &Money::from_decimal(dec!(2.75)));
    }

    #[test]
    fn test_advance_does_not_touch_input() {
        let loan = Loan::with_interest(Money::from_major(100_000), Money::from_decimal(dec!(10)));

        let out = bank().advance(day(2022, 3, 1), &loan).unwrap();

        assert_eq!(loan.balance(), &Money::from_major(100_000));
        assert_eq!(loan.interest(), &Money::from_decimal(dec!(10)));
        assert_ne!(out, loan);
    }

    #[test]
    fn test_capitalization_only_on_first_of_month() {
        let bank = bank();
        let loan = Loan::with_interest(Money::from_major(100_000), Money::from_decimal(dec!(50)));

        let mid_month = bank.advance(day(2020, 6, 15), &loan).unwrap();
        assert_eq!(mid_month.balance(), &Money::from_major(100_000));
        assert_eq!(mid_month.interest(), &Money::from_decimal(dec!(52.75)));

        let first = bank.advance(day(2020, 6, 1), &loan).unwrap();
        assert_eq!(first.balance(), &Money::from_decimal(dec!(100050)));
        // 100050 * 0.0099 / 12 / 30
        assert_eq!(first.interest(), &Money::from_decimal(dec!(2.7513750)));
    }

    #[test]
    fn test_capitalization_happens_before_transaction() {
        let loan = Loan::with_interest(Money::from_major(100_000), Money::from_decimal(dec!(90)));

        let out = bank().advance(day(2022, 3, 1), &loan).unwrap();

        assert_eq!(out.balance(), &Money::from_decimal(dec!(98089.30)));
        assert_eq!(
            out.interest().as_exact(),
            (&Money::from_decimal(dec!(98089.30)) * &Rate::from_decimal(dec!(0.0114)).daily_rate(31))
                .as_exact()
        );
    }

    #[test]
    fn test_leap_february_uses_twenty_nine_days() {
        let loan = Loan::new(Money::from_major(100_000));

        let out = bank().advance(day(2020, 2, 10), &loan).unwrap();

        let want = &Money::from_major(100_000) * &Rate::from_decimal(dec!(0.0099)).daily_rate(29);
        assert_eq!(out.interest(), &want);
    }

    #[test]
    fn test_transaction_reduces_balance_before_accrual() {
        let loan = Loan::new(Money::from_major(100_000));

        let out = bank().advance(day(2022, 1, 2), &loan).unwrap();

        assert_eq!(out.balance(), &Money::from_decimal(dec!(96996.10)));
        let want = &Money::from_decimal(dec!(96996.10)) * &Rate::from_decimal(dec!(0.0114)).daily_rate(31);
        assert_eq!(out.interest(), &want);
    }

    #[test]
    fn test_missing_rate_fails() {
        let loan = Loan::new(Money::from_major(100_000));

        let err = bank().advance(day(2017, 12, 31), &loan).unwrap_err();

        assert!(matches!(
            err,
            ScheduleError::MissingRateCoverage { day: d } if d == day(2017, 12, 31)
        ));
    }

    #[test]
    fn test_lookups_outside_coverage() {
        let bank = bank();
        assert!(bank.transactions_amount(day(1999, 1, 1)).is_zero());
        assert_eq!(bank.annual_interest_rate(day(1999, 1, 1)), None);
    }

    #[test]
    fn test_rate_change_applies_on_effective_day() {
        let bank = bank();
        let loan = Loan::new(Money::from_major(100_000));

        let before = bank.advance(day(2022, 7, 30), &loan).unwrap();
        let on = bank.advance(day(2022, 7, 31), &loan).unwrap();

        assert_eq!(
            before.interest(),
            &(&Money::from_major(100_000) * &Rate::from_decimal(dec!(0.0114)).daily_rate(31))
        );
        assert_eq!(
            on.interest(),
            &(&Money::from_major(100_000) * &Rate::from_decimal(dec!(0.0164)).daily_rate(31))
        );
    }
}
