use chrono::NaiveDate;

use crate::calendar::CalendarDay;
use crate::decimal::Rate;
use crate::types::AnnualInterestRate;

/// annual interest rates ordered by effective day
#[derive(Debug, Clone, Default)]
pub struct RateHistory {
    rates: Vec<AnnualInterestRate>,
}

impl RateHistory {
    /// sort ascending by effective day; same-day entries keep their input order
    pub fn new(mut rates: Vec<AnnualInterestRate>) -> Self {
        rates.sort_by_key(|r| r.effective_day);
        Self { rates }
    }

    /// rate in effect on the calendar day of `day`
    ///
    /// A rate applies from its effective day inclusive. When two entries
    /// share an effective day the one listed last wins. Returns `None`
    /// before the earliest effective day.
    pub fn rate_on(&self, day: impl CalendarDay) -> Option<&Rate> {
        let day = day.calendar_day();
        let mut found = None;

        for entry in &self.rates {
            if entry.effective_day > day {
                break;
            }
            found = Some(&entry.rate);
        }

        found
    }

    pub fn first_effective_day(&self) -> Option<NaiveDate> {
        self.rates.first().map(|r| r.effective_day)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnualInterestRate> {
        self.rates.iter()
    }
}
