use crate::calendar::CalendarDay;
use crate::decimal::Money;
use crate::types::Transaction;

/// transactions ordered by date
#[derive(Debug, Clone, Default)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
}

impl TransactionLedger {
    /// sort ascending by date; same-day entries keep their input order
    pub fn new(mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by_key(|t| t.date);
        Self { transactions }
    }

    /// net amount of all transactions on the calendar day of `day`
    pub fn amount_on(&self, day: impl CalendarDay) -> Money {
        let day = day.calendar_day();

        self.transactions
            .iter()
            .take_while(|t| t.date <= day)
            .filter(|t| t.date == day)
            .map(|t| &t.amount)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }
}
