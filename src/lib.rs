pub mod bank;
pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod io;
pub mod ledger;
pub mod loan;
pub mod rates;
pub mod schedule;
pub mod types;

// re-export key types
pub use bank::Bank;
pub use calendar::{days_in_month, CalendarDay};
pub use config::{OutputFormat, ScheduleConfig};
pub use decimal::{ExactDecimal, Money, Rate, MONTHS_PER_YEAR};
pub use errors::{Result, ScheduleError};
pub use ledger::TransactionLedger;
pub use loan::Loan;
pub use rates::RateHistory;
pub use schedule::{Schedule, ScheduleRecord, ScheduleRow, ScheduleRunner};
pub use types::{AnnualInterestRate, Transaction};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
