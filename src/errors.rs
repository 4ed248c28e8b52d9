use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("malformed input on line {line}: {field} {value:?}: {reason}")]
    MalformedInput {
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("no annual interest rate covers {day}")]
    MissingRateCoverage {
        day: NaiveDate,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScheduleError {
    /// malformed field outside of a file context (e.g. a single amount string)
    pub fn malformed(field: &'static str, value: &str, reason: impl ToString) -> Self {
        ScheduleError::MalformedInput {
            line: 0,
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// attach the csv line a malformed field came from
    pub fn at_line(self, line: u64) -> Self {
        match self {
            ScheduleError::MalformedInput { field, value, reason, .. } => {
                ScheduleError::MalformedInput { line, field, value, reason }
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_carries_line() {
        let err = ScheduleError::malformed("amount", "3.003,92", "two decimal points").at_line(4);

        match &err {
            ScheduleError::MalformedInput { line, field, value, .. } => {
                assert_eq!(*line, 4);
                assert_eq!(*field, "amount");
                assert_eq!(value, "3.003,92");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "malformed input on line 4: amount \"3.003,92\": two decimal points"
        );
    }

    #[test]
    fn test_missing_rate_message() {
        let err = ScheduleError::MissingRateCoverage {
            day: NaiveDate::from_ymd_opt(1999, 5, 19).unwrap(),
        };
        assert_eq!(err.to_string(), "no annual interest rate covers 1999-05-19");
    }
}
