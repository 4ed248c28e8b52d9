use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// layout of a calendar day in text
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// anything that can be reduced to a date-only calendar day
///
/// Time-of-day is dropped. Zoned timestamps keep the calendar date they
/// have in their own zone, so midnight in New York on 2022-01-02 is
/// 2022-01-02.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// number of days in the given month of the Gregorian calendar
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from((next - first).num_days()).ok()
}

/// number of days in the month `day` falls in
pub fn days_in_month_of(day: NaiveDate) -> Option<u32> {
    days_in_month(day.year(), day.month())
}

pub fn is_first_of_month(day: NaiveDate) -> bool {
    day.day() == 1
}

/// parse a `YYYY-MM-DD` day
pub fn parse_day(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2022, 1), Some(31));
        assert_eq!(days_in_month(2022, 4), Some(30));
        assert_eq!(days_in_month(2022, 12), Some(31));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2022, 13), None);
    }

    #[test]
    fn test_calendar_day_ignores_time_of_day() {
        let day = NaiveDate::from_ymd_opt(2022, 1, 2).unwrap();

        let noon = day.and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(noon.calendar_day(), day);

        let utc = Utc.with_ymd_and_hms(2022, 1, 2, 23, 59, 59).unwrap();
        assert_eq!(utc.calendar_day(), day);
    }

    #[test]
    fn test_calendar_day_keeps_local_date() {
        // midnight in new york is already 05:00 utc, same calendar day
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let midnight = new_york.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(midnight.calendar_day(), NaiveDate::from_ymd_opt(2022, 1, 2).unwrap());
    }

    #[test]
    fn test_first_of_month() {
        assert!(is_first_of_month(NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()));
        assert!(!is_first_of_month(NaiveDate::from_ymd_opt(2022, 2, 28).unwrap()));
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("2022-06-27").unwrap(), NaiveDate::from_ymd_opt(2022, 6, 27).unwrap());
        assert!(parse_day("27/06/2022").is_err());
        assert!(parse_day("2022-02-30").is_err());
    }
}
