use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::errors::{Result, ValidationError};

/// Converts a UTC instant to the calendar date completions are recorded against.
///
/// Completion dates are plain UTC calendar dates, so "today" flips at UTC
/// midnight regardless of the caller's locale.
pub fn completion_date_from_utc(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Today's completion date.
pub fn completion_date_today() -> NaiveDate {
    completion_date_from_utc(Utc::now())
}

/// Whole days elapsed from `earlier` to `today` (negative if `earlier` is in the future).
pub fn days_elapsed(earlier: NaiveDate, today: NaiveDate) -> i64 {
    (today - earlier).num_days()
}

/// Returns the Sunday..=Saturday week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(date.weekday().num_days_from_sunday());
    let start = date - Duration::days(offset);
    (start, start + Duration::days(6))
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Every day of the given month, in order.
pub fn days_in_month(year: i32, month: u32) -> Result<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        ValidationError::InvalidInput(format!("Invalid calendar month {year}-{month:02}"))
    })?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| ValidationError::InvalidInput(format!("Month {year}-{month:02} out of range")))?;

    Ok(get_days_between(first, next_first - Duration::days(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_completion_date_uses_utc_calendar_day() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        assert_eq!(completion_date_from_utc(instant), date(2024, 3, 9));
    }

    #[test]
    fn test_days_elapsed() {
        assert_eq!(days_elapsed(date(2024, 1, 1), date(2024, 1, 8)), 7);
        assert_eq!(days_elapsed(date(2024, 1, 8), date(2024, 1, 1)), -7);
        assert_eq!(days_elapsed(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_week_bounds_start_on_sunday() {
        // 2024-05-15 is a Wednesday
        let (start, end) = week_bounds(date(2024, 5, 15));
        assert_eq!(start, date(2024, 5, 12));
        assert_eq!(end, date(2024, 5, 18));

        let (start, end) = week_bounds(date(2024, 5, 12));
        assert_eq!(start, date(2024, 5, 12));
        assert_eq!(end, date(2024, 5, 18));
    }

    #[test]
    fn test_get_days_between() {
        assert!(get_days_between(date(2024, 1, 3), date(2024, 1, 1)).is_empty());
        assert_eq!(
            get_days_between(date(2024, 1, 1), date(2024, 1, 3)),
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2).unwrap().len(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap().len(), 28);
        let december = days_in_month(2024, 12).unwrap();
        assert_eq!(december.first(), Some(&date(2024, 12, 1)));
        assert_eq!(december.last(), Some(&date(2024, 12, 31)));
        assert!(days_in_month(2024, 13).is_err());
        assert!(days_in_month(2024, 0).is_err());
    }
}
