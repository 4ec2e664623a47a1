//! Civil-date conventions.
//!
//! The calendar day is a `YYYY-MM-DD` string derived in the local time zone.
//! Every write and read path that touches daily-best records goes through
//! these helpers so the convention stays identical on both sides.

use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone, Utc};

fn format_civil(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Civil date of an epoch-millisecond timestamp, local time.
pub fn civil_date_of(epoch_ms: i64) -> String {
    let date = Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|dt| dt.date_naive())
        .unwrap_or_else(|| Local::now().date_naive());
    format_civil(date)
}

/// Today's civil date, local time.
pub fn today() -> String {
    format_civil(Local::now().date_naive())
}

/// The most recent Monday at or before today.
pub fn this_monday() -> String {
    format_civil(monday_on_or_before(Local::now().date_naive()))
}

/// Monday of the week containing `date`: Monday maps to itself, Sunday to
/// the Monday six days prior.
pub fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Current time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monday_maps_to_itself() {
        // 2026-08-24 is a Monday
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(monday_on_or_before(monday), monday);
    }

    #[test]
    fn test_midweek_maps_back() {
        let wednesday = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(monday_on_or_before(wednesday), monday);
    }

    #[test]
    fn test_sunday_maps_six_days_back() {
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(monday_on_or_before(sunday), monday);
    }

    #[test]
    fn test_civil_format() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_civil(date), "2026-01-05");
    }

    #[test]
    fn test_write_and_read_paths_agree_on_today() {
        assert_eq!(civil_date_of(now_millis()), today());
    }
}
