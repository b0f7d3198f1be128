use crate::error::{OutreachError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Move `date` by `days` business days, skipping Saturdays and Sundays.
///
/// Each unit steps one calendar day in the direction of the sign and keeps
/// stepping while it lands on a weekend. An offset of zero returns `date`
/// untouched, even when `date` is itself a weekend day.
pub fn add_business_days(date: NaiveDate, days: i64) -> NaiveDate {
    let step = Duration::days(if days >= 0 { 1 } else { -1 });
    let mut cur = date;
    for _ in 0..days.unsigned_abs() {
        cur += step;
        while is_weekend(cur) {
            cur += step;
        }
    }
    cur
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| OutreachError::InvalidDate(s.to_string()))
}
