use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Combine optional `--date` / `--at` overrides with the current local time.
///
/// When only a date is given, the current time of day is kept. When a time
/// is given, seconds are zero.
pub fn resolve_instant(date: Option<&str>, at: Option<&str>) -> AppResult<NaiveDateTime> {
    let current = now();

    let day = match date {
        Some(d) => parse_date(d)?,
        None => current.date(),
    };

    let time = match at {
        Some(t) => NaiveTime::parse_from_str(t, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
            .map_err(|_| AppError::InvalidTime(t.to_string()))?,
        None => current.time(),
    };

    Ok(day.and_time(time))
}
