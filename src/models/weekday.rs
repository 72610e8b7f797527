//! Weekday names accepted in the configuration file.

use crate::errors::{AppError, AppResult};
use chrono::Weekday;

/// Monday-first order used when listing a week.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Resolve a configured weekday name.
///
/// Russian names (as used by the original bell page config), English names
/// and their three-letter abbreviations are accepted, case-insensitively.
pub fn parse_weekday(name: &str) -> AppResult<Weekday> {
    let day = match name.trim().to_lowercase().as_str() {
        "понедельник" | "monday" | "mon" => Weekday::Mon,
        "вторник" | "tuesday" | "tue" => Weekday::Tue,
        "среда" | "wednesday" | "wed" => Weekday::Wed,
        "четверг" | "thursday" | "thu" => Weekday::Thu,
        "пятница" | "friday" | "fri" => Weekday::Fri,
        "суббота" | "saturday" | "sat" => Weekday::Sat,
        "воскресенье" | "sunday" | "sun" => Weekday::Sun,
        _ => return Err(AppError::UnknownWeekday(name.to_string())),
    };
    Ok(day)
}

/// 0 = Sunday .. 6 = Saturday.
pub fn sunday_index(day: Weekday) -> usize {
    day.num_days_from_sunday() as usize
}
