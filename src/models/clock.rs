//! Minute-resolution clock value.
//!
//! A `ClockValue` counts minutes since local midnight. It doubles as a
//! signed duration: subtracting two values or adding a day's worth of
//! minutes may leave the `[0, 1440)` range, and that is meaningful.

use crate::errors::{AppError, AppResult};
use chrono::Timelike;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const MINUTES_PER_HOUR: i32 = 60;
pub const MINUTES_PER_DAY: i32 = 24 * MINUTES_PER_HOUR;

/// Leading integer of a `H:MM` component, surrounding blanks allowed.
static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockValue(i32);

impl ClockValue {
    /// Build from a raw minute count.
    pub const fn from_minutes(minutes: i32) -> Self {
        Self(minutes)
    }

    pub const fn from_hm(hour: i32, minute: i32) -> Self {
        Self(MINUTES_PER_HOUR.saturating_mul(hour).saturating_add(minute))
    }

    /// Hour and minute of a wall-clock reading; seconds are dropped.
    pub fn from_wall_clock<T: Timelike>(t: &T) -> Self {
        Self::from_hm(t.hour() as i32, t.minute() as i32)
    }

    /// Parse `H:MM` or `HH:MM`.
    ///
    /// Only the first two `:`-separated components matter and each must
    /// start with an integer, so `"9:00"`, `"09:00"` and `"9:00:30"` are all
    /// accepted while `"9"` or `"nine:00"` are not.
    pub fn parse(text: &str) -> AppResult<Self> {
        let mut parts = text.split(':').map(leading_int);

        match (parts.next().flatten(), parts.next().flatten()) {
            (Some(hour), Some(minute)) => hour
                .checked_mul(MINUTES_PER_HOUR)
                .and_then(|h| h.checked_add(minute))
                .map(Self)
                .ok_or_else(|| AppError::InvalidTime(text.to_string())),
            _ => Err(AppError::InvalidTime(text.to_string())),
        }
    }

    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Hour of day, wrapped into `0..24`.
    pub fn hour(&self) -> i32 {
        self.0.div_euclid(MINUTES_PER_HOUR).rem_euclid(24)
    }

    pub fn minute(&self) -> i32 {
        self.0.rem_euclid(MINUTES_PER_HOUR)
    }

    pub const fn second(&self) -> i32 {
        0
    }

    /// Saturates at the `i32` bounds.
    pub const fn add(&self, minutes: i32) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    pub const fn add_hm(&self, hours: i32, minutes: i32) -> Self {
        self.add(MINUTES_PER_HOUR.saturating_mul(hours).saturating_add(minutes))
    }

    /// `self - other`, kept signed.
    pub const fn sub(&self, other: ClockValue) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `HH:MM`, or `HH:MM:SS` with the seconds field always `00`.
    pub fn format(&self, include_seconds: bool) -> String {
        if include_seconds {
            format!(
                "{:02}:{:02}:{:02}",
                self.hour(),
                self.minute(),
                self.second()
            )
        } else {
            format!("{:02}:{:02}", self.hour(), self.minute())
        }
    }

    /// `HH:MM` read as a span: the hour is not wrapped, so 32h30 is `32:30`.
    pub fn format_duration(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let total = self.0.unsigned_abs();
        format!("{sign}{:02}:{:02}", total / 60, total % 60)
    }
}

fn leading_int(component: &str) -> Option<i32> {
    LEADING_INT
        .captures(component)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

impl fmt::Display for ClockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}
