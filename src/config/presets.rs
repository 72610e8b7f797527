//! Built-in timetables.
//!
//! `Standard` is what `init` writes and what is used when no config file
//! exists. `Legacy` reproduces the older fixed timetable, with its own start
//! times and break windows per weekday. The two are not the same school
//! week and are kept apart on purpose.

use super::{Config, DayConfig};
use clap::ValueEnum;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Standard,
    Legacy,
}

const STANDARD_BREAKS: [i32; 6] = [10, 10, 20, 20, 10, 10];
const WORKDAYS: [&str; 6] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

// Legacy tables: start time and offset into the break list per weekday
const LEGACY_BREAKS: [i32; 7] = [10, 10, 20, 20, 10, 10, 10];
const LEGACY_DAYS: [(&str, &str, usize); 6] = [
    ("monday", "9:30", 1),
    ("tuesday", "9:00", 0),
    ("wednesday", "9:00", 0),
    ("thursday", "9:30", 1),
    ("friday", "9:00", 0),
    ("saturday", "8:30", 0),
];

impl Preset {
    pub fn config(&self) -> Config {
        match self {
            Preset::Standard => standard(),
            Preset::Legacy => legacy(),
        }
    }
}

fn standard() -> Config {
    let schedule = WORKDAYS
        .iter()
        .map(|day| {
            (
                day.to_string(),
                DayConfig {
                    start: Some(super::DEFAULT_START.to_string()),
                    breaks: STANDARD_BREAKS.to_vec(),
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    Config {
        lesson_minutes: 45,
        notification_ms: 5000,
        language: Default::default(),
        schedule,
    }
}

fn legacy() -> Config {
    let schedule = LEGACY_DAYS
        .iter()
        .map(|(day, start, offset)| {
            (
                day.to_string(),
                DayConfig {
                    start: Some(start.to_string()),
                    breaks: LEGACY_BREAKS[*offset..*offset + 6].to_vec(),
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    Config {
        lesson_minutes: 45,
        notification_ms: 5000,
        language: Default::default(),
        schedule,
    }
}
