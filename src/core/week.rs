use crate::config::{Config, DEFAULT_START};
use crate::core::day::{DaySchedule, Lookup};
use crate::errors::{AppError, AppResult};
use crate::models::clock::ClockValue;
use crate::models::period::Period;
use crate::models::weekday::{parse_weekday, sunday_index};
use chrono::{Datelike, NaiveDateTime, Weekday};
use tracing::debug;

/// Lesson slots per day.
pub const LESSONS_PER_DAY: u32 = 7;

/// Timetable for a whole week, indexed 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    days: [Option<DaySchedule>; 7],
}

impl WeekSchedule {
    /// Build every configured weekday.
    ///
    /// Fails on the first unparsable start time or unknown weekday name;
    /// nothing is returned for a half-built week.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let mut week = Self::default();

        for (name, day_cfg) in &cfg.schedule {
            let weekday = parse_weekday(name)?;
            let slot = &mut week.days[sunday_index(weekday)];
            if slot.is_some() {
                return Err(AppError::Config(format!(
                    "weekday '{}' is configured more than once",
                    name
                )));
            }

            let start = ClockValue::parse(day_cfg.start.as_deref().unwrap_or(DEFAULT_START))?;
            let day = build_day(start, cfg.lesson_minutes, &day_cfg.breaks);

            debug!(
                weekday = %weekday,
                start = %start,
                end = ?day.end().map(|e| e.to_string()),
                periods = day.len(),
                "day schedule built"
            );
            *slot = Some(day);
        }

        Ok(week)
    }

    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days[sunday_index(weekday)].as_ref()
    }

    /// Day schedule for the weekday of `now`.
    pub fn today(&self, now: &NaiveDateTime) -> Option<&DaySchedule> {
        self.day(now.weekday())
    }

    pub fn first_period(&self, weekday: Weekday) -> Option<&Period> {
        self.day(weekday).and_then(DaySchedule::first)
    }

    /// `locate` on the given weekday; a day without classes is `Empty`.
    pub fn locate(&self, weekday: Weekday, time: ClockValue) -> Lookup {
        self.day(weekday)
            .map(|d| d.locate(time))
            .unwrap_or(Lookup::Empty)
    }

    /// Number of weekdays with a schedule.
    pub fn configured_days(&self) -> usize {
        self.days.iter().filter(|d| d.is_some()).count()
    }
}

/// Chain seven lessons from `start`, each followed by `breaks[n]` if present.
pub fn build_day(start: ClockValue, lesson_minutes: i32, breaks: &[i32]) -> DaySchedule {
    let mut day = DaySchedule::new();
    let mut t = start;

    for n in 0..LESSONS_PER_DAY {
        day.push(Period::lesson(n + 1, t, lesson_minutes));
        t = t.add(lesson_minutes);

        if let Some(&b) = breaks.get(n as usize) {
            day.push(Period::break_after(n + 1, t, b));
            t = t.add(b);
        }
    }

    day
}
