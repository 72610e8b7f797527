//! The bell board: everything shown for one instant.
//!
//! A snapshot is computed from scratch out of the week schedule and a local
//! date-time; nothing is carried over between two snapshots.

use crate::core::day::Lookup;
use crate::core::week::WeekSchedule;
use crate::models::clock::ClockValue;
use crate::models::period::Period;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    NoLessons,
    NotStarted,
    Ended,
    InPeriod,
}

/// Whether the "next" column refers to today or to tomorrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextCaption {
    Next,
    Tomorrow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub time: ClockValue,
    pub state: DayState,
    /// Current period, only in `InPeriod`.
    pub period: Option<Period>,
    /// `None` when there is nothing to count down to.
    pub time_left: Option<ClockValue>,
    pub next_caption: NextCaption,
    pub next_start: Option<ClockValue>,
    /// `None` in `InPeriod` means the current period is the last one.
    pub next_period: Option<Period>,
    /// Set on the boundary instant of `period`.
    pub notify: Option<Period>,
}

pub fn snapshot(week: &WeekSchedule, now: &NaiveDateTime) -> Snapshot {
    let date = now.date();
    let weekday = date.weekday();
    let time = ClockValue::from_wall_clock(now);

    match week.locate(weekday, time) {
        Lookup::Empty => tomorrow(week, date, time, DayState::NoLessons),
        Lookup::AfterEnd => tomorrow(week, date, time, DayState::Ended),
        Lookup::BeforeStart { first } => Snapshot {
            date,
            time,
            state: DayState::NotStarted,
            period: None,
            time_left: Some(first.start.sub(time)),
            next_caption: NextCaption::Next,
            next_start: Some(first.start),
            next_period: Some(first),
            notify: None,
        },
        Lookup::InPeriod { current, next } => {
            let boundary = now.second() == 0 && time == current.start;
            Snapshot {
                date,
                time,
                state: DayState::InPeriod,
                period: Some(current),
                time_left: Some(current.end().sub(time)),
                next_caption: NextCaption::Next,
                next_start: Some(next.map(|n| n.start).unwrap_or_else(|| current.end())),
                next_period: next,
                notify: boundary.then_some(current),
            }
        }
    }
}

/// Countdown to the first period of the following day, if it has any.
fn tomorrow(week: &WeekSchedule, date: NaiveDate, time: ClockValue, state: DayState) -> Snapshot {
    let first = week.first_period(date.weekday().succ()).copied();

    Snapshot {
        date,
        time,
        state,
        period: None,
        time_left: first.map(|p| p.start.add_hm(24, 0).sub(time)),
        next_caption: NextCaption::Tomorrow,
        next_start: first.map(|p| p.start),
        next_period: first,
        notify: None,
    }
}
