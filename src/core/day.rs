//! One weekday of the timetable.
//!
//! Periods are kept sorted by start and contiguous (`periods[i].end() ==
//! periods[i + 1].start`). Every lookup below relies on that: with no gaps,
//! any instant inside `[start, end)` of the day belongs to exactly one
//! period, so the binary search never has to report "between periods".

use crate::models::clock::ClockValue;
use crate::models::period::Period;
use serde::Serialize;

/// Where a clock value falls within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The day has no periods at all.
    Empty,
    /// Lessons have not started yet.
    BeforeStart { first: Period },
    /// The last period is over.
    AfterEnd,
    /// `current` contains the instant; `next` is `None` for the last period.
    InPeriod {
        current: Period,
        next: Option<Period>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DaySchedule {
    periods: Vec<Period>,
}

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append after the current last period.
    pub fn push(&mut self, period: Period) {
        self.periods.push(period);
    }

    /// Place `period` at its sorted position by start.
    ///
    /// Ordering is preserved; contiguity is up to the caller.
    pub fn insert(&mut self, period: Period) {
        let at = self.periods.partition_point(|p| p.start <= period.start);
        self.periods.insert(at, period);
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Period> {
        self.periods.get(index)
    }

    pub fn first(&self) -> Option<&Period> {
        self.periods.first()
    }

    pub fn last(&self) -> Option<&Period> {
        self.periods.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    pub fn start(&self) -> Option<ClockValue> {
        self.first().map(|p| p.start)
    }

    pub fn end(&self) -> Option<ClockValue> {
        self.last().map(Period::end)
    }

    pub fn lessons(&self) -> impl Iterator<Item = &Period> {
        self.periods.iter().filter(|p| p.is_lesson())
    }

    /// Every adjacent pair touches: `a.end() == b.start`.
    pub fn is_contiguous(&self) -> bool {
        self.periods.windows(2).all(|w| w[0].end() == w[1].start)
    }

    pub fn locate(&self, time: ClockValue) -> Lookup {
        let (Some(first), Some(end)) = (self.first(), self.end()) else {
            return Lookup::Empty;
        };

        if time < first.start {
            return Lookup::BeforeStart { first: *first };
        }
        if time >= end {
            return Lookup::AfterEnd;
        }

        let i = self.index_of(time);
        Lookup::InPeriod {
            current: self.periods[i],
            next: self.periods.get(i + 1).copied(),
        }
    }

    /// Binary search for the period containing `time`.
    ///
    /// Only called with `start() <= time < end()`.
    fn index_of(&self, time: ClockValue) -> usize {
        let (mut a, mut b) = (0, self.periods.len() - 1);

        while a < b {
            let c = (a + b) / 2;
            let period = &self.periods[c];

            if time < period.start {
                b = c;
            } else if time >= period.end() {
                a = c + 1;
            } else {
                return c;
            }
        }

        a
    }
}

impl<'a> IntoIterator for &'a DaySchedule {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
