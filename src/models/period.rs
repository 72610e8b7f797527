use crate::models::clock::ClockValue;
use crate::models::language::Language;
use crate::ui::locale;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PeriodKind {
    /// 1-based lesson number within the day.
    Lesson { index: u32 },
    /// Number of the lesson this break follows.
    Break { after: u32 },
}

/// Half-open interval `[start, start + duration)` of a school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: ClockValue,
    pub duration: i32,
    #[serde(flatten)]
    pub kind: PeriodKind,
}

impl Period {
    pub fn lesson(index: u32, start: ClockValue, duration: i32) -> Self {
        Self {
            start,
            duration,
            kind: PeriodKind::Lesson { index },
        }
    }

    pub fn break_after(after: u32, start: ClockValue, duration: i32) -> Self {
        Self {
            start,
            duration,
            kind: PeriodKind::Break { after },
        }
    }

    pub fn end(&self) -> ClockValue {
        self.start.add(self.duration)
    }

    /// True when `time` falls inside the half-open interval.
    pub fn contains(&self, time: ClockValue) -> bool {
        self.start <= time && time < self.end()
    }

    pub fn is_lesson(&self) -> bool {
        matches!(self.kind, PeriodKind::Lesson { .. })
    }

    pub fn is_break(&self) -> bool {
        matches!(self.kind, PeriodKind::Break { .. })
    }

    /// Lesson number, `None` for breaks.
    pub fn index(&self) -> Option<u32> {
        match self.kind {
            PeriodKind::Lesson { index } => Some(index),
            PeriodKind::Break { .. } => None,
        }
    }

    pub fn describe(&self, lang: Language) -> String {
        match self.kind {
            PeriodKind::Lesson { index } => locale::lesson_label(index, lang),
            PeriodKind::Break { .. } => locale::break_label(self.duration, lang),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(Language::En))
    }
}
