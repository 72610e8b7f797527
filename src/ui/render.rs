//! Text rendering of snapshots, toasts and timetables.

use crate::core::board::{DayState, NextCaption, Snapshot};
use crate::core::day::DaySchedule;
use crate::core::watch::Toast;
use crate::core::week::WeekSchedule;
use crate::models::clock::ClockValue;
use crate::models::language::Language;
use crate::models::weekday::WEEK;
use crate::ui::locale::{self, Text};
use crate::ui::messages;
use crate::utils::colors::{CYAN, EMPTY_TIME, GREY, RESET, color_for_period, colorize_optional};
use crate::utils::formatting::{bold, italic, pad_right};
use crate::utils::table::{Column, Table};
use chrono::Weekday;

const LABEL_WIDTH: usize = 11;

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub lang: Language,
    /// Emit ANSI styling.
    pub color: bool,
}

impl Renderer {
    pub fn new(lang: Language, color: bool) -> Self {
        Self { lang, color }
    }

    fn hint(&self, t: Text) -> String {
        let s = locale::text(t, self.lang);
        if self.color {
            italic(&format!("{GREY}{s}{RESET}"))
        } else {
            s.to_string()
        }
    }

    fn time(&self, t: Option<ClockValue>) -> String {
        let s = plain_time(t);
        if self.color { colorize_optional(&s) } else { s }
    }

    fn span(&self, t: Option<ClockValue>) -> String {
        let s = t
            .map(|v| v.format_duration())
            .unwrap_or_else(|| EMPTY_TIME.to_string());
        if self.color { colorize_optional(&s) } else { s }
    }

    fn label(&self, t: Text) -> String {
        pad_right(locale::text(t, self.lang), LABEL_WIDTH)
    }

    pub fn board(&self, snap: &Snapshot) -> String {
        let date = locale::date_label(snap.date, self.lang);
        let mut out = String::new();

        out.push_str(&if self.color { bold(&date) } else { date });
        out.push('\n');

        out.push_str(&format!("{}{}\n", self.label(Text::Now), snap.time));

        let period = match (snap.state, snap.period) {
            (DayState::InPeriod, Some(p)) if self.color => {
                format!("{}{}{}", color_for_period(p.is_lesson()), p.describe(self.lang), RESET)
            }
            (DayState::InPeriod, Some(p)) => p.describe(self.lang),
            (DayState::NotStarted, _) => self.hint(Text::NotStarted),
            (DayState::Ended, _) => self.hint(Text::Ended),
            _ => self.hint(Text::NoLessons),
        };
        out.push_str(&format!("{}{}\n", self.label(Text::Period), period));

        out.push_str(&format!(
            "{}{}\n",
            self.label(Text::TimeLeft),
            self.span(snap.time_left)
        ));

        let caption = match snap.next_caption {
            NextCaption::Next => Text::Next,
            NextCaption::Tomorrow => Text::Tomorrow,
        };
        let next = match snap.next_period {
            Some(p) => p.describe(self.lang),
            None if snap.state == DayState::InPeriod => self.hint(Text::EndOfLessons),
            None => self.hint(Text::NoLessons),
        };
        out.push_str(&format!(
            "{}{}  {}\n",
            self.label(caption),
            self.time(snap.next_start),
            next
        ));

        out
    }

    pub fn toast(&self, toast: &Toast) -> String {
        let msg = toast.period.describe(self.lang);
        if self.color {
            messages::toast(toast.time, msg)
        } else {
            format!("[bell] {}  {}", toast.time, msg)
        }
    }

    /// Period table for one weekday.
    pub fn day(&self, weekday: Weekday, day: Option<&DaySchedule>) -> String {
        let title = locale::weekday_name(weekday, self.lang);
        let mut out = if self.color {
            messages::header(&title)
        } else {
            format!("== {}", title)
        };
        out.push('\n');

        let Some(day) = day.filter(|d| !d.is_empty()) else {
            out.push_str(&self.hint(Text::NoLessons));
            out.push('\n');
            return out;
        };

        let mut table = Table::new(vec![
            Column::new("#", 3),
            Column::new("Start", 6),
            Column::new("End", 6),
            Column::new("Period", 24),
        ]);

        // Cells stay unstyled so column padding is measured correctly
        for p in day {
            table.add_row(vec![
                p.index().map(|i| i.to_string()).unwrap_or_default(),
                p.start.to_string(),
                p.end().to_string(),
                p.describe(self.lang),
            ]);
        }

        out.push_str(&table.render());
        out
    }

    /// One line per weekday: first start, last end and lesson count.
    pub fn week(&self, week: &WeekSchedule) -> String {
        let mut table = Table::new(vec![
            Column::new("Day", 13),
            Column::new("Start", 6),
            Column::new("End", 6),
            Column::new("Lessons", 7),
        ]);

        for day in WEEK {
            let name = locale::weekday_name(day, self.lang);
            let d = week.day(day);
            table.add_row(vec![
                name,
                plain_time(d.and_then(DaySchedule::start)),
                plain_time(d.and_then(DaySchedule::end)),
                d.map(|d| d.lessons().count().to_string())
                    .unwrap_or_else(|| "-".into()),
            ]);
        }

        let body = table.render();
        if self.color {
            format!("{CYAN}{body}{RESET}")
        } else {
            body
        }
    }
}

fn plain_time(t: Option<ClockValue>) -> String {
    t.map(|v| v.format(false))
        .unwrap_or_else(|| EMPTY_TIME.to_string())
}
