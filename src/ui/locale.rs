//! Display strings in English and Russian.

use crate::models::language::Language;
use crate::models::weekday::sunday_index;
use chrono::{Datelike, NaiveDate, Weekday};

const EN_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const RU_WEEKDAYS: [&str; 7] = [
    "воскресенье",
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
];

// Genitive, as used after a day number
const RU_MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Hint and caption texts shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    NoLessons,
    NotStarted,
    Ended,
    EndOfLessons,
    Next,
    Tomorrow,
    Now,
    Period,
    TimeLeft,
}

pub fn text(t: Text, lang: Language) -> &'static str {
    match lang {
        Language::En => match t {
            Text::NoLessons => "no lessons",
            Text::NotStarted => "lessons have not started yet",
            Text::Ended => "lessons are over",
            Text::EndOfLessons => "end of lessons",
            Text::Next => "Next",
            Text::Tomorrow => "Tomorrow",
            Text::Now => "Now",
            Text::Period => "Period",
            Text::TimeLeft => "Time left",
        },
        Language::Ru => match t {
            Text::NoLessons => "уроков нет",
            Text::NotStarted => "уроки ещё не начались",
            Text::Ended => "уроки закончились",
            Text::EndOfLessons => "конец уроков",
            Text::Next => "Далее",
            Text::Tomorrow => "Завтра",
            Text::Now => "Сейчас",
            Text::Period => "Период",
            Text::TimeLeft => "Осталось",
        },
    }
}

pub fn lesson_label(index: u32, lang: Language) -> String {
    match lang {
        Language::En => format!("{}{} lesson", index, english_suffix(index)),
        Language::Ru => format!("{}-й урок", index),
    }
}

pub fn break_label(minutes: i32, lang: Language) -> String {
    match lang {
        Language::En => format!("Break ({} min)", minutes),
        Language::Ru => format!("Перемена ({} минут)", minutes),
    }
}

fn english_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

pub fn weekday_name(day: Weekday, lang: Language) -> String {
    match lang {
        Language::En => EN_WEEKDAYS[sunday_index(day)].to_string(),
        Language::Ru => RU_WEEKDAYS[sunday_index(day)].to_string(),
    }
}

/// Long date, e.g. `Monday, 19 October 2026` / `понедельник, 19 октября 2026 г.`
pub fn date_label(date: NaiveDate, lang: Language) -> String {
    match lang {
        Language::En => date.format("%A, %-d %B %Y").to_string(),
        Language::Ru => format!(
            "{}, {} {} {} г.",
            RU_WEEKDAYS[sunday_index(date.weekday())],
            date.day(),
            RU_MONTHS[date.month0() as usize],
            date.year()
        ),
    }
}
