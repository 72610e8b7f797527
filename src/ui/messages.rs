use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_BELL: &str = "🔔";

fn tag(colour: Colour, icon: &str) -> String {
    Style::new().fg(colour).bold().paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(Colour::Red, ICON_ERR), msg);
}

/// Boxed, highlighted notification line for a bell.
pub fn toast<T: fmt::Display, U: fmt::Display>(time: T, msg: U) -> String {
    let body = format!(" {} {}  {} ", ICON_BELL, time, msg);
    Colour::Black.on(Colour::Yellow).bold().paint(body).to_string()
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) -> String {
    Colour::Blue
        .bold()
        .paint(format!("====================== {}", msg))
        .to_string()
}
