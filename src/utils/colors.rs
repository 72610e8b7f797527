/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Placeholder shown when there is no countdown or start time.
pub const EMPTY_TIME: &str = "--:--";

/// Grey out empty values and `--:--`, keep everything else as is.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == EMPTY_TIME {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Lessons in green, breaks in yellow.
pub fn color_for_period(is_lesson: bool) -> &'static str {
    if is_lesson { GREEN } else { YELLOW }
}
