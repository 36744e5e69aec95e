/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Pain color:
/// 0-3 → green
/// 4-6 → yellow
/// 7-10 → red
pub fn color_for_pain(level: u8) -> &'static str {
    match level {
        0..=3 => GREEN,
        4..=6 => YELLOW,
        _ => RED,
    }
}

/// Deadline color: red once passed, yellow in the last week.
pub fn color_for_days_remaining(days: i64) -> &'static str {
    if days < 0 {
        RED
    } else if days <= 7 {
        YELLOW
    } else {
        RESET
    }
}

/// Wrap `value` in grey when it is a placeholder ("--", "" or "0 min").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "0 min" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
