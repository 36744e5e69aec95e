//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn format_km(km: f64) -> String {
    format!("{:.2} km", km)
}

pub fn format_optional_kg(kg: Option<f64>) -> String {
    match kg {
        Some(w) => format!("{:.1} kg", w),
        None => "--".to_string(),
    }
}

pub fn format_minutes(mins: u32) -> String {
    if mins >= 60 {
        format!("{}h {:02}m", mins / 60, mins % 60)
    } else {
        format!("{} min", mins)
    }
}

/// Horizontal bar of `width` cells filled to `fraction` (clamped to 0..=1).
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let f = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (f * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// Pain level as a 10-cell bar, e.g. `███░░░░░░░ 3`.
pub fn pain_bar(level: u8) -> String {
    let l = level.min(10) as usize;
    format!("{}{} {}", "█".repeat(l), "░".repeat(10 - l), level)
}
