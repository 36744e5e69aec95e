use super::daily::max_pain_on;
use crate::models::daily_aggregate::DailyAggregate;
use crate::models::goal::Goal;
use crate::models::log_entry::LogEntry;
use crate::models::progress::QualifyingSession;
use chrono::{Days, NaiveDate};

/// Session day plus the two days after it.
pub const SAFETY_WINDOW_DAYS: u64 = 3;

fn counts_towards(entry: &LogEntry, goal: &Goal) -> bool {
    entry.activity_type.as_deref() == Some(goal.target_activity.as_str()) && entry.distance > 0.0
}

/// A day without an aggregate row, future days included, reads as pain 0.
fn window_is_safe(daily: &[DailyAggregate], day: NaiveDate, max_allowed_pain: u8) -> bool {
    (0..SAFETY_WINDOW_DAYS).all(|offset| {
        let pain = day
            .checked_add_days(Days::new(offset))
            .map(|d| max_pain_on(daily, d))
            .unwrap_or(0);
        pain <= max_allowed_pain
    })
}

/// Distances of the sessions whose safety window stays within the goal's
/// pain ceiling.
pub fn qualifying_sessions(entries: &[LogEntry], daily: &[DailyAggregate], goal: &Goal) -> Vec<f64> {
    entries
        .iter()
        .filter(|e| counts_towards(e, goal))
        .filter(|e| window_is_safe(daily, e.date, goal.max_allowed_pain))
        .map(|e| e.distance)
        .collect()
}

/// Same selection as [`qualifying_sessions`], keeping which entry each
/// distance came from and whether its window has fully elapsed by `today`.
pub fn qualifying_session_details(
    entries: &[LogEntry],
    daily: &[DailyAggregate],
    goal: &Goal,
    today: NaiveDate,
) -> Vec<QualifyingSession> {
    let mut out: Vec<QualifyingSession> = entries
        .iter()
        .filter(|e| counts_towards(e, goal))
        .filter(|e| window_is_safe(daily, e.date, goal.max_allowed_pain))
        .map(|e| {
            let last_day = e.date.checked_add_days(Days::new(SAFETY_WINDOW_DAYS - 1));
            QualifyingSession {
                entry_id: e.id,
                date: e.date,
                distance: e.distance,
                window_complete: last_day.is_some_and(|d| d < today),
            }
        })
        .collect();

    out.sort_by_key(|s| (s.date, s.entry_id));
    out
}

/// Longest qualifying distance, 0.0 when nothing qualifies.
pub fn best_qualifying_value(distances: &[f64]) -> f64 {
    distances.iter().copied().fold(0.0, f64::max)
}
