use chrono::{Days, NaiveDateTime};
use physiotracker::core::engine::daily::max_pain_on;
use physiotracker::core::engine::{
    aggregate_daily, best_qualifying_value, latest_goal, progress, qualifying_session_details,
    qualifying_sessions,
};
use physiotracker::errors::AppError;
use physiotracker::models::goal::{Goal, GoalRecord};
use physiotracker::models::log_entry::LogEntry;

mod common;
use common::date;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

fn goal(max_pain: u8) -> Goal {
    Goal::new("Running", 10.0, max_pain, date("2024-03-01")).expect("valid goal")
}

fn record(id: i64, created_at: &str, distance: f64) -> GoalRecord {
    GoalRecord {
        id,
        created_at: ts(created_at),
        goal: Goal::new("Running", distance, 3, date("2024-06-01")).expect("valid goal"),
    }
}

// ---------------------------------------------------------------------------
// aggregate_daily
// ---------------------------------------------------------------------------

#[test]
fn test_aggregate_one_row_per_date_with_sums() {
    let d1 = date("2024-01-01");
    let d2 = date("2024-01-03");
    let entries = vec![
        LogEntry::activity(d2, "Running", 4.0, 25),
        LogEntry::activity(d1, "Running", 5.0, 30),
        LogEntry::activity(d1, "Cycling", 12.5, 45),
        LogEntry::pain(d1, 2),
    ];

    let daily = aggregate_daily(&entries);

    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].date, d1);
    assert_eq!(daily[1].date, d2);
    assert_eq!(daily[0].total_duration, 75);
    assert!((daily[0].total_distance - 17.5).abs() < 1e-9);
    assert_eq!(daily[0].entry_count, 3);
    assert_eq!(daily[1].total_duration, 25);
}

#[test]
fn test_aggregate_max_pain() {
    let d = date("2024-01-01");
    let quiet = date("2024-01-02");
    let entries = vec![
        LogEntry::pain(d, 3),
        LogEntry::pain(d, 7),
        LogEntry::pain(d, 2),
        LogEntry::activity(quiet, "Running", 3.0, 20),
    ];

    let daily = aggregate_daily(&entries);

    assert_eq!(daily[0].max_pain, 7);
    assert_eq!(daily[1].max_pain, 0);
}

#[test]
fn test_aggregate_mean_weight_ignores_missing() {
    let d = date("2024-01-01");
    let entries = vec![
        LogEntry::body_weight(d, 70.0),
        LogEntry::body_weight(d, 71.0),
        LogEntry::activity(d, "Running", 5.0, 30),
        LogEntry::activity(date("2024-01-02"), "Running", 5.0, 30),
    ];

    let daily = aggregate_daily(&entries);

    assert_eq!(daily[0].mean_weight, Some(70.5));
    assert_eq!(daily[1].mean_weight, None);
}

#[test]
fn test_aggregate_is_idempotent() {
    let entries = vec![
        LogEntry::activity(date("2024-01-05"), "Running", 5.0, 30),
        LogEntry::pain(date("2024-01-02"), 4),
    ];
    assert_eq!(aggregate_daily(&entries), aggregate_daily(&entries));
}

#[test]
fn test_aggregate_empty_log() {
    assert!(aggregate_daily(&[]).is_empty());
}

// ---------------------------------------------------------------------------
// qualifying_sessions
// ---------------------------------------------------------------------------

#[test]
fn test_session_rejected_when_pain_rises_two_days_later() {
    let d = date("2024-01-01");
    let entries = vec![
        LogEntry::activity(d, "Running", 5.0, 30),
        LogEntry::pain(d, 1),
        LogEntry::pain(d + Days::new(1), 1),
        LogEntry::pain(d + Days::new(2), 3),
    ];
    let daily = aggregate_daily(&entries);

    assert!(qualifying_sessions(&entries, &daily, &goal(2)).is_empty());
}

#[test]
fn test_session_qualifies_when_last_window_day_is_missing() {
    let d = date("2024-01-01");
    let entries = vec![
        LogEntry::activity(d, "Running", 5.0, 30),
        LogEntry::pain(d, 1),
        LogEntry::pain(d + Days::new(1), 2),
    ];
    let daily = aggregate_daily(&entries);

    assert_eq!(qualifying_sessions(&entries, &daily, &goal(2)), vec![5.0]);
}

#[test]
fn test_pain_after_window_does_not_count() {
    let d = date("2024-01-01");
    let entries = vec![
        LogEntry::activity(d, "Running", 6.0, 35),
        LogEntry::pain(d + Days::new(3), 9),
    ];
    let daily = aggregate_daily(&entries);

    assert_eq!(qualifying_sessions(&entries, &daily, &goal(2)), vec![6.0]);
}

#[test]
fn test_only_target_activity_with_distance_counts() {
    let d = date("2024-01-01");
    let entries = vec![
        LogEntry::activity(d, "Cycling", 30.0, 60),
        LogEntry::activity(d, "Running", 0.0, 20),
        LogEntry::activity(d, "Running", 4.0, 25),
        LogEntry::body_weight(d, 70.0),
    ];
    let daily = aggregate_daily(&entries);

    assert_eq!(qualifying_sessions(&entries, &daily, &goal(5)), vec![4.0]);
}

#[test]
fn test_threshold_is_inclusive() {
    let d = date("2024-01-01");
    let entries = vec![
        LogEntry::activity(d, "Running", 5.0, 30),
        LogEntry::pain(d + Days::new(2), 2),
    ];
    let daily = aggregate_daily(&entries);

    assert_eq!(qualifying_sessions(&entries, &daily, &goal(2)), vec![5.0]);
}

#[test]
fn test_pain_on_session_day_disqualifies() {
    let d = date("2024-01-01");
    let entries = vec![
        LogEntry::activity(d, "Running", 5.0, 30),
        LogEntry::pain(d, 3),
    ];
    let daily = aggregate_daily(&entries);

    assert!(qualifying_sessions(&entries, &daily, &goal(2)).is_empty());
}

#[test]
fn test_pain_before_session_day_is_ignored() {
    let d = date("2024-01-02");
    let entries = vec![
        LogEntry::pain(date("2024-01-01"), 9),
        LogEntry::activity(d, "Running", 5.0, 30),
        LogEntry::pain(d, 1),
    ];
    let daily = aggregate_daily(&entries);

    assert_eq!(qualifying_sessions(&entries, &daily, &goal(2)), vec![5.0]);
}

#[test]
fn test_max_pain_lookup_across_gaps() {
    let entries = vec![
        LogEntry::pain(date("2024-01-10"), 6),
        LogEntry::pain(date("2024-01-01"), 2),
        LogEntry::pain(date("2024-01-05"), 4),
    ];
    let daily = aggregate_daily(&entries);

    assert_eq!(max_pain_on(&daily, date("2024-01-01")), 2);
    assert_eq!(max_pain_on(&daily, date("2024-01-05")), 4);
    assert_eq!(max_pain_on(&daily, date("2024-01-10")), 6);
    assert_eq!(max_pain_on(&daily, date("2024-01-03")), 0);
    assert_eq!(max_pain_on(&daily, date("2024-02-01")), 0);
}

#[test]
fn test_session_details_mark_open_windows() {
    let d = date("2024-01-01");
    let mut first = LogEntry::activity(d, "Running", 5.0, 30);
    first.id = 1;
    let mut second = LogEntry::activity(d + Days::new(2), "Running", 6.0, 30);
    second.id = 2;
    let entries = vec![second, first];
    let daily = aggregate_daily(&entries);

    // window of the first session is Jan 1-3, of the second Jan 3-5
    let details = qualifying_session_details(&entries, &daily, &goal(2), date("2024-01-04"));

    assert_eq!(details.len(), 2);
    assert_eq!(details[0].entry_id, 1);
    assert!(details[0].window_complete);
    assert_eq!(details[1].entry_id, 2);
    assert!(!details[1].window_complete);
}

// ---------------------------------------------------------------------------
// best_qualifying_value
// ---------------------------------------------------------------------------

#[test]
fn test_best_of_nothing_is_zero() {
    assert_eq!(best_qualifying_value(&[]), 0.0);
}

#[test]
fn test_best_is_the_maximum() {
    assert_eq!(best_qualifying_value(&[3.0, 7.5, 5.0]), 7.5);
}

// ---------------------------------------------------------------------------
// progress
// ---------------------------------------------------------------------------

#[test]
fn test_progress_partial() {
    let today = date("2024-01-01");
    let g = Goal::new("Running", 10.0, 3, today + Days::new(30)).expect("valid goal");

    let p = progress(7.5, &g, today).expect("progress");

    assert!((p.percent - 0.75).abs() < 1e-9);
    assert_eq!(p.days_remaining, 30);
    assert!(!p.achieved);
}

#[test]
fn test_progress_is_clamped_when_exceeded() {
    let today = date("2024-01-01");
    let g = Goal::new("Running", 10.0, 3, today + Days::new(30)).expect("valid goal");

    let p = progress(12.0, &g, today).expect("progress");

    assert_eq!(p.percent, 1.0);
    assert!(p.achieved);
}

#[test]
fn test_progress_after_deadline_is_negative() {
    let g = Goal::new("Running", 10.0, 3, date("2024-01-01")).expect("valid goal");

    let p = progress(0.0, &g, date("2024-01-11")).expect("progress");

    assert_eq!(p.days_remaining, -10);
    assert_eq!(p.percent, 0.0);
    assert!(!p.achieved);
}

#[test]
fn test_progress_rejects_non_positive_target() {
    let g = Goal {
        target_activity: "Running".into(),
        target_distance: 0.0,
        max_allowed_pain: 3,
        target_date: date("2024-02-01"),
    };

    let res = progress(5.0, &g, date("2024-01-01"));

    assert!(matches!(res, Err(AppError::MalformedGoal(_))));
}

#[test]
fn test_goal_constructor_rejects_bad_values() {
    let d = date("2024-02-01");
    assert!(matches!(
        Goal::new("Running", -1.0, 3, d),
        Err(AppError::MalformedGoal(_))
    ));
    assert!(matches!(
        Goal::new("Running", 5.0, 11, d),
        Err(AppError::MalformedGoal(_))
    ));
    assert!(matches!(
        Goal::new("  ", 5.0, 3, d),
        Err(AppError::MalformedGoal(_))
    ));
}

// ---------------------------------------------------------------------------
// latest_goal
// ---------------------------------------------------------------------------

#[test]
fn test_latest_goal_ignores_storage_order() {
    let records = vec![
        record(1, "2024-01-01 10:00:00", 5.0),
        record(3, "2024-03-01 10:00:00", 21.1),
        record(2, "2024-02-01 10:00:00", 10.0),
    ];

    let active = latest_goal(&records).expect("a goal");

    assert_eq!(active.id, 3);
}

#[test]
fn test_latest_goal_tie_goes_to_last_written() {
    let records = vec![
        record(1, "2024-01-01 10:00:00", 5.0),
        record(2, "2024-01-01 10:00:00", 10.0),
    ];

    assert_eq!(latest_goal(&records).map(|g| g.id), Some(2));
}

#[test]
fn test_latest_goal_without_history() {
    assert!(latest_goal(&[]).is_none());
}
