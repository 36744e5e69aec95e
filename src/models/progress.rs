use super::goal::GoalRecord;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GoalProgress {
    /// Fraction of the target distance, clamped to 1.0.
    pub percent: f64,
    /// Negative once the deadline has passed.
    pub days_remaining: i64,
    pub achieved: bool,
}

/// A session that counts towards the goal.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QualifyingSession {
    pub entry_id: i64,
    pub date: NaiveDate,
    pub distance: f64,
    /// False while part of the safety window is still in the future.
    pub window_complete: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalReport {
    pub goal: GoalRecord,
    pub sessions: Vec<QualifyingSession>,
    pub best: f64,
    pub progress: GoalProgress,
}
