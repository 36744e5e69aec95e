use crate::core::engine;
use crate::errors::AppResult;
use crate::models::goal::GoalRecord;
use crate::models::log_entry::LogEntry;
use crate::models::progress::GoalReport;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Evaluate the active goal against the whole log.
    ///
    /// Returns `Ok(None)` when no goal has been set.
    pub fn build_goal_report(
        entries: &[LogEntry],
        goals: &[GoalRecord],
        today: NaiveDate,
    ) -> AppResult<Option<GoalReport>> {
        let Some(active) = engine::latest_goal(goals) else {
            return Ok(None);
        };

        let daily = engine::aggregate_daily(entries);
        let distances = engine::qualifying_sessions(entries, &daily, &active.goal);
        let best = engine::best_qualifying_value(&distances);
        let progress = engine::progress(best, &active.goal, today)?;
        let sessions = engine::qualifying_session_details(entries, &daily, &active.goal, today);

        Ok(Some(GoalReport {
            goal: active.clone(),
            sessions,
            best,
            progress,
        }))
    }
}
