use crate::errors::{AppError, AppResult};
use crate::models::goal::Goal;
use crate::models::progress::GoalProgress;
use chrono::NaiveDate;

/// Progress of `best` against the goal's target as of `today`.
///
/// A non-positive target is rejected instead of producing a meaningless
/// percentage.
pub fn progress(best: f64, goal: &Goal, today: NaiveDate) -> AppResult<GoalProgress> {
    let target = goal.target_distance;
    if !target.is_finite() || target <= 0.0 {
        return Err(AppError::MalformedGoal(format!(
            "target distance must be greater than 0 km, got {target}"
        )));
    }

    Ok(GoalProgress {
        percent: (best / target).min(1.0),
        days_remaining: (goal.target_date - today).num_days(),
        achieved: best >= target,
    })
}
