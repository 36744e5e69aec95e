use crate::errors::{AppError, AppResult};
use crate::models::log_entry::MAX_PAIN_LEVEL;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A distance target that only pain-safe sessions count towards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Goal {
    pub target_activity: String,
    pub target_distance: f64, // km, > 0
    pub max_allowed_pain: u8, // 0-10 inclusive
    pub target_date: NaiveDate,
}

impl Goal {
    pub fn new(
        target_activity: &str,
        target_distance: f64,
        max_allowed_pain: u8,
        target_date: NaiveDate,
    ) -> AppResult<Self> {
        let goal = Self {
            target_activity: target_activity.trim().to_string(),
            target_distance,
            max_allowed_pain,
            target_date,
        };
        goal.validate()?;
        Ok(goal)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.target_distance.is_finite() || self.target_distance <= 0.0 {
            return Err(AppError::MalformedGoal(format!(
                "target distance must be greater than 0 km, got {}",
                self.target_distance
            )));
        }

        if self.max_allowed_pain > MAX_PAIN_LEVEL {
            return Err(AppError::MalformedGoal(format!(
                "max allowed pain must be between 0 and {MAX_PAIN_LEVEL}, got {}",
                self.max_allowed_pain
            )));
        }

        if self.target_activity.is_empty() {
            return Err(AppError::MalformedGoal(
                "target activity cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

/// One row of the append-only goal history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GoalRecord {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub goal: Goal,
}
