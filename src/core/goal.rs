use crate::core::engine::latest_goal;
use crate::core::logic::Core;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_goal, load_all_entries, load_goals};
use crate::errors::AppResult;
use crate::models::goal::{Goal, GoalRecord};
use crate::models::progress::GoalReport;
use chrono::{NaiveDate, NaiveDateTime};

pub struct GoalLogic;

impl GoalLogic {
    /// Append `goal` to the history. It becomes the active goal.
    pub fn set(pool: &mut DbPool, goal: &Goal, created_at: NaiveDateTime) -> AppResult<i64> {
        goal.validate()?;
        let id = insert_goal(&pool.conn, goal, &created_at)?;

        ttlog(
            &pool.conn,
            "goal",
            &id.to_string(),
            &format!(
                "{} {:.2} km by {} (max pain {})",
                goal.target_activity, goal.target_distance, goal.target_date, goal.max_allowed_pain
            ),
        )?;

        Ok(id)
    }

    pub fn active(pool: &mut DbPool) -> AppResult<Option<GoalRecord>> {
        let goals = load_goals(&pool.conn)?;
        Ok(latest_goal(&goals).cloned())
    }

    pub fn history(pool: &mut DbPool) -> AppResult<Vec<GoalRecord>> {
        load_goals(&pool.conn)
    }

    /// Read a fresh snapshot of log and goals and evaluate the active goal.
    pub fn report(pool: &mut DbPool, today: NaiveDate) -> AppResult<Option<GoalReport>> {
        let entries = load_all_entries(&pool.conn)?;
        let goals = load_goals(&pool.conn)?;
        Core::build_goal_report(&entries, &goals, today)
    }
}
