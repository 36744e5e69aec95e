use crate::models::goal::GoalRecord;

/// The active goal: latest `created_at`, ties going to the record stored last.
pub fn latest_goal(records: &[GoalRecord]) -> Option<&GoalRecord> {
    // max_by_key yields the last of equal maxima
    records.iter().max_by_key(|r| r.created_at)
}
