use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entry, load_entry_by_id};
use crate::errors::AppResult;
use crate::models::log_entry::LogEntry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove entry `id`, returning what was deleted.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<LogEntry> {
        let entry = load_entry_by_id(&pool.conn, id)?;
        delete_entry(&pool.conn, id)?;

        ttlog(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("{} {}", entry.date_str(), entry.describe()),
        )?;

        Ok(entry)
    }
}
