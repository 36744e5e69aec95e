use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::models::goal::{Goal, GoalRecord};
use crate::models::log_entry::LogEntry;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";
pub const GOAL_TS_FMT: &str = "%Y-%m-%d %H:%M:%S%.f";

const ENTRY_COLUMNS: &str = "id, date, kind, activity_type, context, distance, duration, \
     intensity, pain_location, pain_level, weight, notes, source, created_at";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_entry_row(row: &Row) -> Result<LogEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FMT)
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let kind_str: String = row.get("kind")?;
    let kind = EntryKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(AppError::InvalidEntryKind(kind_str.clone())))?;

    Ok(LogEntry {
        id: row.get("id")?,
        date,
        kind,
        activity_type: row.get("activity_type")?,
        context: row.get("context")?,
        distance: row.get("distance")?,
        duration: row.get("duration")?,
        intensity: row.get("intensity")?,
        pain_location: row.get("pain_location")?,
        pain_level: row.get("pain_level")?,
        weight: row.get("weight")?,
        notes: row.get("notes")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a new entry and return its row id.
pub fn insert_entry(conn: &Connection, e: &LogEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (date, kind, activity_type, context, distance, duration, intensity,
                              pain_location, pain_level, weight, notes, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            e.date.format(DATE_FMT).to_string(),
            e.kind.to_db_str(),
            e.activity_type,
            e.context,
            e.distance,
            e.duration,
            e.intensity,
            e.pain_location,
            e.pain_level,
            e.weight,
            e.notes,
            e.source,
            e.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an entry (all fields except id and created_at).
pub fn update_entry(conn: &Connection, e: &LogEntry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE entries
         SET date = ?1, kind = ?2, activity_type = ?3, context = ?4,
             distance = ?5, duration = ?6, intensity = ?7,
             pain_location = ?8, pain_level = ?9, weight = ?10,
             notes = ?11, source = ?12
         WHERE id = ?13",
        params![
            e.date.format(DATE_FMT).to_string(),
            e.kind.to_db_str(),
            e.activity_type,
            e.context,
            e.distance,
            e.duration,
            e.intensity,
            e.pain_location,
            e.pain_level,
            e.weight,
            e.notes,
            e.source,
            e.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EntryNotFound(e.id));
    }
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

pub fn load_entry_by_id(conn: &Connection, id: i64) -> AppResult<LogEntry> {
    let sql = format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1");
    conn.query_row(&sql, [id], map_entry_row)
        .optional()?
        .ok_or(AppError::EntryNotFound(id))
}

/// Every entry, oldest first.
pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let sql = format!("SELECT {ENTRY_COLUMNS} FROM entries ORDER BY date ASC, id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries with `start <= date <= end`, oldest first.
pub fn load_entries_between(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<LogEntry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![
            start.format(DATE_FMT).to_string(),
            end.format(DATE_FMT).to_string()
        ],
        map_entry_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Append a goal. Older goals are never modified.
pub fn insert_goal(conn: &Connection, goal: &Goal, created_at: &NaiveDateTime) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO goals (target_activity, target_distance, max_allowed_pain, target_date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            goal.target_activity,
            goal.target_distance,
            goal.max_allowed_pain,
            goal.target_date.format(DATE_FMT).to_string(),
            created_at.format(GOAL_TS_FMT).to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn map_goal_row(row: &Row) -> Result<GoalRecord> {
    let target_date_str: String = row.get("target_date")?;
    let target_date = NaiveDate::parse_from_str(&target_date_str, DATE_FMT)
        .map_err(|_| conversion_error(AppError::InvalidDate(target_date_str.clone())))?;

    let created_str: String = row.get("created_at")?;
    let created_at = NaiveDateTime::parse_from_str(&created_str, GOAL_TS_FMT)
        .map_err(|_| conversion_error(AppError::InvalidDate(created_str.clone())))?;

    Ok(GoalRecord {
        id: row.get("id")?,
        created_at,
        goal: Goal {
            target_activity: row.get("target_activity")?,
            target_distance: row.get("target_distance")?,
            max_allowed_pain: row.get("max_allowed_pain")?,
            target_date,
        },
    })
}

/// Full goal history in insertion order.
pub fn load_goals(conn: &Connection) -> AppResult<Vec<GoalRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, target_activity, target_distance, max_allowed_pain, target_date, created_at
         FROM goals ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], map_goal_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
