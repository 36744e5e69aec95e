use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

const WEIGHT_MIGRATION: &str = "20250301_0002_add_weight_to_entries";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Create the `entries` table with the current schema.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            date           TEXT NOT NULL,
            kind           TEXT NOT NULL CHECK(kind IN ('activity','pain','weight')),
            activity_type  TEXT,
            context        TEXT,
            distance       REAL NOT NULL DEFAULT 0 CHECK(distance >= 0),
            duration       INTEGER NOT NULL DEFAULT 0 CHECK(duration >= 0),
            intensity      INTEGER CHECK(intensity IS NULL OR intensity BETWEEN 1 AND 10),
            pain_location  TEXT,
            pain_level     INTEGER CHECK(pain_level IS NULL OR pain_level BETWEEN 0 AND 10),
            weight         REAL,
            notes          TEXT NOT NULL DEFAULT '',
            source         TEXT NOT NULL DEFAULT 'cli',
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        CREATE INDEX IF NOT EXISTS idx_entries_date_kind ON entries(date, kind);
        "#,
    )?;
    Ok(())
}

/// Create the append-only `goals` table.
fn create_goals_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS goals (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            target_activity   TEXT NOT NULL,
            target_distance   REAL NOT NULL CHECK(target_distance > 0),
            max_allowed_pain  INTEGER NOT NULL CHECK(max_allowed_pain BETWEEN 0 AND 10),
            target_date       TEXT NOT NULL,
            created_at        TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Logs written before body-weight tracking have no `weight` column.
/// Existing rows keep NULL, i.e. "not recorded".
fn migrate_add_weight_column(conn: &Connection) -> Result<()> {
    if table_has_column(conn, "entries", "weight")? || migration_applied(conn, WEIGHT_MIGRATION)? {
        return Ok(());
    }

    warning("Legacy entries table detected: adding 'weight' column...");

    conn.execute("ALTER TABLE entries ADD COLUMN weight REAL;", [])?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added weight column to entries')",
        [WEIGHT_MIGRATION],
    )?;

    success(format!(
        "Migration applied: {} → added 'weight' to entries table",
        WEIGHT_MIGRATION
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db() and by `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if table_exists(conn, "entries")? {
        migrate_add_weight_column(conn)?;
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
            CREATE INDEX IF NOT EXISTS idx_entries_date_kind ON entries(date, kind);
            "#,
        )?;
    } else {
        create_entries_table(conn)?;
        success("Created entries table.");
    }

    if !table_exists(conn, "goals")? {
        create_goals_table(conn)?;
        success("Created goals table.");
    }

    Ok(())
}
