use predicates::str::contains;
use rusqlite::Connection;

mod common;
use common::{ptk, setup_test_db};

/// Build a database the way releases without weight tracking left it.
fn create_legacy_db(db_path: &str) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute_batch(
        r#"
        CREATE TABLE entries (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            date           TEXT NOT NULL,
            kind           TEXT NOT NULL,
            activity_type  TEXT,
            context        TEXT,
            distance       REAL NOT NULL DEFAULT 0,
            duration       INTEGER NOT NULL DEFAULT 0,
            intensity      INTEGER,
            pain_location  TEXT,
            pain_level     INTEGER,
            notes          TEXT NOT NULL DEFAULT '',
            source         TEXT NOT NULL DEFAULT 'cli',
            created_at     TEXT NOT NULL
        );
        INSERT INTO entries (date, kind, activity_type, distance, duration, created_at)
        VALUES ('2024-05-01', 'activity', 'Running', 4.2, 27, '2024-05-01T18:00:00+02:00');
        "#,
    )
    .expect("create legacy schema");
}

#[test]
fn test_legacy_database_gets_weight_column() {
    let db_path = setup_test_db("legacy_weight");
    create_legacy_db(&db_path);

    ptk()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Running 4.20 km / 27 min"));

    let conn = Connection::open(&db_path).expect("open db");

    let weight: Option<f64> = conn
        .query_row("SELECT weight FROM entries WHERE id = 1", [], |r| r.get(0))
        .expect("weight column");
    assert_eq!(weight, None);

    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .expect("log table");
    assert_eq!(applied, 1);
}

#[test]
fn test_weight_migration_runs_once() {
    let db_path = setup_test_db("legacy_weight_once");
    create_legacy_db(&db_path);

    for _ in 0..2 {
        ptk()
            .args(["--db", &db_path, "db", "--migrate"])
            .assert()
            .success();
    }

    let conn = Connection::open(&db_path).expect("open db");
    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .expect("log table");
    assert_eq!(applied, 1);
}
