use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, ptk, setup_test_db};

fn set_goal(db_path: &str, distance: &str, max_pain: &str, by: &str) {
    ptk()
        .args([
            "--db",
            db_path,
            "goal",
            "--set",
            "-d",
            distance,
            "--max-pain",
            max_pain,
            "--by",
            by,
        ])
        .assert()
        .success();
}

#[test]
fn test_status_without_goal() {
    let db_path = setup_test_db("status_no_goal");
    init_db(&db_path);

    ptk()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("No goal has been set yet"));
}

#[test]
fn test_status_skips_session_followed_by_pain() {
    let db_path = setup_test_db("status_pain_window");
    init_db_with_data(&db_path);
    set_goal(&db_path, "10", "3", "2025-12-31");

    // the 8 km run is followed by pain 4 two days later
    ptk()
        .args(["--db", &db_path, "status", "--today", "2025-09-20"])
        .assert()
        .success()
        .stdout(contains("5.00 km"))
        .stdout(contains("8.00 km").not())
        .stdout(contains("50%"))
        .stdout(contains("102 days remaining"));
}

#[test]
fn test_status_with_higher_pain_ceiling() {
    let db_path = setup_test_db("status_high_ceiling");
    init_db_with_data(&db_path);
    set_goal(&db_path, "10", "4", "2025-12-31");

    ptk()
        .args(["--db", &db_path, "status", "--today", "2025-09-20"])
        .assert()
        .success()
        .stdout(contains("8.00 km"))
        .stdout(contains("80%"));
}

#[test]
fn test_status_marks_provisional_sessions() {
    let db_path = setup_test_db("status_provisional");
    init_db(&db_path);

    ptk()
        .args(["--db", &db_path, "add", "2025-10-01", "-d", "12"])
        .assert()
        .success();
    set_goal(&db_path, "10", "2", "2025-10-31");

    ptk()
        .args(["--db", &db_path, "status", "--today", "2025-10-02"])
        .assert()
        .success()
        .stdout(contains("(provisional)"))
        .stdout(contains("100%"))
        .stdout(contains("Goal achieved"));

    ptk()
        .args(["--db", &db_path, "status", "--today", "2025-10-10"])
        .assert()
        .success()
        .stdout(contains("(provisional)").not());
}

#[test]
fn test_latest_goal_is_active() {
    let db_path = setup_test_db("goal_latest");
    init_db(&db_path);
    set_goal(&db_path, "10", "3", "2025-12-31");
    set_goal(&db_path, "21.1", "2", "2026-04-30");

    ptk()
        .args(["--db", &db_path, "goal"])
        .assert()
        .success()
        .stdout(contains("21.10 km"))
        .stdout(contains("10.00 km").not());

    ptk()
        .args(["--db", &db_path, "goal", "--history"])
        .assert()
        .success()
        .stdout(contains("10.00 km"))
        .stdout(contains("21.10 km"));
}

#[test]
fn test_goal_rejects_zero_distance() {
    let db_path = setup_test_db("goal_zero");
    init_db(&db_path);

    ptk()
        .args(["--db", &db_path, "goal", "--set", "-d", "0", "--by", "2025-12-31"])
        .assert()
        .failure()
        .stderr(contains("Malformed goal"));
}

#[test]
fn test_goal_set_requires_deadline() {
    let db_path = setup_test_db("goal_no_deadline");
    init_db(&db_path);

    ptk()
        .args(["--db", &db_path, "goal", "--set", "-d", "10"])
        .assert()
        .failure();
}

#[test]
fn test_goal_timestamp_ignores_local_timezone() {
    use chrono::{NaiveDateTime, Utc};
    use physiotracker::db::queries::GOAL_TS_FMT;

    let db_path = setup_test_db("goal_utc_stamp");
    init_db(&db_path);

    // UTC+14, far enough from any CI clock to show a local stamp
    ptk()
        .env("TZ", "Pacific/Kiritimati")
        .args(["--db", &db_path, "goal", "--set", "-d", "10", "--by", "2030-01-01"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let raw: String = conn
        .query_row("SELECT created_at FROM goals WHERE id = 1", [], |r| r.get(0))
        .unwrap();
    let created = NaiveDateTime::parse_from_str(&raw, GOAL_TS_FMT).unwrap();

    let drift = (Utc::now().naive_utc() - created).num_minutes().abs();
    assert!(drift < 10, "created_at {raw} is not a UTC stamp");
}
