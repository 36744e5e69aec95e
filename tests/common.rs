#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ptk() -> Command {
    cargo_bin_cmd!("physiotracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_physiotracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    ptk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
///
/// - 2025-09-01 Running 5 km, pain 1 on the day, nothing after
/// - 2025-09-05 Running 8 km, pain 4 two days later
/// - 2025-09-10 Cycling 20 km
/// - 2025-09-11 weigh-in 71.5 kg
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    let adds: [&[&str]; 6] = [
        &["add", "2025-09-01", "-d", "5", "-m", "32"],
        &["add", "2025-09-01", "-k", "pain", "-p", "1", "--location", "Knee"],
        &["add", "2025-09-05", "-d", "8", "-m", "50"],
        &["add", "2025-09-07", "-k", "pain", "-p", "4", "--location", "Knee"],
        &["add", "2025-09-10", "-a", "Cycling", "-d", "20", "-m", "60"],
        &["add", "2025-09-11", "-k", "weight", "-w", "71.5"],
    ];

    for args in adds {
        ptk().args(["--db", db_path]).args(args).assert().success();
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}
