use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, ptk, setup_test_db, temp_out};

const LEGACY_SHEET: &str = "\
Date,Activity Type,Context,Distance (km),Duration (min),Intensity (1-10),Pain Location,Pain Level (0-10),Notes
2025-10-01,Running,Outdoor,7.0,40,6,,,easy pace
2025-10-01,Symptom Log,,,,,Lower Back,2,after run
2025-10-02 08:15:00,Gym/Weights,Gym,0,45,7,,,
";

const WEIGHT_SHEET: &str = "\
Date,Activity Type,Distance (km),Duration (min),Pain Level (0-10),Weight (kg),Notes
2025-10-03,Weight Log,,,,72.4,
2025-10-04,Running,5.5,31,,,
";

#[test]
fn test_import_legacy_sheet() {
    let db_path = setup_test_db("import_legacy");
    init_db(&db_path);
    let csv_path = temp_out("import_legacy", "csv");
    fs::write(&csv_path, LEGACY_SHEET).expect("write csv");

    ptk()
        .args(["--db", &db_path, "import", "--file", &csv_path])
        .assert()
        .success()
        .stdout(contains("Imported 3 entries"));

    ptk()
        .args(["--db", &db_path, "list", "--period", "2025-10"])
        .assert()
        .success()
        .stdout(contains("Running 7.00 km / 40 min"))
        .stdout(contains("Lower Back pain 2/10"))
        .stdout(contains("Gym/Weights 45 min"));
}

#[test]
fn test_import_sheet_with_weight_column() {
    let db_path = setup_test_db("import_weight");
    init_db(&db_path);
    let csv_path = temp_out("import_weight", "csv");
    fs::write(&csv_path, WEIGHT_SHEET).expect("write csv");

    ptk()
        .args(["--db", &db_path, "import", "--file", &csv_path])
        .assert()
        .success()
        .stdout(contains("Imported 2 entries"));

    ptk()
        .args(["--db", &db_path, "list", "--kind", "weight"])
        .assert()
        .success()
        .stdout(contains("72.4 kg"));
}

#[test]
fn test_import_rejects_bad_row_and_keeps_log_unchanged() {
    let db_path = setup_test_db("import_bad_row");
    init_db(&db_path);
    let csv_path = temp_out("import_bad_row", "csv");
    fs::write(
        &csv_path,
        "Date,Activity Type,Distance (km),Pain Level (0-10)\n\
         2025-10-01,Running,5,\n\
         2025-10-02,Symptom Log,,high\n",
    )
    .expect("write csv");

    ptk()
        .args(["--db", &db_path, "import", "--file", &csv_path])
        .assert()
        .failure()
        .stderr(contains("line 3"));

    ptk()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn test_import_requires_date_column() {
    let db_path = setup_test_db("import_no_date");
    init_db(&db_path);
    let csv_path = temp_out("import_no_date", "csv");
    fs::write(&csv_path, "Activity Type,Distance (km)\nRunning,5\n").expect("write csv");

    ptk()
        .args(["--db", &db_path, "import", "--file", &csv_path])
        .assert()
        .failure()
        .stderr(contains("Date"));
}

#[test]
fn test_export_entries_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv", "csv");

    ptk()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed (6 rows)"));

    let content = fs::read_to_string(&out).expect("read export");
    let header = content.lines().next().expect("header line");
    assert!(header.contains("Date"));
    assert!(header.contains("Pain Level (0-10)"));
    assert!(header.contains("Weight (kg)"));
    assert!(content.contains("Cycling"));
}

#[test]
fn test_export_daily_json_with_range() {
    let db_path = setup_test_db("export_daily_json");
    init_db_with_data(&db_path);
    let out = temp_out("export_daily_json", "json");

    ptk()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--daily",
            "--range",
            "2025-09-01:2025-09-07",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");

    // 09-01, 09-05 and 09-07
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["date"], "2025-09-01");
    assert_eq!(rows[0]["max_pain"], 1);
    assert_eq!(rows[2]["max_pain"], 4);
}

#[test]
fn test_export_then_import_keeps_kinds() {
    let src_db = setup_test_db("roundtrip_src");
    init_db_with_data(&src_db);
    let out = temp_out("roundtrip", "csv");

    ptk()
        .args(["--db", &src_db, "export", "--file", &out])
        .assert()
        .success();

    let dst_db = setup_test_db("roundtrip_dst");
    init_db(&dst_db);

    ptk()
        .args(["--db", &dst_db, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 6 entries"));

    ptk()
        .args(["--db", &dst_db, "list", "--kind", "pain"])
        .assert()
        .success()
        .stdout(contains("Knee pain 4/10"))
        .stdout(contains("Cycling").not());
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db_with_data(&db_path);
    let out = temp_out("export_empty", "csv");

    ptk()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2020"])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);
    let out = temp_out("backup_zip", "sqlite");
    let zip_path = std::path::Path::new(&out).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    ptk()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(zip_path.exists());
}
