//! Export command tests: file writers and filter consistency.

use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rqd, setup_test_db, temp_out};

#[test]
fn export_csv_writes_all_records() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv file written");
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("id,name,cabinet"));
    assert_eq!(lines.count(), 2);
    assert!(content.contains("Ivanova A."));
    assert!(content.contains("Projector lamp replacement"));
}

#[test]
fn export_respects_status_filter() {
    let db_path = setup_test_db("export_filtered");
    let out = temp_out("export_filtered", "csv");
    init_db_with_data(&db_path);

    rqd()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            &out,
            "--status",
            "pending",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv file written");
    assert!(content.contains("Ivanova A."));
    assert!(!content.contains("Petrov B."));
}

#[test]
fn export_json_round_trips() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    rqd()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("json file written");
    let body: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(body["total"], 2);
    assert_eq!(body["records"].as_array().unwrap().len(), 2);
    assert!(body["records"][0].get("applicationText").is_some());
}

#[test]
fn export_xlsx_creates_workbook() {
    let db_path = setup_test_db("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");
    init_db_with_data(&db_path);

    rqd()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "xlsx",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx file written");
    assert!(meta.len() > 0);
}

#[test]
fn export_with_empty_result_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_data(&db_path);

    rqd()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            &out,
            "--from",
            "2030-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("nothing exported"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_data(&db_path);

    fs::write(&out, "keep me").unwrap();

    rqd()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rqd()
        .args(["--db", &db_path, "export", "--file", &out, "-f"])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("id,"));
}

#[test]
fn export_rejects_relative_path() {
    let db_path = setup_test_db("export_rel");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_rejects_malformed_date_before_touching_output() {
    let db_path = setup_test_db("export_bad_date");
    let out = temp_out("export_bad_date", "csv");
    init_db_with_data(&db_path);

    rqd()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            &out,
            "--to",
            "31-12-2024",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert!(!std::path::Path::new(&out).exists());
}
