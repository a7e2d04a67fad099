//! End-to-end CLI tests.

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rqd, setup_test_db};

#[test]
fn init_creates_database_file() {
    let db_path = setup_test_db("init");

    rqd()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn add_prints_assigned_id_and_list_shows_record() {
    let db_path = setup_test_db("add_list");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ivanova A.").and(contains("Petrov B.")))
        .stdout(contains("total 2, completed 1, pending 1"));
}

#[test]
fn add_requires_application_text() {
    let db_path = setup_test_db("add_no_text");

    rqd()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rqd()
        .args(["--db", &db_path, "add", "--name", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("Application text must not be empty"));
}

#[test]
fn list_filters_by_status() {
    let db_path = setup_test_db("list_status");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "list", "--status", "done"])
        .assert()
        .success()
        .stdout(contains("Petrov B."))
        .stdout(contains("Ivanova A.").not())
        .stdout(contains("total 1, completed 1, pending 0"));
}

#[test]
fn list_rejects_malformed_date() {
    let db_path = setup_test_db("list_bad_date");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "list", "--from", "03-2025-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn list_json_exposes_pagination_fields() {
    let db_path = setup_test_db("list_json");
    init_db_with_data(&db_path);

    let output = rqd()
        .args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stdout(contains("totalPages").and(contains("currentPage")))
        .get_output()
        .stdout
        .clone();

    let body: serde_json::Value =
        serde_json::from_slice(&output).expect("list --json emits valid JSON");
    assert_eq!(body["stats"]["total"], 2);
    assert_eq!(body["records"].as_array().unwrap().len(), 2);
}

#[test]
fn stats_shows_general_and_filtered() {
    let db_path = setup_test_db("stats_cmd");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "stats", "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("General : total 2, completed 1, pending 1"))
        .stdout(contains("Filtered: total 1, completed 0, pending 1"));
}

#[test]
fn edit_replaces_fields() {
    let db_path = setup_test_db("edit");
    init_db_with_data(&db_path);

    rqd()
        .args([
            "--db",
            &db_path,
            "edit",
            "1",
            "--executor",
            "Smirnov",
            "--done",
        ])
        .assert()
        .success()
        .stdout(contains("Application 1 updated"));

    rqd()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Smirnov"))
        .stdout(contains("done"));
}

#[test]
fn del_requires_integer_id() {
    let db_path = setup_test_db("del_bad_id");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "del", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid application id"));
}

#[test]
fn del_of_missing_id_reports_not_found() {
    let db_path = setup_test_db("del_missing");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "del", "9999"])
        .assert()
        .failure()
        .stderr(contains("Application 9999 not found"));

    // store unchanged
    rqd()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("total 2"));
}

#[test]
fn del_removes_record() {
    let db_path = setup_test_db("del_ok");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("Application 1 deleted"));

    rqd()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("total 1"));
}

#[test]
fn search_validates_field_against_whitelist() {
    let db_path = setup_test_db("search_field");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "search", "--field", "shoe_size", "--query", "42"])
        .assert()
        .failure()
        .stderr(contains("Invalid search field"));
}

#[test]
fn search_finds_seeded_employee() {
    let db_path = setup_test_db("search_hit");
    init_db_with_data(&db_path);

    rqd()
        .args([
            "--db",
            &db_path,
            "seed-employee",
            "--full-name",
            "Orlova D.",
            "--department",
            "Accounting",
            "--email",
            "orlova@example.org",
        ])
        .assert()
        .success();

    rqd()
        .args(["--db", &db_path, "search", "--field", "email", "--query", "orlova"])
        .assert()
        .success()
        .stdout(contains("Orlova D."))
        .stdout(contains("1 employee(s) found"));
}

#[test]
fn departments_are_distinct_and_sorted() {
    let db_path = setup_test_db("departments");
    init_db_with_data(&db_path);

    for (name, dep) in [
        ("A", "Physics"),
        ("B", "Accounting"),
        ("C", "Physics"),
    ] {
        rqd()
            .args([
                "--db",
                &db_path,
                "seed-employee",
                "--full-name",
                name,
                "--department",
                dep,
            ])
            .assert()
            .success();
    }

    let output = rqd()
        .args(["--db", &db_path, "departments"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let deps: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(deps, vec!["Accounting", "Physics"]);
}

#[test]
fn db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rqd()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Applications: 2"));
}
