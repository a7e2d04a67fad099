#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use reqdesk::models::application::NewApplication;
use reqdesk::service;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rqd() -> Command {
    cargo_bin_cmd!("reqdesk")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_reqdesk.sqlite", name));
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

/// Open (and initialize) a database through the library API.
pub fn open_db(db_path: &str) -> Connection {
    let conn = Connection::open(db_path).expect("open db");
    reqdesk::db::initialize::init_db(&conn).expect("init db");
    conn
}

/// In-memory database for pure query-layer tests.
pub fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    reqdesk::db::initialize::init_db(&conn).expect("init db");
    conn
}

/// Insert one application with the given submission day and completion flag.
pub fn seed_app(conn: &Connection, name: &str, text: &str, day: &str, done: bool) -> i64 {
    let rec = NewApplication {
        name: Some(name.to_string()),
        application_text: Some(text.to_string()),
        submitted_at: Some(day.to_string()),
        done,
        ..Default::default()
    };
    service::create_application(conn, &rec).expect("create application")
}

/// Reference dataset: 10 completed requests submitted through January 2024,
/// 15 pending ones through February 2024.
pub fn seed_scenario(conn: &Connection) {
    for i in 0..10 {
        let day = format!("2024-01-{:02}", i + 1);
        seed_app(conn, &format!("Requester {i}"), "printer jam", &day, true);
    }
    for i in 0..15 {
        let day = format!("2024-02-{:02}", i + 1);
        seed_app(conn, &format!("Requester {}", 10 + i), "new monitor", &day, false);
    }
}

/// Init DB and add a couple of applications via the CLI.
pub fn init_db_with_data(db_path: &str) {
    rqd()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rqd()
        .args([
            "--db",
            db_path,
            "add",
            "--name",
            "Ivanova A.",
            "--text",
            "Projector lamp replacement",
            "--date",
            "2025-03-01",
        ])
        .assert()
        .success();

    rqd()
        .args([
            "--db",
            db_path,
            "add",
            "--name",
            "Petrov B.",
            "--text",
            "Login does not work",
            "--date",
            "2025-03-15",
            "--done",
        ])
        .assert()
        .success();
}
