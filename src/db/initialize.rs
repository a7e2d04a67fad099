use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Optional text fields default to `''` (never NULL); only the two work
/// timestamps are nullable. `submitted_at` is stored as
/// `YYYY-MM-DD HH:MM:SS` text so range filters compare lexicographically.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS applications (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL DEFAULT '',
            cabinet       TEXT NOT NULL DEFAULT '',
            phone         TEXT NOT NULL DEFAULT '',
            application   TEXT NOT NULL,
            process       TEXT NOT NULL DEFAULT '',
            executor      TEXT NOT NULL DEFAULT '',
            submitted_at  TEXT NOT NULL,           -- YYYY-MM-DD HH:MM:SS
            started_at    TEXT,
            finished_at   TEXT,
            done          INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS phone_book (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name      TEXT NOT NULL,
            position       TEXT,
            department     TEXT,
            room           TEXT,
            internal_phone TEXT,
            email          TEXT
        );

        CREATE TABLE IF NOT EXISTS op_log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}
