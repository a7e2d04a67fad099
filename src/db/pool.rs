//! SQLite connection handle (lightweight for CLI usage).
//!
//! Constructed once per invocation and passed into every component that
//! needs persistence; never held as process-wide state.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
