use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;
use rusqlite::OptionalExtension;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info } = cmd {
        if *info {
            print_db_info(&DbPool::new(&cfg.database)?, &cfg.database)?;
        } else {
            messages::info("Nothing to do. Try `reqdesk db --info`.");
        }
    }
    Ok(())
}

fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("File: {db_path}");
    println!("Size: {file_mb:.2} MB");

    let applications: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM applications", [], |r| r.get(0))?;
    let employees: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM phone_book", [], |r| r.get(0))?;
    println!("Applications: {applications}");
    println!("Directory entries: {employees}");

    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT submitted_at FROM applications ORDER BY submitted_at ASC LIMIT 1",
            [],
            |r| r.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT submitted_at FROM applications ORDER BY submitted_at DESC LIMIT 1",
            [],
            |r| r.get(0),
        )
        .optional()?;

    println!("Submission range:");
    println!("    from: {}", first.unwrap_or_else(|| "--".to_string()));
    println!("    to:   {}", last.unwrap_or_else(|| "--".to_string()));

    Ok(())
}
