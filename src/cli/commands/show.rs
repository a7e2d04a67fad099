use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::application::parse_id;
use crate::service;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let id = parse_id(id)?;
        let pool = DbPool::new(&cfg.database)?;
        let rec = service::get_application(&pool.conn, id)?;

        let body = serde_json::to_string_pretty(&rec)
            .map_err(|e| AppError::Other(e.to_string()))?;
        println!("{body}");
        println!(
            "\nSubmitted {} | {}",
            date::format_stamp(&rec.submitted_at),
            if rec.done { "done" } else { "pending" }
        );
    }
    Ok(())
}
