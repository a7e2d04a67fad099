use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::application::NewApplication;
use crate::service;
use crate::ui::messages;

/// Submit a new application.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { record, done } = cmd {
        let rec = NewApplication {
            name: record.name.clone(),
            cabinet: record.cabinet.clone(),
            phone: record.phone.clone(),
            application_text: record.text.clone(),
            process: record.process.clone(),
            executor: record.executor.clone(),
            submitted_at: record.date.clone(),
            started_at: record.started.clone(),
            finished_at: record.finished.clone(),
            done: *done,
        };

        let pool = DbPool::new(&cfg.database)?;
        let id = service::create_application(&pool.conn, &rec)?;

        messages::success(format!("Application added with id {id}"));
    }
    Ok(())
}
