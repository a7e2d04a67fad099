use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::service;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        // id is validated inside the service (raw text may not be numeric)
        let removed = service::delete_application(&pool.conn, id)?;
        messages::success(format!("Application {removed} deleted"));
    }
    Ok(())
}
