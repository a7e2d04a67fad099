use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;

/// Create the config directory/file and the database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    messages::success(format!("Database initialized: {db_path}"));
    if !cli.test {
        messages::info(format!(
            "Configuration written to {}",
            Config::config_file().display()
        ));
    }
    Ok(())
}
