use crate::cli::commands::list::to_filter_query;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats::Stats;
use crate::errors::AppResult;
use crate::service;

/// Print general and filtered statistics side by side.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { filter } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let overview = service::stats_overview(&pool.conn, &to_filter_query(filter))?;

        print_stats("General ", &overview.general);
        print_stats("Filtered", &overview.filtered);
    }
    Ok(())
}

fn print_stats(label: &str, stats: &Stats) {
    println!(
        "{label}: total {}, completed {}, pending {}",
        stats.total, stats.completed, stats.pending
    );
}
