use crate::cli::parser::{Commands, FilterArgs};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::application::Application;
use crate::service::{self, FilterQuery, ListQuery, ListResponse};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        filter,
        page,
        limit,
        json,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let query = ListQuery {
            filter: to_filter_query(filter),
            page: *page,
            limit: *limit,
        };

        let response = service::list_applications(&pool.conn, &query, cfg.default_page_size)?;

        if *json {
            let body = serde_json::to_string_pretty(&response)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{body}");
        } else {
            print_page(&response);
        }
    }
    Ok(())
}

pub fn to_filter_query(args: &FilterArgs) -> FilterQuery {
    FilterQuery {
        status: args.status.clone(),
        from: args.from.clone(),
        to: args.to.clone(),
    }
}

fn print_page(response: &ListResponse) {
    if response.records.is_empty() {
        println!("No applications on this page.");
    } else {
        let mut table = Table::new(&[
            "ID", "Submitted", "Name", "Cabinet", "Request", "Executor", "Status",
        ]);
        for rec in &response.records {
            table.add_row(record_row(rec));
        }
        print!("{}", table.render());
    }

    println!(
        "\nPage {}/{} | total {}, completed {}, pending {}",
        response.current_page,
        response.total_pages,
        response.stats.total,
        response.stats.completed,
        response.stats.pending
    );
}

fn record_row(rec: &Application) -> Vec<String> {
    vec![
        rec.id.to_string(),
        rec.submitted_day(),
        rec.name.clone(),
        rec.cabinet.clone(),
        truncate(&rec.application_text, 40),
        rec.executor.clone(),
        if rec.done { "done" } else { "pending" }.to_string(),
    ]
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
