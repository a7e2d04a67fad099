use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::application::parse_id;
use crate::service;
use crate::ui::messages;

/// Replace an application's fields. The update endpoint is a full-record
/// replacement, so the CLI first reads the current record, overlays the
/// provided flags, and sends the complete payload back.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        record,
        done,
        pending,
    } = cmd
    {
        let id = parse_id(id)?;
        let pool = DbPool::new(&cfg.database)?;

        let current = service::get_application(&pool.conn, id)?;
        let mut next = current.to_new();

        if let Some(v) = &record.name {
            next.name = Some(v.clone());
        }
        if let Some(v) = &record.cabinet {
            next.cabinet = Some(v.clone());
        }
        if let Some(v) = &record.phone {
            next.phone = Some(v.clone());
        }
        if let Some(v) = &record.text {
            next.application_text = Some(v.clone());
        }
        if let Some(v) = &record.process {
            next.process = Some(v.clone());
        }
        if let Some(v) = &record.executor {
            next.executor = Some(v.clone());
        }
        if let Some(v) = &record.date {
            next.submitted_at = Some(v.clone());
        }
        if let Some(v) = &record.started {
            next.started_at = Some(v.clone());
        }
        if let Some(v) = &record.finished {
            next.finished_at = Some(v.clone());
        }
        if *done {
            next.done = true;
        } else if *pending {
            next.done = false;
        }

        service::update_application(&pool.conn, id, &next)?;
        messages::success(format!("Application {id} updated"));
    }
    Ok(())
}
