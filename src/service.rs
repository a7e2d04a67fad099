//! Endpoint logic: composes the predicate builder, the pagination engine and
//! the aggregator into the response shapes a transport serializes as JSON.
//!
//! Each function evaluates one request independently from its parameters;
//! there is no server-side filter state. Validation (dates, ids, required
//! text) happens before any store call. The list, stats and export paths all
//! consume the identical [`Filter`] built by [`FilterQuery::to_filter`], so
//! the three views of the data always agree.

use crate::db::log::oplog;
use crate::db::queries;
use crate::db::stats::{Stats, stats_for};
use crate::errors::{AppError, AppResult};
use crate::models::application::{Application, NewApplication, parse_id};
use crate::models::employee::{Employee, SearchField};
use crate::query::filter::Filter;
use crate::query::page::{Page, total_pages};
use crate::ui::messages;
use rusqlite::Connection;
use serde::Serialize;

/// Raw filter parameters, exactly as they arrive from the client.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    pub status: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl FilterQuery {
    pub fn to_filter(&self) -> AppResult<Filter> {
        Filter::build(
            self.status.as_deref(),
            self.from.as_deref(),
            self.to.as_deref(),
        )
    }
}

/// Raw list parameters: filter plus page/limit.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filter: FilterQuery,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub records: Vec<Application>,
    pub total_pages: i64,
    pub current_page: i64,
    pub stats: Stats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub records: Vec<Application>,
    pub total: i64,
}

/// General (unfiltered) and filtered stats, computed by calling the
/// aggregator twice — never derived from each other.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub general: Stats,
    pub filtered: Stats,
}

/// Structured error body for the endpoint boundary.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Convert any error into `(status, body)`. Store failures keep a generic
/// top-level message and carry the underlying cause in `details`.
pub fn error_response(err: &AppError) -> (u16, ErrorResponse) {
    let body = match err {
        AppError::Db(inner) => ErrorResponse {
            error: "Store operation failed".to_string(),
            details: Some(inner.to_string()),
        },
        other => ErrorResponse {
            error: other.to_string(),
            details: None,
        },
    };
    (err.status(), body)
}

/// `GET /applications` — one page of records plus filtered stats.
pub fn list_applications(
    conn: &Connection,
    q: &ListQuery,
    default_limit: i64,
) -> AppResult<ListResponse> {
    let filter = q.filter.to_filter()?;
    let page = Page::new(q.page, q.limit, default_limit);
    let stats = stats_for(conn, &filter)?;
    let records = queries::list_filtered(conn, &filter, page.limit, page.offset())?;
    Ok(ListResponse {
        records,
        total_pages: total_pages(stats.total, page.limit),
        current_page: page.page,
        stats,
    })
}

/// `GET /applications/export` — the full filtered set, same predicate and
/// ordering as the list path, no pagination.
pub fn export_applications(conn: &Connection, q: &FilterQuery) -> AppResult<ExportResponse> {
    let filter = q.to_filter()?;
    let records = queries::list_all_filtered(conn, &filter)?;
    let total = records.len() as i64;
    Ok(ExportResponse { records, total })
}

/// General and filtered stats side by side.
pub fn stats_overview(conn: &Connection, q: &FilterQuery) -> AppResult<StatsOverview> {
    let general = stats_for(conn, &Filter::none())?;
    let filtered = stats_for(conn, &q.to_filter()?)?;
    Ok(StatsOverview { general, filtered })
}

/// `POST /applications` — validate, apply create defaults, insert.
pub fn create_application(conn: &Connection, rec: &NewApplication) -> AppResult<i64> {
    let draft = rec.normalize()?;
    if draft.application_text.trim().is_empty() {
        return Err(AppError::EmptyApplicationText);
    }
    let id = queries::insert_application(conn, &draft).inspect_err(|e| log_failure(conn, "create", "", e))?;
    let _ = oplog(conn, "create", &id.to_string(), &format!("application submitted by '{}'", draft.name));
    Ok(id)
}

pub fn get_application(conn: &Connection, id: i64) -> AppResult<Application> {
    queries::get_application(conn, id)?.ok_or(AppError::NotFound(id))
}

/// `PUT /applications/{id}` — full-record replacement.
pub fn update_application(conn: &Connection, id: i64, rec: &NewApplication) -> AppResult<()> {
    let draft = rec.normalize()?;
    queries::update_application(conn, id, &draft)
        .inspect_err(|e| log_failure(conn, "update", &id.to_string(), e))?;
    let _ = oplog(conn, "update", &id.to_string(), "application replaced");
    Ok(())
}

/// `DELETE /applications/{id}` — the id arrives as raw text and is validated
/// before the store is consulted.
pub fn delete_application(conn: &Connection, raw_id: &str) -> AppResult<i64> {
    let id = parse_id(raw_id)?;
    queries::delete_application(conn, id)
        .inspect_err(|e| log_failure(conn, "delete", raw_id, e))?;
    let _ = oplog(conn, "delete", &id.to_string(), "application removed");
    Ok(id)
}

/// `GET /employees/search` — whitelisted-field substring search.
pub fn search_employees(conn: &Connection, field: &str, query: &str) -> AppResult<Vec<Employee>> {
    let field = SearchField::parse(field)
        .ok_or_else(|| AppError::InvalidSearchField(field.to_string()))?;
    crate::db::directory::search_employees(conn, field, query)
}

/// `GET /employees/departments`.
pub fn list_departments(conn: &Connection) -> AppResult<Vec<String>> {
    crate::db::directory::list_departments(conn)
}

/// Store failures are logged with full context before being surfaced; the
/// op_log write itself is best-effort (the connection may be the thing that
/// is broken).
fn log_failure(conn: &Connection, operation: &str, target: &str, err: &AppError) {
    if matches!(err, AppError::Db(_) | AppError::DeleteNotApplied(_) | AppError::UpdateNotApplied(_)) {
        messages::error(format!("{operation} {target}: {err}"));
        let _ = oplog(conn, &format!("{operation}_failed"), target, &err.to_string());
    }
}
