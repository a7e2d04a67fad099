//! Record store for the `applications` table.
//!
//! All read paths accept the same [`Filter`] predicate, so listing, counting
//! and exporting always agree on which rows match. Ordering is total:
//! submission timestamp descending, ties broken by id descending.

use crate::errors::{AppError, AppResult};
use crate::models::application::{Application, ApplicationDraft};
use crate::query::filter::Filter;
use crate::utils::date;
use rusqlite::{Connection, OptionalExtension, Row, params};

const COLS: &str =
    "id, name, cabinet, phone, application, process, executor, submitted_at, started_at, finished_at, done";

pub fn map_row(row: &Row) -> rusqlite::Result<Application> {
    let submitted: String = row.get("submitted_at")?;
    let started: Option<String> = row.get("started_at")?;
    let finished: Option<String> = row.get("finished_at")?;

    Ok(Application {
        id: row.get("id")?,
        name: row.get("name")?,
        cabinet: row.get("cabinet")?,
        phone: row.get("phone")?,
        application_text: row.get("application")?,
        process: row.get("process")?,
        executor: row.get("executor")?,
        submitted_at: parse_stored_stamp(&submitted)?,
        started_at: started.as_deref().map(parse_stored_stamp).transpose()?,
        finished_at: finished.as_deref().map(parse_stored_stamp).transpose()?,
        done: row.get::<_, i64>("done")? != 0,
    })
}

fn parse_stored_stamp(s: &str) -> rusqlite::Result<chrono::NaiveDateTime> {
    date::parse_stamp(s).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

/// Insert a new application and return the assigned id.
pub fn insert_application(conn: &Connection, rec: &ApplicationDraft) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO applications
         (name, cabinet, phone, application, process, executor, submitted_at, started_at, finished_at, done)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            rec.name,
            rec.cabinet,
            rec.phone,
            rec.application_text,
            rec.process,
            rec.executor,
            date::format_stamp(&rec.submitted_at),
            rec.started_at.as_ref().map(date::format_stamp),
            rec.finished_at.as_ref().map(date::format_stamp),
            rec.done as i64,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_application(conn: &Connection, id: i64) -> AppResult<Option<Application>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {COLS} FROM applications WHERE id = ?1"
    ))?;
    match stmt.query_row([id], map_row) {
        Ok(rec) => Ok(Some(rec)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM applications WHERE id = ?1", [id], |_| Ok(()))
        .optional()?
        .is_some();
    Ok(found)
}

/// Full-field replacement of an existing record. The target is checked
/// explicitly first; zero affected rows after a successful check means the
/// record vanished between the two statements and surfaces as
/// `UpdateNotApplied`, not as a silent success.
pub fn update_application(conn: &Connection, id: i64, rec: &ApplicationDraft) -> AppResult<()> {
    if !exists(conn, id)? {
        return Err(AppError::NotFound(id));
    }
    let changed = conn.execute(
        "UPDATE applications SET
            name = ?1, cabinet = ?2, phone = ?3, application = ?4,
            process = ?5, executor = ?6, submitted_at = ?7,
            started_at = ?8, finished_at = ?9, done = ?10
         WHERE id = ?11",
        params![
            rec.name,
            rec.cabinet,
            rec.phone,
            rec.application_text,
            rec.process,
            rec.executor,
            date::format_stamp(&rec.submitted_at),
            rec.started_at.as_ref().map(date::format_stamp),
            rec.finished_at.as_ref().map(date::format_stamp),
            rec.done as i64,
            id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::UpdateNotApplied(id));
    }
    Ok(())
}

/// Delete by id. `NotFound` if the record never existed, `DeleteNotApplied`
/// if it existed at check time but the DELETE removed nothing (lost a race
/// with a concurrent delete).
pub fn delete_application(conn: &Connection, id: i64) -> AppResult<()> {
    if !exists(conn, id)? {
        return Err(AppError::NotFound(id));
    }
    let removed = conn.execute("DELETE FROM applications WHERE id = ?1", [id])?;
    if removed == 0 {
        return Err(AppError::DeleteNotApplied(id));
    }
    Ok(())
}

/// One page of records under the predicate, newest submission first.
pub fn list_filtered(
    conn: &Connection,
    filter: &Filter,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Application>> {
    let sql = format!(
        "SELECT {COLS} FROM applications{} ORDER BY submitted_at DESC, id DESC LIMIT ? OFFSET ?",
        filter.where_sql()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let mut binds = filter.params();
    binds.push(&limit);
    binds.push(&offset);
    let rows = stmt.query_map(binds.as_slice(), map_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Every record under the predicate, same ordering as [`list_filtered`].
/// Used by the export path, which skips pagination.
pub fn list_all_filtered(conn: &Connection, filter: &Filter) -> AppResult<Vec<Application>> {
    let sql = format!(
        "SELECT {COLS} FROM applications{} ORDER BY submitted_at DESC, id DESC",
        filter.where_sql()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(filter.params().as_slice(), map_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

pub fn count_filtered(conn: &Connection, filter: &Filter) -> AppResult<i64> {
    let sql = format!(
        "SELECT COUNT(*) FROM applications{}",
        filter.where_sql()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let n: i64 = stmt.query_row(filter.params().as_slice(), |r| r.get(0))?;
    Ok(n)
}
