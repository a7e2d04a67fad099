//! Count aggregation for a filter predicate.

use crate::db::queries::count_filtered;
use crate::errors::AppResult;
use crate::query::filter::Filter;
use rusqlite::Connection;
use serde::Serialize;

/// The `{total, completed, pending}` triple for one predicate.
/// `completed + pending == total` always holds since `done` is a non-null
/// boolean.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
}

/// Run the three count queries for a predicate.
///
/// `completed`/`pending` AND an extra `done` clause onto the base predicate
/// instead of subtracting from `total`: if the base already pins `done`, the
/// conflicting bucket legitimately counts zero. The three statements are not
/// wrapped in a transaction; a write landing between them can skew one count
/// momentarily (accepted eventual consistency).
pub fn stats_for(conn: &Connection, filter: &Filter) -> AppResult<Stats> {
    let total = count_filtered(conn, filter)?;
    let completed = count_filtered(conn, &filter.and_done(true))?;
    let pending = count_filtered(conn, &filter.and_done(false))?;
    Ok(Stats {
        total,
        completed,
        pending,
    })
}
