//! Filter predicate builder.
//!
//! Turns the `{status, from, to}` request parameters into an ordered clause
//! list plus matching bind values. The same predicate instance is reused
//! verbatim by the list query, the count queries, the stats queries and the
//! export query, so the three endpoints can never disagree on which rows are
//! "in" the current filter.

use crate::errors::AppResult;
use crate::utils::date;
use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;

/// A single bind parameter. Keeping clause text and bind value in one
/// structure guarantees the two lists cannot drift out of alignment.
#[derive(Debug, Clone)]
pub enum BindValue {
    Int(i64),
    Text(String),
}

impl ToSql for BindValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            BindValue::Int(v) => v.to_sql(),
            BindValue::Text(v) => v.to_sql(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<String>,
    binds: Vec<BindValue>,
}

impl Filter {
    /// The empty predicate: matches every record.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a predicate from raw request parameters.
    ///
    /// - `status`: `"done"` / `"pending"` add a completion clause; any other
    ///   value (including absent) adds none.
    /// - `from` / `to`: strict `YYYY-MM-DD`; an unparseable date fails the
    ///   whole request with `InvalidDate` rather than silently dropping the
    ///   filter. `from` binds the start of day, `to` the end of day.
    ///
    /// `from > to` is not rejected: it is a valid predicate that simply
    /// matches nothing. Clause order is fixed: status, from, to.
    pub fn build(
        status: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> AppResult<Self> {
        let mut f = Filter::default();
        match status {
            Some("done") => f.push("done = ?", BindValue::Int(1)),
            Some("pending") => f.push("done = ?", BindValue::Int(0)),
            _ => {}
        }
        if let Some(raw) = from {
            let day = date::parse_day(raw)?;
            f.push("submitted_at >= ?", BindValue::Text(date::day_start(day)));
        }
        if let Some(raw) = to {
            let day = date::parse_day(raw)?;
            f.push("submitted_at <= ?", BindValue::Text(date::day_end(day)));
        }
        Ok(f)
    }

    fn push(&mut self, clause: &str, bind: BindValue) {
        self.clauses.push(clause.to_string());
        self.binds.push(bind);
    }

    /// Copy of this predicate with an extra completion clause ANDed on.
    /// Deliberately never merged with an existing status clause: if the base
    /// already pins `done`, a conflicting clause must yield zero rows.
    pub fn and_done(&self, done: bool) -> Self {
        let mut f = self.clone();
        f.push("done = ?", BindValue::Int(done as i64));
        f
    }

    /// ` WHERE a AND b ...`, or the empty string for the empty predicate.
    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Bind values in clause order, ready for `query_map`/`execute`.
    pub fn params(&self) -> Vec<&dyn ToSql> {
        self.binds.iter().map(|b| b as &dyn ToSql).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
