//! Date and timestamp parsing for the application store.
//! Submission timestamps are persisted as `YYYY-MM-DD HH:MM:SS` text so that
//! lexicographic comparison in SQLite matches chronological order.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

pub const DAY_FMT: &str = "%Y-%m-%d";
pub const STAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local timestamp, truncated to whole seconds so the stored text
/// round-trips exactly.
pub fn now_stamp() -> NaiveDateTime {
    Local::now().naive_local().with_nanosecond(0).unwrap()
}

/// Parse a strict calendar date (`YYYY-MM-DD`).
pub fn parse_day(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DAY_FMT)
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse a timestamp, accepting either `YYYY-MM-DD HH:MM:SS` or a bare
/// calendar date (interpreted as midnight).
pub fn parse_stamp(s: &str) -> AppResult<NaiveDateTime> {
    let t = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(t, STAMP_FMT) {
        return Ok(dt);
    }
    let day = parse_day(t)?;
    Ok(day.and_hms_opt(0, 0, 0).unwrap())
}

pub fn format_stamp(dt: &NaiveDateTime) -> String {
    dt.format(STAMP_FMT).to_string()
}

/// Inclusive lower bound for a `from` date filter.
pub fn day_start(d: NaiveDate) -> String {
    format!("{} 00:00:00", d.format(DAY_FMT))
}

/// Inclusive upper bound for a `to` date filter.
pub fn day_end(d: NaiveDate) -> String {
    format!("{} 23:59:59", d.format(DAY_FMT))
}
