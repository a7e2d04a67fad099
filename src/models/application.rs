//! Application record: one row per submitted service request.

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One persisted application, as read back from the store.
///
/// Optional free-text fields are kept as plain strings: missing values are
/// stored as `""` on both the create and the update path, so only the two
/// work timestamps are genuinely nullable.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,
    pub name: String,
    pub cabinet: String,
    pub phone: String,
    #[serde(rename = "applicationText")]
    pub application_text: String,
    pub process: String,
    pub executor: String,
    pub submitted_at: NaiveDateTime,
    pub started_at: Option<NaiveDateTime>,
    pub finished_at: Option<NaiveDateTime>,
    pub done: bool,
}

/// Caller-supplied fields for create and full-replacement update.
/// Dates arrive as strings (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`) and are
/// validated before any store call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewApplication {
    pub name: Option<String>,
    pub cabinet: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "applicationText")]
    pub application_text: Option<String>,
    pub process: Option<String>,
    pub executor: Option<String>,
    pub submitted_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub done: bool,
}

/// Fully defaulted and parsed record, ready to be written by the store.
#[derive(Debug, Clone)]
pub struct ApplicationDraft {
    pub name: String,
    pub cabinet: String,
    pub phone: String,
    pub application_text: String,
    pub process: String,
    pub executor: String,
    pub submitted_at: NaiveDateTime,
    pub started_at: Option<NaiveDateTime>,
    pub finished_at: Option<NaiveDateTime>,
    pub done: bool,
}

impl NewApplication {
    /// Apply defaults and parse timestamps: missing text fields become `""`,
    /// a missing submission timestamp becomes "now". Unparseable dates fail
    /// with [`AppError::InvalidDate`] before the store is touched.
    pub fn normalize(&self) -> AppResult<ApplicationDraft> {
        let submitted_at = match &self.submitted_at {
            Some(s) => date::parse_stamp(s)?,
            None => date::now_stamp(),
        };
        Ok(ApplicationDraft {
            name: self.name.clone().unwrap_or_default(),
            cabinet: self.cabinet.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            application_text: self.application_text.clone().unwrap_or_default(),
            process: self.process.clone().unwrap_or_default(),
            executor: self.executor.clone().unwrap_or_default(),
            submitted_at,
            started_at: parse_optional_stamp(self.started_at.as_deref())?,
            finished_at: parse_optional_stamp(self.finished_at.as_deref())?,
            done: self.done,
        })
    }
}

impl Application {
    /// Re-submit this record verbatim, e.g. as the base of an edit.
    pub fn to_new(&self) -> NewApplication {
        NewApplication {
            name: Some(self.name.clone()),
            cabinet: Some(self.cabinet.clone()),
            phone: Some(self.phone.clone()),
            application_text: Some(self.application_text.clone()),
            process: Some(self.process.clone()),
            executor: Some(self.executor.clone()),
            submitted_at: Some(date::format_stamp(&self.submitted_at)),
            started_at: self.started_at.as_ref().map(date::format_stamp),
            finished_at: self.finished_at.as_ref().map(date::format_stamp),
            done: self.done,
        }
    }

    pub fn submitted_day(&self) -> String {
        self.submitted_at.format(date::DAY_FMT).to_string()
    }
}

fn parse_optional_stamp(s: Option<&str>) -> AppResult<Option<NaiveDateTime>> {
    match s {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => date::parse_stamp(raw).map(Some),
    }
}

/// Parse an application id received as raw text (CLI argument or URL path
/// segment). A non-integer id is a 400-class validation error.
pub fn parse_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}
