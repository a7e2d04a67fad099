//! Unified application error type.
//! All modules (db, query, service, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Validation errors (rejected before any store call)
    // ---------------------------
    #[error("Invalid date format: '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid application id: '{0}'")]
    InvalidId(String),

    #[error("Application text must not be empty")]
    EmptyApplicationText,

    #[error("Invalid search field: '{0}'")]
    InvalidSearchField(String),

    // ---------------------------
    // Store outcomes
    // ---------------------------
    #[error("Application {0} not found")]
    NotFound(i64),

    #[error("Delete of application {0} affected zero rows")]
    DeleteNotApplied(i64),

    #[error("Update of application {0} affected zero rows")]
    UpdateNotApplied(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// HTTP-equivalent status code used at the endpoint boundary.
    /// Validation failures map to 400, missing targets to 404, everything
    /// that indicates an internal problem to 500.
    pub fn status(&self) -> u16 {
        match self {
            AppError::InvalidDate(_)
            | AppError::InvalidId(_)
            | AppError::EmptyApplicationText
            | AppError::InvalidSearchField(_) => 400,
            AppError::NotFound(_) => 404,
            _ => 500,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
