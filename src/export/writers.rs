//! CSV and JSON export writers.

use crate::errors::{AppError, AppResult};
use crate::export::model::{headers, record_to_row};
use crate::export::notify_export_success;
use crate::service::ExportResponse;
use csv::Writer;
use std::path::Path;

pub(crate) fn export_csv(data: &ExportResponse, path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(headers())?;
    for rec in &data.records {
        wtr.write_record(record_to_row(rec))?;
    }
    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

pub(crate) fn export_json(data: &ExportResponse, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
