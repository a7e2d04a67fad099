//! High-level export flow: build the filter, pull the full filtered set
//! through the same service path the list endpoint uses, and hand the data
//! to the requested writer.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::sheet::export_xlsx;
use crate::export::writers::{export_csv, export_json};
use crate::service::{self, FilterQuery};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every application matching `filter` to `file`.
    /// The output path must be absolute.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        filter: &FilterQuery,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let data = service::export_applications(&pool.conn, filter)?;

        if data.records.is_empty() {
            warning("No applications match the selected filter; nothing exported.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&data, path),
            ExportFormat::Json => export_json(&data, path),
            ExportFormat::Xlsx => export_xlsx(&data, path),
        }
    }
}
