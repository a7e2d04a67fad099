//! Output-path checks shared by the export writers.

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Refuse to clobber an existing file unless `force` is given; refuse a
/// target whose parent directory does not exist.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "Output file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(AppError::Export(format!(
            "Output directory does not exist: {}",
            parent.display()
        )));
    }
    Ok(())
}
