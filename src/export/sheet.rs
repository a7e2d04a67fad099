//! XLSX export with header styling and auto-sized columns.

use crate::errors::{AppError, AppResult};
use crate::export::model::{headers, record_to_row};
use crate::export::notify_export_success;
use crate::service::ExportResponse;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub(crate) fn export_xlsx(data: &ExportResponse, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let cols = headers();
    for (col, header) in cols.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }
    worksheet.set_freeze_panes(1, 0).ok();

    let mut widths: Vec<usize> = cols.iter().map(|h| h.width()).collect();
    for (i, rec) in data.records.iter().enumerate() {
        let row = record_to_row(rec);
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.width());
            worksheet
                .write((i + 1) as u32, col as u16, cell.as_str())
                .map_err(to_export_error)?;
        }
    }

    for (col, w) in widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, (*w + 2) as f64)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;
    notify_export_success("XLSX", path);
    Ok(())
}

fn to_export_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Export(e.to_string())
}
