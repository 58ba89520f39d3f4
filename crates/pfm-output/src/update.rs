//! In-place workbook updates through umya-spreadsheet.
//!
//! The workbook is loaded whole, so formulas, styles and macros on the other
//! sheets are written back untouched. Only the output sheet is replaced.

use std::path::Path;

use tracing::debug;
use umya_spreadsheet::Worksheet;

use pfm_model::CellValue;

use crate::error::{OutputError, Result};

/// Replace (or create) `sheet_name` in the workbook at `path` with `rows`.
///
/// Sheet names compare case-insensitively, as they do in spreadsheet apps.
pub fn replace_sheet(path: &Path, sheet_name: &str, rows: &[Vec<CellValue>]) -> Result<()> {
    let update_error = |source| OutputError::Update {
        path: path.to_path_buf(),
        source,
    };
    let sheet_error = |reason: &str| OutputError::SheetChange {
        path: path.to_path_buf(),
        sheet: sheet_name.to_string(),
        reason: reason.to_string(),
    };

    let mut book = umya_spreadsheet::reader::xlsx::read(path).map_err(update_error)?;
    let existing = book
        .get_sheet_collection()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .find(|name| name.eq_ignore_ascii_case(sheet_name));
    if let Some(existing) = existing {
        debug!(sheet = %existing, "replacing existing output sheet");
        book.remove_sheet_by_name(&existing).map_err(sheet_error)?;
    }
    let worksheet = book.new_sheet(sheet_name).map_err(sheet_error)?;
    fill_worksheet(worksheet, rows);
    umya_spreadsheet::writer::xlsx::write(&book, path).map_err(update_error)
}

/// Write rows starting at A1. Nulls and empty strings leave the cell blank.
pub fn fill_worksheet(worksheet: &mut Worksheet, rows: &[Vec<CellValue>]) {
    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = row_idx as u32 + 1;
        for (col_idx, cell) in row.iter().enumerate() {
            let coordinate = (col_idx as u32 + 1, row_num);
            match cell {
                CellValue::Text(value) if value.is_empty() => {}
                CellValue::Text(value) => {
                    worksheet
                        .get_cell_mut(coordinate)
                        .set_value_string(value.as_str());
                }
                CellValue::Number(value) => {
                    worksheet.get_cell_mut(coordinate).set_value_number(*value);
                }
                CellValue::Null => {}
            }
        }
    }
}
