//! Worksheet writing through rust_xlsxwriter.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use pfm_model::CellValue;

use crate::error::{OutputError, Result};

/// Worksheet row limit.
pub const MAX_ROWS: usize = 1_048_576;
/// Worksheet column limit.
pub const MAX_COLUMNS: usize = 16_384;

/// Reject tables that cannot fit on a single worksheet.
pub fn check_dimensions(rows: &[Vec<CellValue>]) -> Result<()> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if rows.len() > MAX_ROWS || columns > MAX_COLUMNS {
        return Err(OutputError::TooLarge {
            rows: rows.len(),
            columns,
        });
    }
    Ok(())
}

/// Write rows starting at A1. Nulls and empty strings leave the cell blank.
///
/// Callers must run [`check_dimensions`] first.
pub fn write_cells(
    worksheet: &mut Worksheet,
    rows: &[Vec<CellValue>],
) -> std::result::Result<(), XlsxError> {
    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = row_idx as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = col_idx as u16;
            match cell {
                CellValue::Text(value) if value.is_empty() => {}
                CellValue::Text(value) => {
                    worksheet.write_string(row_num, col_num, value)?;
                }
                CellValue::Number(value) => {
                    worksheet.write_number(row_num, col_num, *value)?;
                }
                CellValue::Null => {}
            }
        }
    }
    Ok(())
}

/// Add a named worksheet holding `rows`.
pub fn add_sheet(
    workbook: &mut Workbook,
    name: &str,
    rows: &[Vec<CellValue>],
) -> std::result::Result<(), XlsxError> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;
    write_cells(worksheet, rows)
}

/// Save a workbook, mapping failures onto the destination path.
pub fn save(workbook: &mut Workbook, path: &Path) -> Result<()> {
    workbook.save(path).map_err(|source| OutputError::Xlsx {
        path: path.to_path_buf(),
        source,
    })
}
