//! CSV files read as a single headerless sheet.

use std::path::Path;

use csv::ReaderBuilder;

use pfm_model::CellValue;

use crate::error::{IngestError, Result};
use crate::workbook::SourceSheet;

const BOM: char = '\u{feff}';

/// Read a CSV file verbatim; the sheet is named after the file stem.
///
/// Both header rows are data here, so the reader is headerless and
/// flexible about row length. Cells keep their original text; only a
/// byte-order mark at the very start of the file is removed.
pub fn read_csv_sheet(path: &Path) -> Result<SourceSheet> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let mut cells = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let mut row: Vec<CellValue> = record
            .iter()
            .enumerate()
            .map(|(col_idx, value)| match (row_idx, col_idx) {
                (0, 0) => CellValue::text(value.trim_start_matches(BOM)),
                _ => CellValue::text(value),
            })
            .collect();
        while row
            .last()
            .and_then(CellValue::as_str)
            .is_some_and(str::is_empty)
        {
            row.pop();
        }
        cells.push(row);
    }
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Sheet1")
        .to_string();
    Ok(SourceSheet::new(name, cells))
}
