//! Workbook reading through calamine.

use std::path::Path;

use calamine::{Data, DataType, Range, Reader, open_workbook_auto};
use chrono::{Datelike, NaiveDateTime, NaiveTime};
use tracing::debug;

use pfm_model::CellValue;

use crate::error::{IngestError, Result};
use crate::workbook::SourceSheet;

/// Read every worksheet in the workbook, in workbook order.
pub fn read_excel_sheets(path: &Path) -> Result<Vec<SourceSheet>> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|source| IngestError::SheetRead {
                sheet: name.clone(),
                path: path.to_path_buf(),
                source,
            })?;
        let cells = range_to_cells(&range);
        debug!(sheet = %name, rows = cells.len(), "read worksheet");
        sheets.push(SourceSheet::new(name, cells));
    }
    Ok(sheets)
}

/// Convert a used range into ragged rows anchored at cell A1.
///
/// calamine ranges start at the first used cell, so leading rows and columns
/// are padded back in. Trailing empty cells are dropped from every row.
pub fn range_to_cells(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); start_row as usize];
    for source_row in range.rows() {
        let mut row: Vec<CellValue> = vec![CellValue::Null; start_col as usize];
        row.extend(source_row.iter().map(data_to_cell));
        while row.last().is_some_and(CellValue::is_null) {
            row.pop();
        }
        rows.push(row);
    }
    rows
}

/// Map a calamine cell onto the reshaper's value type.
pub fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) => CellValue::Number(*value),
        Data::String(value) => CellValue::Text(value.clone()),
        Data::Bool(value) => CellValue::text(if *value { "TRUE" } else { "FALSE" }),
        Data::DateTime(value) if value.is_duration() => CellValue::Number(value.as_f64()),
        Data::DateTime(_) | Data::DateTimeIso(_) => match data.as_datetime() {
            Some(datetime) => CellValue::Text(format_datetime(datetime)),
            None => CellValue::Text(data.to_string()),
        },
        other => CellValue::Text(other.to_string()),
    }
}

/// Render a date cell as text.
///
/// Month sub-headers are often real dates formatted as `mmm yy`; the first
/// day of a month renders as `"Jan 26"` so the label still parses. Other
/// dates use ISO form, with the time only when it is not midnight.
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    if datetime.time() != NaiveTime::MIN {
        return datetime.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if datetime.day() == 1 {
        datetime.format("%b %y").to_string()
    } else {
        datetime.format("%Y-%m-%d").to_string()
    }
}
