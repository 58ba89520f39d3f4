//! CSV and JSON renderings of an output table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use pfm_model::{CellValue, OutputTable};

use crate::error::{OutputError, Result};

/// Write the header and rows as CSV; nulls become empty fields.
pub fn write_csv(table: &OutputTable, path: &Path) -> Result<()> {
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for row in table.to_rows() {
        writer
            .write_record(row.iter().map(ToString::to_string))
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// One row keyed by column name, serialized in column order.
struct Record<'a> {
    columns: &'a [String],
    cells: Vec<CellValue>,
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(&self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

/// Records keyed by header name, preserving column order.
pub fn to_json_string(table: &OutputTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&records(table))
}

fn records(table: &OutputTable) -> Vec<Record<'_>> {
    table
        .rows
        .iter()
        .map(|row| Record {
            columns: &table.columns,
            cells: row.cells(),
        })
        .collect()
}

/// Write the table as a pretty-printed JSON array of objects.
pub fn write_json(table: &OutputTable, path: &Path) -> Result<()> {
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records(table)).map_err(|source| {
        OutputError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)
}
