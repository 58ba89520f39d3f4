//! Error types for writing reshaped tables.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing an output table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Destination extension is not a supported output format.
    #[error("unsupported output format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Only `.xlsx`/`.xlsm` workbooks can receive an additional sheet.
    #[error("cannot add a sheet to {path}: {reason}")]
    AppendUnsupported { path: PathBuf, reason: String },

    /// The output sheet name would overwrite the sheet being converted.
    #[error("output sheet '{sheet}' is the source sheet; choose another --output-sheet")]
    OutputIsSource { sheet: String },

    /// Failed to open or save the workbook being updated in place.
    #[error("failed to update workbook {path}: {source}")]
    Update {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },

    /// The workbook rejected a sheet change.
    #[error("cannot change sheet '{sheet}' in {path}: {reason}")]
    SheetChange {
        path: PathBuf,
        sheet: String,
        reason: String,
    },

    /// Table exceeds worksheet limits.
    #[error("table of {rows} rows x {columns} columns exceeds worksheet limits")]
    TooLarge { rows: usize, columns: usize },

    /// Failed to build or save an xlsx workbook.
    #[error("failed to write workbook {path}: {source}")]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// Failed to write a CSV file.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize JSON.
    #[error("failed to write JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to create or flush an output file.
    #[error("failed to write file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutputError::TooLarge {
            rows: 2_000_000,
            columns: 12,
        };
        assert_eq!(
            err.to_string(),
            "table of 2000000 rows x 12 columns exceeds worksheet limits"
        );
    }

    #[test]
    fn output_is_source_names_the_sheet() {
        let err = OutputError::OutputIsSource {
            sheet: "Provided Data".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "output sheet 'Provided Data' is the source sheet; choose another --output-sheet"
        );
    }
}
