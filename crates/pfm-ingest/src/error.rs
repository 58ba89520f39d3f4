//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a source workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File extension is not a supported spreadsheet format.
    #[error("unsupported input format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// Failed to open the workbook container.
    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Failed to read a worksheet's cells.
    #[error("failed to read sheet '{sheet}' in {path}: {source}")]
    SheetRead {
        sheet: String,
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Failed to parse a CSV file.
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Sheet Selection Errors ===
    /// Requested sheet is absent from the workbook.
    #[error("sheet '{sheet}' not found (available: {})", available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    /// No sheet was named and none holds any data.
    #[error("no sheet with data found in {path}")]
    NoData { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/report.xlsx"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/report.xlsx");
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let err = IngestError::SheetNotFound {
            sheet: "Provided Data".to_string(),
            available: vec!["Sheet1".to_string(), "Summary".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "sheet 'Provided Data' not found (available: Sheet1, Summary)"
        );
    }
}
