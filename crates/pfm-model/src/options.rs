//! Conversion options supplied by the command line.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Sheet read when no explicit sheet name is given.
pub const DEFAULT_SOURCE_SHEET: &str = "Provided Data";

/// Sheet name used for the reshaped table.
pub const DEFAULT_OUTPUT_SHEET: &str = "Converted Data";

/// Where the reshaped table is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// Add a sheet to the source workbook and save it in place.
    #[default]
    NewSheet,
    /// Write a separate file next to the source.
    NewFile,
}

/// Options controlling a single conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Name of the sheet holding the wide report.
    ///
    /// `None` picks [`DEFAULT_SOURCE_SHEET`], falling back to the first sheet
    /// with data.
    pub source_sheet: Option<String>,
    /// Name of the sheet the long table is written to.
    pub output_sheet: String,
    /// Destination kind.
    pub mode: OutputMode,
    /// Explicit destination file for [`OutputMode::NewFile`].
    pub output_file: Option<PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            source_sheet: None,
            output_sheet: DEFAULT_OUTPUT_SHEET.to_string(),
            mode: OutputMode::default(),
            output_file: None,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_sheet(mut self, sheet: Option<String>) -> Self {
        self.source_sheet = sheet;
        self
    }

    pub fn with_output_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.output_sheet = sheet.into();
        self
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_output_file(mut self, path: Option<PathBuf>) -> Self {
        self.output_file = path;
        self
    }
}
