//! Destinations for a reshaped table.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tracing::info;

use pfm_ingest::{SourceFormat, SourceWorkbook};
use pfm_model::{DEFAULT_OUTPUT_SHEET, OutputTable};

use crate::delimited::{write_csv, write_json};
use crate::error::{OutputError, Result};
use crate::update::replace_sheet;
use crate::xlsx::{add_sheet, check_dimensions, save};

/// Suffix appended to the input file stem for separate output files.
pub const CONVERTED_SUFFIX: &str = "_converted";

/// A place the assembled table can be written to.
pub trait TableSink {
    /// Write the table, returning the path of the file that now holds it.
    fn write(&self, table: &OutputTable) -> Result<PathBuf>;
}

/// `<dir>/<stem>_converted.xlsx` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{CONVERTED_SUFFIX}.xlsx"))
}

/// Adds the table as a sheet of the source workbook and saves it in place.
///
/// The rest of the workbook is kept as stored, formulas included. A sheet
/// that already has the output name is replaced, unless it is the sheet the
/// table was converted from.
pub struct AppendSheetSink<'a> {
    source: &'a SourceWorkbook,
    sheet_name: String,
    source_sheet: Option<String>,
}

impl<'a> AppendSheetSink<'a> {
    pub fn new(source: &'a SourceWorkbook) -> Self {
        Self {
            source,
            sheet_name: DEFAULT_OUTPUT_SHEET.to_string(),
            source_sheet: None,
        }
    }

    #[must_use]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Name of the converted sheet, which must never be overwritten.
    #[must_use]
    pub fn with_source_sheet(mut self, name: impl Into<String>) -> Self {
        self.source_sheet = Some(name.into());
        self
    }
}

impl TableSink for AppendSheetSink<'_> {
    fn write(&self, table: &OutputTable) -> Result<PathBuf> {
        let path = &self.source.path;
        if self.source.format != SourceFormat::OpenXml {
            return Err(OutputError::AppendUnsupported {
                path: path.clone(),
                reason: "only .xlsx and .xlsm workbooks can be updated in place; use newfile output"
                    .to_string(),
            });
        }
        if let Some(source_sheet) = &self.source_sheet
            && source_sheet.eq_ignore_ascii_case(&self.sheet_name)
        {
            return Err(OutputError::OutputIsSource {
                sheet: source_sheet.clone(),
            });
        }
        let rows = table.to_rows();
        check_dimensions(&rows)?;
        replace_sheet(path, &self.sheet_name, &rows)?;
        info!(
            path = %path.display(),
            sheet = %self.sheet_name,
            rows = table.len(),
            "added converted sheet to source workbook"
        );
        Ok(path.clone())
    }
}

/// Writes the table to a separate file; the extension picks the format.
pub struct NewFileSink {
    path: PathBuf,
    sheet_name: String,
}

impl NewFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet_name: DEFAULT_OUTPUT_SHEET.to_string(),
        }
    }

    /// Sink writing `<stem>_converted.xlsx` beside `input`.
    pub fn beside(input: &Path) -> Self {
        Self::new(default_output_path(input))
    }

    #[must_use]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSink for NewFileSink {
    fn write(&self, table: &OutputTable) -> Result<PathBuf> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" => {
                let rows = table.to_rows();
                check_dimensions(&rows)?;
                let mut workbook = Workbook::new();
                add_sheet(&mut workbook, &self.sheet_name, &rows).map_err(|source| {
                    OutputError::Xlsx {
                        path: self.path.clone(),
                        source,
                    }
                })?;
                save(&mut workbook, &self.path)?;
            }
            "csv" => write_csv(table, &self.path)?,
            "json" => write_json(table, &self.path)?,
            _ => {
                return Err(OutputError::UnsupportedFormat {
                    path: self.path.clone(),
                    extension,
                });
            }
        }
        info!(
            path = %self.path.display(),
            rows = table.len(),
            "wrote converted table"
        );
        Ok(self.path.clone())
    }
}
