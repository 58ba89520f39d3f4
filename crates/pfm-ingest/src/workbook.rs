//! In-memory view of a source workbook.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use pfm_model::{CellValue, DEFAULT_SOURCE_SHEET, RawSheet};

use crate::error::{IngestError, Result};
use crate::{csv_sheet, excel};

/// Container format of the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Office Open XML workbook (`.xlsx`, `.xlsm`); the formats that can take an added sheet.
    OpenXml,
    /// Other workbook formats readable by calamine (`.xls`, `.xlsb`, `.ods`).
    OtherWorkbook,
    /// A single delimited sheet.
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" => Ok(Self::OpenXml),
            "xls" | "xlsb" | "ods" => Ok(Self::OtherWorkbook),
            "csv" => Ok(Self::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// One worksheet with typed cells; rows are ragged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceSheet {
    pub name: String,
    pub cells: Vec<Vec<CellValue>>,
}

impl SourceSheet {
    pub fn new(name: impl Into<String>, cells: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn has_data(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| !cell.is_null() && !cell.to_string().trim().is_empty())
    }

    /// Stringify cells the way a spreadsheet shows them; empty cells become `""`.
    pub fn to_raw_sheet(&self) -> RawSheet {
        let rows = self
            .cells
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        RawSheet::new(self.name.clone(), rows)
    }
}

/// All sheets read from one source file.
#[derive(Debug, Clone)]
pub struct SourceWorkbook {
    pub path: PathBuf,
    pub format: SourceFormat,
    pub sheets: Vec<SourceSheet>,
}

impl SourceWorkbook {
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|sheet| sheet.name.clone()).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&SourceSheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    /// Pick the sheet to convert.
    ///
    /// An explicit name must match exactly. Without one, the default
    /// `"Provided Data"` sheet is used when present, otherwise the first
    /// sheet holding any data.
    pub fn resolve_sheet(&self, requested: Option<&str>) -> Result<&SourceSheet> {
        if let Some(name) = requested {
            return self.sheet(name).ok_or_else(|| IngestError::SheetNotFound {
                sheet: name.to_string(),
                available: self.sheet_names(),
            });
        }
        if let Some(sheet) = self.sheet(DEFAULT_SOURCE_SHEET) {
            return Ok(sheet);
        }
        let fallback = self
            .sheets
            .iter()
            .find(|sheet| sheet.has_data())
            .ok_or_else(|| IngestError::NoData {
                path: self.path.clone(),
            })?;
        debug!(
            sheet = %fallback.name,
            default_sheet = DEFAULT_SOURCE_SHEET,
            "default sheet absent; using first sheet with data"
        );
        Ok(fallback)
    }

    /// Resolve a sheet and stringify it for the reshaper.
    pub fn raw_sheet(&self, requested: Option<&str>) -> Result<RawSheet> {
        self.resolve_sheet(requested).map(SourceSheet::to_raw_sheet)
    }
}

/// Read every sheet of a workbook or CSV file.
///
/// # Errors
///
/// Fails when the file is missing, has an unsupported extension, or
/// cannot be parsed.
pub fn read_workbook(path: &Path) -> Result<SourceWorkbook> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = SourceFormat::from_path(path)?;
    let sheets = match format {
        SourceFormat::OpenXml | SourceFormat::OtherWorkbook => excel::read_excel_sheets(path)?,
        SourceFormat::Csv => vec![csv_sheet::read_csv_sheet(path)?],
    };
    info!(
        path = %path.display(),
        sheets = sheets.len(),
        "read source workbook"
    );
    Ok(SourceWorkbook {
        path: path.to_path_buf(),
        format,
        sheets,
    })
}
