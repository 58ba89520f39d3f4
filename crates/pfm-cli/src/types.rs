use std::path::PathBuf;

use pfm_model::{ConversionStats, OutputMode};

/// Outcome of converting one input file.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub sheet: String,
    pub mode: OutputMode,
    /// File now holding the table; `None` on a dry run.
    pub destination: Option<PathBuf>,
    pub metrics: Vec<String>,
    pub stats: ConversionStats,
}

/// One sheet of an input workbook, for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub name: String,
    pub rows: usize,
    pub has_data: bool,
}
