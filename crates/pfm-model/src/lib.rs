//! Shared data model for the PFM report reshaper.

pub mod cell;
pub mod error;
pub mod options;
pub mod sheet;
pub mod table;

pub use cell::CellValue;
pub use error::{ReshapeError, Result};
pub use options::{ConvertOptions, DEFAULT_OUTPUT_SHEET, DEFAULT_SOURCE_SHEET, OutputMode};
pub use sheet::{IDENTITY_COLUMNS, RawSheet};
pub use table::{ConversionStats, FIXED_HEADERS, OutputRow, OutputTable, ProjectRecord};
