//! Spreadsheet reading for the PFM report reshaper.
//!
//! Supplies the reshaper with [`RawSheet`](pfm_model::RawSheet) values and
//! keeps typed cells for sinks that rewrite the source workbook.

pub mod csv_sheet;
pub mod error;
pub mod excel;
pub mod workbook;

pub use csv_sheet::read_csv_sheet;
pub use error::{IngestError, Result};
pub use excel::{data_to_cell, range_to_cells, read_excel_sheets};
pub use workbook::{SourceFormat, SourceSheet, SourceWorkbook, read_workbook};
