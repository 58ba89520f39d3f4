//! Output sinks for reshaped PFM tables.
//!
//! The reshaper only produces an [`OutputTable`](pfm_model::OutputTable);
//! where it lands is decided here. [`AppendSheetSink`] adds a sheet to the
//! source workbook in place, [`NewFileSink`] writes a separate xlsx, csv or
//! json file.

pub mod delimited;
pub mod error;
pub mod sink;
pub mod update;
pub mod xlsx;

pub use delimited::{to_json_string, write_csv, write_json};
pub use error::{OutputError, Result};
pub use sink::{AppendSheetSink, CONVERTED_SUFFIX, NewFileSink, TableSink, default_output_path};
