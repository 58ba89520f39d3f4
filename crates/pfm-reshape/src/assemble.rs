//! Final table assembly.

use pfm_model::{FIXED_HEADERS, OutputRow, OutputTable};

use crate::header::MetricCatalog;

/// The fixed identity/derived names followed by metric names in catalog order.
pub fn header_columns(catalog: &MetricCatalog) -> Vec<String> {
    FIXED_HEADERS
        .iter()
        .map(ToString::to_string)
        .chain(catalog.names().map(str::to_string))
        .collect()
}

pub fn assemble_table(catalog: &MetricCatalog, rows: Vec<OutputRow>) -> OutputTable {
    OutputTable {
        columns: header_columns(catalog),
        rows,
    }
}
