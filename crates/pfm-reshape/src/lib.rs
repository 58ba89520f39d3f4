//! Reshape a wide monthly project report into a long table.
//!
//! The source sheet carries one row per project with metric columns
//! repeated for every month. The result carries one row per project per
//! month with each metric in its own column.
//!
//! # Layout
//!
//! - Row 0: metric names, repeated across month blocks, after 3 identity columns
//! - Row 1: month labels (`"Jan 26"`), starting at column 3
//! - Row 2..: one project per row (identifier, client, project manager, values)

pub mod assemble;
pub mod coerce;
pub mod derive;
pub mod expand;
pub mod header;

use tracing::{debug, info_span};

use pfm_model::{ConversionStats, OutputTable, RawSheet, ReshapeError, Result};

pub use assemble::{assemble_table, header_columns};
pub use coerce::{coerce_at, coerce_cell, parse_number};
pub use derive::{month_number, parse_month, parse_month_date, split_identifier};
pub use expand::{Expansion, expand_rows, project_record};
pub use header::{
    HeaderLayout, MetricCatalog, MetricColumn, MonthLabel, MonthList, analyze_headers,
    strip_identity,
};

/// Minimum rows: metric header, month sub-header, one data row.
pub const MIN_SOURCE_ROWS: usize = 3;

/// A converted table and the counters describing how it was built.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub table: OutputTable,
    pub stats: ConversionStats,
}

/// Convert one wide sheet into the long table.
///
/// # Errors
///
/// Returns [`ReshapeError::SourceTooSmall`] when the sheet has fewer than
/// three rows. All field-level problems fall back to blank, text or null
/// values instead.
pub fn convert_sheet(sheet: &RawSheet) -> Result<Conversion> {
    let span = info_span!("convert_sheet", sheet = %sheet.name);
    let _guard = span.enter();

    if sheet.row_count() < MIN_SOURCE_ROWS {
        return Err(ReshapeError::SourceTooSmall {
            sheet: sheet.name.clone(),
            rows: sheet.row_count(),
        });
    }

    let layout = analyze_headers(strip_identity(&sheet.rows[0]), strip_identity(&sheet.rows[1]));
    let Expansion { rows, stats } = expand_rows(&sheet.rows[2..], &layout);
    let table = assemble_table(&layout.catalog, rows);
    debug!(
        projects = stats.projects,
        months = stats.months,
        metrics = stats.metrics,
        rows = stats.rows_written,
        skipped = stats.skipped_rows,
        "converted sheet"
    );
    Ok(Conversion { table, stats })
}
