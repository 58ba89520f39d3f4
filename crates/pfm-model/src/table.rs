//! Long-format output table.

use serde::Serialize;

use crate::cell::CellValue;

/// Identity and derived column names that precede the metric columns.
pub const FIXED_HEADERS: [&str; 10] = [
    "Project Number - Name",
    "Project Num",
    "Project Name",
    "Category",
    "Client",
    "Project Manager",
    "Date",
    "Date Order",
    "PFM Date",
    "Month-Year",
];

/// Project-level fields derived from one data row.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    /// Combined "number - name" identifier, trimmed.
    pub identifier: String,
    /// Leading part of the identifier; numeric when it parses as one.
    pub number: CellValue,
    /// Display name following the separator.
    pub name: String,
    pub client: String,
    pub project_manager: String,
}

/// One project for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub identifier: String,
    pub project_number: CellValue,
    pub project_name: String,
    /// Always blank; the source carries no category.
    pub category: String,
    pub client: String,
    pub project_manager: String,
    /// Always blank; kept for the downstream template.
    pub date: String,
    /// 1-based month block position.
    pub date_order: usize,
    /// `YYYY-MM-01`, or blank when the month label did not parse.
    pub pfm_date: String,
    pub month_year: String,
    /// One value per metric, in catalog order.
    pub metrics: Vec<CellValue>,
}

impl OutputRow {
    /// Flatten into cells in header order.
    pub fn cells(&self) -> Vec<CellValue> {
        let mut cells = Vec::with_capacity(FIXED_HEADERS.len() + self.metrics.len());
        cells.push(CellValue::text(self.identifier.as_str()));
        cells.push(self.project_number.clone());
        cells.push(CellValue::text(self.project_name.as_str()));
        cells.push(CellValue::text(self.category.as_str()));
        cells.push(CellValue::text(self.client.as_str()));
        cells.push(CellValue::text(self.project_manager.as_str()));
        cells.push(CellValue::text(self.date.as_str()));
        cells.push(CellValue::from(self.date_order));
        cells.push(CellValue::text(self.pfm_date.as_str()));
        cells.push(CellValue::text(self.month_year.as_str()));
        cells.extend(self.metrics.iter().cloned());
        cells
    }
}

/// Header plus one row per (project, month) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputTable {
    pub columns: Vec<String>,
    pub rows: Vec<OutputRow>,
}

impl OutputTable {
    /// Metric column names, in catalog order.
    pub fn metric_names(&self) -> &[String] {
        self.columns.get(FIXED_HEADERS.len()..).unwrap_or(&[])
    }

    pub fn header_row(&self) -> Vec<CellValue> {
        self.columns
            .iter()
            .map(|name| CellValue::text(name.as_str()))
            .collect()
    }

    /// The full table with the header as row 0.
    pub fn to_rows(&self) -> Vec<Vec<CellValue>> {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(self.header_row());
        rows.extend(self.rows.iter().map(OutputRow::cells));
        rows
    }

    /// Number of data rows, excluding the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Counters describing how a conversion treated its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Data rows that produced output.
    pub projects: usize,
    /// Non-empty month labels in the sub-header.
    pub months: usize,
    /// Distinct metric names.
    pub metrics: usize,
    /// Output rows excluding the header.
    pub rows_written: usize,
    /// Data rows skipped for being short or lacking an identifier.
    pub skipped_rows: usize,
    /// Month labels that did not yield a date.
    pub unparsed_month_labels: usize,
    /// Metric lookups that fell past the end of a row.
    pub missing_cells: usize,
}
