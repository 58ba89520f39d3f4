//! Row expansion: one output row per project per month.

use tracing::{debug, trace};

use pfm_model::{ConversionStats, IDENTITY_COLUMNS, OutputRow, ProjectRecord};

use crate::coerce::coerce_at;
use crate::derive::{parse_month, split_identifier};
use crate::header::HeaderLayout;

/// Output rows together with the counters gathered while building them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion {
    pub rows: Vec<OutputRow>,
    pub stats: ConversionStats,
}

/// Read the identity fields of a data row.
///
/// Returns `None` for rows with fewer than three cells or a blank identifier.
pub fn project_record(row: &[String]) -> Option<ProjectRecord> {
    if row.len() < IDENTITY_COLUMNS {
        return None;
    }
    let identifier = row[0].trim();
    if identifier.is_empty() {
        return None;
    }
    let (number, name) = split_identifier(identifier);
    Some(ProjectRecord {
        identifier: identifier.to_string(),
        number,
        name,
        client: row[1].clone(),
        project_manager: row[2].clone(),
    })
}

/// Expand data rows across every labelled month.
///
/// Metric values for month block `m` are read from column
/// `3 + metric_offset + m` of the data row. Output is ordered by project,
/// then by month.
pub fn expand_rows(data_rows: &[Vec<String>], layout: &HeaderLayout) -> Expansion {
    let months: Vec<(usize, &str, String)> = layout
        .months
        .iter()
        .map(|month| (month.index, month.label.as_str(), parse_month(&month.label)))
        .collect();

    let mut stats = ConversionStats {
        months: months.len(),
        metrics: layout.catalog.len(),
        ..ConversionStats::default()
    };
    for (_, label, date) in &months {
        if date.is_empty() {
            stats.unparsed_month_labels += 1;
            debug!(label = %label, "month label did not parse; PFM date left blank");
        }
    }

    let mut rows = Vec::with_capacity(data_rows.len() * months.len());
    for (row_idx, data_row) in data_rows.iter().enumerate() {
        let Some(project) = project_record(data_row) else {
            stats.skipped_rows += 1;
            trace!(row = row_idx, cells = data_row.len(), "skipping data row");
            continue;
        };
        stats.projects += 1;

        for (month_idx, label, date) in &months {
            let metrics = layout
                .catalog
                .iter()
                .map(|metric| {
                    let value = coerce_at(data_row, IDENTITY_COLUMNS + metric.offset + month_idx);
                    if value.is_null() {
                        stats.missing_cells += 1;
                    }
                    value
                })
                .collect();
            rows.push(OutputRow {
                identifier: project.identifier.clone(),
                project_number: project.number.clone(),
                project_name: project.name.clone(),
                category: String::new(),
                client: project.client.clone(),
                project_manager: project.project_manager.clone(),
                date: String::new(),
                date_order: month_idx + 1,
                pfm_date: date.clone(),
                month_year: (*label).to_string(),
                metrics,
            });
        }
    }
    stats.rows_written = rows.len();
    Expansion { rows, stats }
}
