//! Two-row header analysis: metric discovery and month labels.

use tracing::debug;

use pfm_model::IDENTITY_COLUMNS;

/// A distinct metric and the offset of its first column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricColumn {
    pub name: String,
    /// Position within the header row after the identity columns are stripped.
    pub offset: usize,
}

/// Distinct metric names in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricCatalog {
    metrics: Vec<MetricColumn>,
}

impl MetricCatalog {
    /// Scan trimmed metric names left to right, keeping the first occurrence.
    pub fn from_header(cells: &[String]) -> Self {
        let mut metrics: Vec<MetricColumn> = Vec::new();
        for (offset, cell) in cells.iter().enumerate() {
            let name = cell.trim();
            if name.is_empty() || metrics.iter().any(|metric| metric.name == name) {
                continue;
            }
            metrics.push(MetricColumn {
                name: name.to_string(),
                offset,
            });
        }
        Self { metrics }
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricColumn> {
        self.metrics.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(|metric| metric.name.as_str())
    }

    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.metrics
            .iter()
            .find(|metric| metric.name == name)
            .map(|metric| metric.offset)
    }
}

/// A non-empty month label and the month block it labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    /// Position in the stripped sub-header; blank labels still consume one.
    pub index: usize,
    pub label: String,
}

/// Month labels taken from the sub-header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthList {
    months: Vec<MonthLabel>,
}

impl MonthList {
    pub fn from_sub_header(cells: &[String]) -> Self {
        let months = cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                let label = cell.trim();
                (!label.is_empty()).then(|| MonthLabel {
                    index,
                    label: label.to_string(),
                })
            })
            .collect();
        Self { months }
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthLabel> {
        self.months.iter()
    }
}

/// Result of analysing both header rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLayout {
    pub catalog: MetricCatalog,
    pub months: MonthList,
}

/// Drops the leading identity columns; short rows yield an empty slice.
pub fn strip_identity(row: &[String]) -> &[String] {
    row.get(IDENTITY_COLUMNS..).unwrap_or(&[])
}

/// Build the metric catalog and month list from the two header rows.
///
/// Both rows must already have their identity columns stripped. Metric
/// names are assumed to repeat in the same order in every month block;
/// this is not checked.
pub fn analyze_headers(metric_row: &[String], month_row: &[String]) -> HeaderLayout {
    let catalog = MetricCatalog::from_header(metric_row);
    let months = MonthList::from_sub_header(month_row);
    debug!(
        metrics = catalog.len(),
        months = months.len(),
        "analysed header rows"
    );
    HeaderLayout { catalog, months }
}
