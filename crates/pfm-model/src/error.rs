use thiserror::Error;

/// Structural failures that abort a conversion.
///
/// Field-level anomalies (bad month labels, short rows) never surface here;
/// they resolve to fallback cell values instead.
#[derive(Debug, Error)]
pub enum ReshapeError {
    /// The sheet cannot hold a header, a sub-header and at least one data row.
    #[error("'{sheet}' sheet has insufficient data (needs at least 3 rows, found {rows})")]
    SourceTooSmall { sheet: String, rows: usize },
}

pub type Result<T> = std::result::Result<T, ReshapeError>;
