//! Raw sheet contents as supplied by a spreadsheet reader.

/// Number of leading identity columns (identifier, client, project manager).
pub const IDENTITY_COLUMNS: usize = 3;

/// A single source sheet: ordered rows of string cells.
///
/// Rows may be ragged. Row 0 holds the metric headers, row 1 the month
/// sub-headers, and every following row is one project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Build a sheet from string slices, mostly useful in tests.
    pub fn from_rows<R, C>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            name: name.into(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
