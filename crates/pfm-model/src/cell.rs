//! Heterogeneous cell values produced by the reshaper.

use std::fmt;

use serde::{Serialize, Serializer};

/// Largest integer magnitude an `f64` represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single output cell: text, a number, or an absent value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text kept exactly as it appeared in the source.
    Text(String),
    /// A finite numeric value.
    Number(f64),
    /// No source cell existed at this position.
    Null,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the integer form of a number when it has no fractional part.
    pub fn as_exact_integer(&self) -> Option<i64> {
        let value = self.as_f64()?;
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
            Some(value as i64)
        } else {
            None
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Number(value) => match self.as_exact_integer() {
                Some(integer) => serializer.serialize_i64(integer),
                None => serializer.serialize_f64(*value),
            },
            Self::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_spreadsheet_text() {
        assert_eq!(CellValue::Number(12.0).to_string(), "12");
        assert_eq!(CellValue::Number(42.5).to_string(), "42.5");
        assert_eq!(CellValue::text("abc").to_string(), "abc");
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn exact_integer_only_for_whole_numbers() {
        assert_eq!(CellValue::Number(3.0).as_exact_integer(), Some(3));
        assert_eq!(CellValue::Number(3.5).as_exact_integer(), None);
        assert_eq!(CellValue::text("3").as_exact_integer(), None);
    }
}
