//! Fields derived from the identifier and month label.

use chrono::{Datelike, NaiveDate};

use pfm_model::CellValue;

use crate::coerce::parse_number;

/// Separator between project number and project name.
pub const IDENTIFIER_SEPARATOR: &str = " - ";

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Split `"123456 - Acme Corp"` into its project number and display name.
///
/// The number is numeric when the leading part parses fully, otherwise the
/// trimmed text. Without a separator the whole input is the display name.
pub fn split_identifier(name: &str) -> (CellValue, String) {
    let mut parts = name.split(IDENTIFIER_SEPARATOR);
    let head = parts.next().unwrap_or(name).trim();
    let number = match parse_number(head) {
        Some(value) => CellValue::Number(value),
        None => CellValue::text(head),
    };
    let display = match parts.next() {
        Some(second) => second.trim().to_string(),
        None => name.to_string(),
    };
    (number, display)
}

/// Month number (1-12) for a case-sensitive three-letter abbreviation.
pub fn month_number(abbreviation: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|candidate| *candidate == abbreviation)
        .map(|idx| idx as u32 + 1)
}

/// Parse `"Jan 26"` into `"2026-01-01"`.
///
/// Two-digit years fall in the 2000s. Anything unexpected yields an empty
/// string so the date cell stays blank, including years chrono cannot
/// represent. Years past 9999 print in full with no sign.
pub fn parse_month(label: &str) -> String {
    parse_month_date(label)
        .map(|date| format!("{:04}-{:02}-01", date.year(), date.month()))
        .unwrap_or_default()
}

/// Parse a `"Mon YY"` label into the first day of that month.
pub fn parse_month_date(label: &str) -> Option<NaiveDate> {
    let mut tokens = label.split_whitespace();
    let (Some(month_token), Some(year_token), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return None;
    };
    let month = month_number(month_token)?;
    let mut year: i32 = year_token.parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}
