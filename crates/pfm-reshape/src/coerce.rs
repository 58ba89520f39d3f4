//! Cell value coercion.

use pfm_model::CellValue;

/// Parses the whole trimmed string as a finite float.
///
/// Partial parses and locale separators are rejected. `inf` and `NaN`
/// are treated as text because no sink can store them.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Coerces a raw cell: a number when it parses, otherwise the original text.
pub fn coerce_cell(raw: &str) -> CellValue {
    match parse_number(raw) {
        Some(number) => CellValue::Number(number),
        None => CellValue::Text(raw.to_string()),
    }
}

/// Coerces the cell at `column`, or yields `Null` when the row is too short.
pub fn coerce_at(row: &[String], column: usize) -> CellValue {
    row.get(column)
        .map_or(CellValue::Null, |raw| coerce_cell(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_parse() {
        assert_eq!(coerce_cell("42.5"), CellValue::Number(42.5));
        assert_eq!(coerce_cell(" 7 "), CellValue::Number(7.0));
        assert_eq!(coerce_cell("-1e3"), CellValue::Number(-1000.0));
    }

    #[test]
    fn text_is_kept_verbatim() {
        assert_eq!(coerce_cell("abc"), CellValue::text("abc"));
        assert_eq!(coerce_cell("1,000"), CellValue::text("1,000"));
        assert_eq!(coerce_cell("12abc"), CellValue::text("12abc"));
        assert_eq!(coerce_cell("  "), CellValue::text("  "));
        assert_eq!(coerce_cell("NaN"), CellValue::text("NaN"));
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(coerce_cell(""), CellValue::text(""));
    }

    #[test]
    fn out_of_range_is_null() {
        let row = vec!["a".to_string(), "2".to_string()];
        assert_eq!(coerce_at(&row, 1), CellValue::Number(2.0));
        assert_eq!(coerce_at(&row, 2), CellValue::Null);
    }
}
