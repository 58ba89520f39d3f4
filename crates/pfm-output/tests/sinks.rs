use std::fs;
use std::path::{Path, PathBuf};

use calamine::{Reader, open_workbook_auto};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use pfm_ingest::read_workbook;
use pfm_model::{CellValue, FIXED_HEADERS, OutputRow, OutputTable};
use pfm_output::{
    AppendSheetSink, NewFileSink, OutputError, TableSink, default_output_path, to_json_string,
};

fn sample_table() -> OutputTable {
    let mut columns: Vec<String> = FIXED_HEADERS.iter().map(ToString::to_string).collect();
    columns.extend(["Revenue", "Cost"].map(String::from));
    let row = |order: usize, label: &str, date: &str, metrics: Vec<CellValue>| OutputRow {
        identifier: "100 - Alpha".to_string(),
        project_number: CellValue::Number(100.0),
        project_name: "Alpha".to_string(),
        category: String::new(),
        client: "Acme".to_string(),
        project_manager: "Jo".to_string(),
        date: String::new(),
        date_order: order,
        pfm_date: date.to_string(),
        month_year: label.to_string(),
        metrics,
    };
    OutputTable {
        columns,
        rows: vec![
            row(
                1,
                "Jan 26",
                "2026-01-01",
                vec![CellValue::Number(10.0), CellValue::text("n/a")],
            ),
            row(
                2,
                "Feb 26",
                "2026-02-01",
                vec![CellValue::Number(11.5), CellValue::Null],
            ),
        ],
    }
}

fn write_csv_source(dir: &Path) -> PathBuf {
    let path = dir.join("report.csv");
    fs::write(&path, "Project,Client,PM,Revenue\n,,,Jan 26\n1 - One,c,m,5\n").expect("write");
    path
}

#[test]
fn default_path_sits_beside_input() {
    assert_eq!(
        default_output_path(Path::new("/data/Monthly Report.xlsx")),
        PathBuf::from("/data/Monthly Report_converted.xlsx")
    );
    assert_eq!(
        default_output_path(Path::new("report.csv")),
        PathBuf::from("report_converted.xlsx")
    );
}

#[test]
fn new_file_writes_csv() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("out.csv");
    let written = NewFileSink::new(&path)
        .write(&sample_table())
        .expect("write csv");
    assert_eq!(written, path);
    let contents = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Project Number - Name,Project Num,Project Name,"));
    assert!(lines[0].ends_with(",Revenue,Cost"));
    assert_eq!(
        lines[1],
        "100 - Alpha,100,Alpha,,Acme,Jo,,1,2026-01-01,Jan 26,10,n/a"
    );
    assert_eq!(
        lines[2],
        "100 - Alpha,100,Alpha,,Acme,Jo,,2,2026-02-01,Feb 26,11.5,"
    );
}

#[test]
fn json_keeps_column_order() {
    let json = to_json_string(&sample_table()).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Project Num"], serde_json::json!(100));
    assert_eq!(rows[0]["Date Order"], serde_json::json!(1));
    assert_eq!(rows[1]["Revenue"], serde_json::json!(11.5));
    assert!(rows[1]["Cost"].is_null());
    let revenue = json.find("\"Revenue\"").expect("revenue key");
    let cost = json.find("\"Cost\"").expect("cost key");
    assert!(revenue < cost);
}

#[test]
fn new_file_writes_xlsx_readable_back() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("out.xlsx");
    NewFileSink::new(&path)
        .write(&sample_table())
        .expect("write xlsx");

    let workbook = read_workbook(&path).expect("read back");
    assert_eq!(workbook.sheet_names(), vec!["Converted Data".to_string()]);
    let sheet = workbook.sheet("Converted Data").expect("sheet");
    assert_eq!(sheet.row_count(), 3);
    assert_eq!(sheet.cells[0][0], CellValue::text("Project Number - Name"));
    assert_eq!(sheet.cells[1][1], CellValue::Number(100.0));
    assert_eq!(sheet.cells[1][11], CellValue::text("n/a"));
    // Null metric at the end of the row leaves no cell behind.
    assert_eq!(sheet.cells[2].len(), 11);
}

#[test]
fn new_file_rejects_unknown_extension() {
    let dir = TempDir::new().expect("temp dir");
    let err = NewFileSink::new(dir.path().join("out.txt"))
        .write(&sample_table())
        .expect_err("unsupported");
    assert!(matches!(err, OutputError::UnsupportedFormat { .. }));
}

#[test]
fn append_adds_sheet_to_xlsx_source() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("source.xlsx");
    NewFileSink::new(&path)
        .with_sheet_name("Provided Data")
        .write(&sample_table())
        .expect("seed workbook");

    let source = read_workbook(&path).expect("read source");
    let written = AppendSheetSink::new(&source)
        .with_source_sheet("Provided Data")
        .write(&sample_table())
        .expect("append");
    assert_eq!(written, path);

    let updated = read_workbook(&path).expect("read updated");
    assert_eq!(
        updated.sheet_names(),
        vec!["Provided Data".to_string(), "Converted Data".to_string()]
    );
    assert_eq!(
        updated.sheet("Provided Data").expect("kept").cells,
        source.sheet("Provided Data").expect("orig").cells
    );

    // Appending again replaces the output sheet instead of duplicating it.
    AppendSheetSink::new(&updated)
        .write(&sample_table())
        .expect("append twice");
    let again = read_workbook(&path).expect("read again");
    assert_eq!(again.sheets.len(), 2);
}

#[test]
fn append_requires_xlsx_source() {
    let dir = TempDir::new().expect("temp dir");
    let source = read_workbook(&write_csv_source(dir.path())).expect("read csv");
    let err = AppendSheetSink::new(&source)
        .write(&sample_table())
        .expect_err("csv append");
    assert!(matches!(err, OutputError::AppendUnsupported { .. }));
}

fn write_formula_source(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Provided Data").expect("name");
    for (col, header) in ["Project", "Client", "PM", "Revenue", "Revenue", "Total"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *header).expect("header");
    }
    sheet.write_string(1, 3, "Jan 26").expect("month");
    sheet.write_string(1, 4, "Feb 26").expect("month");
    sheet.write_string(2, 0, "100 - Alpha").expect("id");
    sheet.write_number(2, 3, 10.0).expect("value");
    sheet.write_number(2, 4, 11.5).expect("value");
    sheet.write_formula(2, 5, "=D3+E3").expect("formula");
    workbook.save(path).expect("save");
}

fn formulas(path: &Path, sheet: &str) -> Vec<String> {
    let mut workbook = open_workbook_auto(path).expect("open");
    let range = workbook.worksheet_formula(sheet).expect("formulas");
    range
        .rows()
        .flatten()
        .filter(|formula| !formula.is_empty())
        .cloned()
        .collect()
}

#[test]
fn append_keeps_formulas_in_other_sheets() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("source.xlsx");
    write_formula_source(&path);
    assert_eq!(formulas(&path, "Provided Data"), vec!["D3+E3".to_string()]);

    let source = read_workbook(&path).expect("read source");
    AppendSheetSink::new(&source)
        .with_source_sheet("Provided Data")
        .write(&sample_table())
        .expect("append");

    assert_eq!(formulas(&path, "Provided Data"), vec!["D3+E3".to_string()]);
    let updated = read_workbook(&path).expect("read updated");
    let converted = updated.sheet("Converted Data").expect("converted");
    assert_eq!(converted.cells[1][0], CellValue::text("100 - Alpha"));
    assert_eq!(converted.cells[2][10], CellValue::Number(11.5));
}

#[test]
fn append_accepts_macro_enabled_workbooks() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("source.xlsm");
    write_formula_source(&path);

    let source = read_workbook(&path).expect("read source");
    AppendSheetSink::new(&source)
        .with_source_sheet("Provided Data")
        .write(&sample_table())
        .expect("append");

    let updated = read_workbook(&path).expect("read updated");
    assert_eq!(
        updated.sheet_names(),
        vec!["Provided Data".to_string(), "Converted Data".to_string()]
    );
}

#[test]
fn append_refuses_to_overwrite_source_sheet() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("source.xlsx");
    write_formula_source(&path);

    let source = read_workbook(&path).expect("read source");
    let err = AppendSheetSink::new(&source)
        .with_sheet_name("provided data")
        .with_source_sheet("Provided Data")
        .write(&sample_table())
        .expect_err("overwrite source");
    assert!(matches!(err, OutputError::OutputIsSource { .. }));

    let unchanged = read_workbook(&path).expect("read again");
    assert_eq!(unchanged.sheet_names(), vec!["Provided Data".to_string()]);
    assert_eq!(formulas(&path, "Provided Data"), vec!["D3+E3".to_string()]);
}
