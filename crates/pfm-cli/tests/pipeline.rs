//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use pfm_cli::pipeline::{convert_file, list_sheets};
use pfm_ingest::read_workbook;
use pfm_model::{ConvertOptions, OutputMode};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

const SOURCE_CSV: &str = "Project,Client,PM,Revenue,Revenue,Cost,Cost\n\
,,,Jan 26,Feb 26\n\
100 - Alpha,Acme,Jo,10,11.5,n/a,\n\
,Nobody,X,1\n\
Beta,Globex,Sam,7\n";

fn write_source(dir: &Path) -> PathBuf {
    let path = dir.join("report.csv");
    fs::write(&path, SOURCE_CSV).expect("write source");
    path
}

fn new_file_options(path: Option<PathBuf>) -> ConvertOptions {
    ConvertOptions::new()
        .with_mode(OutputMode::NewFile)
        .with_output_file(path)
}

#[test]
fn converts_csv_to_csv() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_source(dir.path());
    let output = dir.path().join("long.csv");

    let result = convert_file(&input, &new_file_options(Some(output.clone())), false)
        .expect("convert");
    assert_eq!(result.destination.as_deref(), Some(output.as_path()));
    assert_eq!(result.sheet, "report");
    assert_eq!(result.metrics, vec!["Revenue", "Cost"]);
    assert_eq!(result.stats.projects, 2);
    assert_eq!(result.stats.skipped_rows, 1);
    assert_eq!(result.stats.rows_written, 4);

    let contents = fs::read_to_string(&output)
        .expect("read output")
        .replace("\r\n", "\n");
    insta::assert_snapshot!(contents.trim_end(), @r"
    Project Number - Name,Project Num,Project Name,Category,Client,Project Manager,Date,Date Order,PFM Date,Month-Year,Revenue,Cost
    100 - Alpha,100,Alpha,,Acme,Jo,,1,2026-01-01,Jan 26,10,n/a
    100 - Alpha,100,Alpha,,Acme,Jo,,2,2026-02-01,Feb 26,11.5,
    Beta,Beta,Beta,,Globex,Sam,,1,2026-01-01,Jan 26,7,
    Beta,Beta,Beta,,Globex,Sam,,2,2026-02-01,Feb 26,,
    ");
}

#[test]
fn new_file_defaults_to_converted_xlsx() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_source(dir.path());

    let result = convert_file(&input, &new_file_options(None), false).expect("convert");
    let expected = dir.path().join("report_converted.xlsx");
    assert_eq!(result.destination.as_deref(), Some(expected.as_path()));

    let workbook = read_workbook(&expected).expect("read output");
    let raw = workbook
        .raw_sheet(Some("Converted Data"))
        .expect("converted sheet");
    assert_eq!(raw.rows.len(), 5);
    assert_eq!(raw.rows[1][0], "100 - Alpha");
    assert_eq!(raw.rows[1][7], "1");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_source(dir.path());

    let result = convert_file(&input, &new_file_options(None), true).expect("convert");
    assert!(result.destination.is_none());
    assert_eq!(result.stats.rows_written, 4);
    assert!(!dir.path().join("report_converted.xlsx").exists());
}

#[test]
fn new_sheet_mode_rejects_csv_input() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_source(dir.path());

    let err = convert_file(&input, &ConvertOptions::new(), false).expect_err("append csv");
    assert!(format!("{err:#}").contains("only .xlsx and .xlsm workbooks"));
}

fn write_xlsx_source(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Provided Data").expect("name");
    for (row, line) in SOURCE_CSV.lines().enumerate() {
        for (col, value) in line.split(',').enumerate() {
            if value.is_empty() {
                continue;
            }
            match value.parse::<f64>() {
                Ok(number) => sheet.write_number(row as u32, col as u16, number),
                Err(_) => sheet.write_string(row as u32, col as u16, value),
            }
            .expect("write cell");
        }
    }
    workbook.save(path).expect("save");
}

#[test]
fn new_sheet_mode_updates_xlsx_in_place() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("report.xlsx");
    write_xlsx_source(&path);

    let result = convert_file(&path, &ConvertOptions::new(), false).expect("convert");
    assert_eq!(result.destination.as_deref(), Some(path.as_path()));
    assert_eq!(result.sheet, "Provided Data");

    let updated = read_workbook(&path).expect("read updated");
    assert_eq!(
        updated.sheet_names(),
        vec!["Provided Data".to_string(), "Converted Data".to_string()]
    );
    let converted = updated
        .raw_sheet(Some("Converted Data"))
        .expect("converted sheet");
    assert_eq!(converted.rows.len(), 5);
    assert_eq!(converted.rows[2][9], "Feb 26");
    assert_eq!(converted.rows[2][10], "11.5");
}

#[test]
fn missing_sheet_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_source(dir.path());
    let options = new_file_options(None).with_source_sheet(Some("Nope".to_string()));

    let err = convert_file(&input, &options, true).expect_err("missing sheet");
    let message = format!("{err:#}");
    assert!(message.contains("sheet 'Nope' not found"));
    assert!(message.contains("report"));
}

#[test]
fn too_small_source_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("tiny.csv");
    fs::write(&input, "Project,Client,PM,Revenue\n,,,Jan 26\n").expect("write");

    let err = convert_file(&input, &new_file_options(None), true).expect_err("too small");
    assert!(format!("{err:#}").contains("needs at least 3 rows, found 2"));
}

#[test]
fn lists_sheets() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_source(dir.path());
    let sheets = list_sheets(&input).expect("list");
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].name, "report");
    assert_eq!(sheets[0].rows, 5);
    assert!(sheets[0].has_data);
}

#[test]
fn new_sheet_mode_never_overwrites_source_sheet() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("report.xlsx");
    write_xlsx_source(&path);
    let options = ConvertOptions::new().with_output_sheet("Provided Data");

    let err = convert_file(&path, &options, false).expect_err("overwrite source");
    assert!(format!("{err:#}").contains("is the source sheet"));
    let unchanged = read_workbook(&path).expect("read source");
    assert_eq!(unchanged.sheet_names(), vec!["Provided Data".to_string()]);
}

#[test]
fn date_typed_month_headers_still_parse() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("dated.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Provided Data").expect("name");
    for (col, header) in ["Project", "Client", "PM", "Revenue", "Revenue"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *header).expect("header");
    }
    let month_format = Format::new().set_num_format("mmm yy");
    for (col, month) in [(3, 1), (4, 2)] {
        let date = ExcelDateTime::from_ymd(2026, month, 1).expect("date");
        sheet
            .write_datetime_with_format(1, col, &date, &month_format)
            .expect("month header");
    }
    sheet.write_string(2, 0, "100 - Alpha").expect("id");
    sheet.write_string(2, 1, "Acme").expect("client");
    sheet.write_string(2, 2, "Jo").expect("pm");
    sheet.write_number(2, 3, 10.0).expect("value");
    sheet.write_number(2, 4, 11.5).expect("value");
    workbook.save(&input).expect("save");

    let output = dir.path().join("long.csv");
    let result = convert_file(&input, &new_file_options(Some(output.clone())), false)
        .expect("convert");
    assert_eq!(result.stats.unparsed_month_labels, 0);

    let contents = fs::read_to_string(&output)
        .expect("read output")
        .replace("\r\n", "\n");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[1], "100 - Alpha,100,Alpha,,Acme,Jo,,1,2026-01-01,Jan 26,10");
    assert_eq!(lines[2], "100 - Alpha,100,Alpha,,Acme,Jo,,2,2026-02-01,Feb 26,11.5");
}
