use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pfm_cli::types::{ConvertResult, SheetSummary};
use pfm_model::OutputMode;

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    println!("Sheet: {}", result.sheet);
    match &result.destination {
        Some(path) => match result.mode {
            OutputMode::NewSheet => println!("Output: new sheet in {}", path.display()),
            OutputMode::NewFile => println!("Output: {}", path.display()),
        },
        None => println!("Output: (dry run, nothing written)"),
    }

    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Count")]);
    apply_table_style(&mut table);
    for (label, value) in [
        ("Projects", stats.projects),
        ("Months", stats.months),
        ("Metrics", stats.metrics),
        ("Rows written", stats.rows_written),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    for (label, value) in [
        ("Skipped rows", stats.skipped_rows),
        ("Unparsed month labels", stats.unparsed_month_labels),
        ("Missing cells", stats.missing_cells),
    ] {
        table.add_row(vec![Cell::new(label), count_cell(value, Color::Yellow)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");

    if !result.metrics.is_empty() {
        println!("Metrics: {}", result.metrics.join(", "));
    }
    if result.destination.is_some() {
        println!("✓ Conversion completed successfully!");
    }
}

pub fn print_sheets(sheets: &[SheetSummary]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Sheet"), header_cell("Rows")]);
    apply_table_style(&mut table);
    for sheet in sheets {
        let name = if sheet.has_data {
            Cell::new(&sheet.name)
        } else {
            dim_cell(&sheet.name)
        };
        table.add_row(vec![name, Cell::new(sheet.rows)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value == 0 {
        dim_cell(value)
    } else {
        Cell::new(value).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
