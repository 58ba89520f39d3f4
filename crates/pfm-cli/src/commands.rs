use anyhow::Result;

use pfm_cli::pipeline::{convert_file, list_sheets};
use pfm_cli::types::{ConvertResult, SheetSummary};
use pfm_model::ConvertOptions;

use crate::cli::{ConvertArgs, SheetsArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let options = ConvertOptions::new()
        .with_source_sheet(args.sheet.clone())
        .with_output_sheet(args.output_sheet.as_str())
        .with_mode(args.output.into())
        .with_output_file(args.output_file.clone());
    convert_file(&args.input, &options, args.dry_run)
}

pub fn run_sheets(args: &SheetsArgs) -> Result<Vec<SheetSummary>> {
    list_sheets(&args.input)
}
