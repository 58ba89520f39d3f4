//! Conversion pipeline: read the source, reshape, hand the table to a sink.
//!
//! The reshaping core never touches the filesystem; this module wires the
//! reader and the sinks around it.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace, warn};

use pfm_ingest::{SourceWorkbook, read_workbook};
use pfm_model::{ConvertOptions, OutputMode, OutputTable};
use pfm_output::{AppendSheetSink, NewFileSink, TableSink};
use pfm_reshape::convert_sheet;

use crate::logging::redact_value;
use crate::types::{ConvertResult, SheetSummary};

/// Choose the sink for the configured output mode.
///
/// `source_sheet` is the sheet being converted; new-sheet output refuses to
/// overwrite it.
pub fn build_sink<'a>(
    workbook: &'a SourceWorkbook,
    options: &ConvertOptions,
    source_sheet: &str,
) -> Box<dyn TableSink + 'a> {
    match options.mode {
        OutputMode::NewSheet => {
            if options.output_file.is_some() {
                warn!("--output-file is ignored when adding a sheet to the source workbook");
            }
            Box::new(
                AppendSheetSink::new(workbook)
                    .with_sheet_name(options.output_sheet.as_str())
                    .with_source_sheet(source_sheet),
            )
        }
        OutputMode::NewFile => {
            let sink = match &options.output_file {
                Some(path) => NewFileSink::new(path.clone()),
                None => NewFileSink::beside(&workbook.path),
            };
            Box::new(sink.with_sheet_name(options.output_sheet.as_str()))
        }
    }
}

/// Convert one input file and write the result unless `dry_run` is set.
pub fn convert_file(input: &Path, options: &ConvertOptions, dry_run: bool) -> Result<ConvertResult> {
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let workbook =
        read_workbook(input).with_context(|| format!("read {}", input.display()))?;
    let raw = workbook
        .raw_sheet(options.source_sheet.as_deref())
        .context("select source sheet")?;
    let conversion = convert_sheet(&raw).context("convert data")?;
    log_rows(&conversion.table);

    let destination = if dry_run {
        info!("dry run; no output written");
        None
    } else {
        let sink = build_sink(&workbook, options, &raw.name);
        Some(sink.write(&conversion.table).context("write output")?)
    };

    info!(
        sheet = %raw.name,
        rows = conversion.stats.rows_written,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "conversion complete"
    );
    Ok(ConvertResult {
        input: input.to_path_buf(),
        sheet: raw.name,
        mode: options.mode,
        destination,
        metrics: conversion.table.metric_names().to_vec(),
        stats: conversion.stats,
    })
}

/// Sheet names and row counts of an input file.
pub fn list_sheets(input: &Path) -> Result<Vec<SheetSummary>> {
    let workbook =
        read_workbook(input).with_context(|| format!("read {}", input.display()))?;
    Ok(workbook
        .sheets
        .iter()
        .map(|sheet| SheetSummary {
            name: sheet.name.clone(),
            rows: sheet.row_count(),
            has_data: sheet.has_data(),
        })
        .collect())
}

fn log_rows(table: &OutputTable) {
    for row in &table.rows {
        trace!(
            project = %redact_value(&row.identifier),
            month = %row.month_year,
            date_order = row.date_order,
            "expanded row"
        );
    }
}
