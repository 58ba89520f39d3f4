//! CLI argument definitions for the PFM report reshaper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pfm_model::{DEFAULT_OUTPUT_SHEET, OutputMode};

#[derive(Parser)]
#[command(
    name = "pfm-reshape",
    version,
    about = "Reshape a wide monthly project report into one row per project per month",
    long_about = "Reshape a wide monthly project report into a long table.\n\n\
                  The source sheet holds one row per project with metric columns\n\
                  repeated for every month. The output holds one row per project\n\
                  per month with each metric in its own column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include project identifiers in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a wide report into the long format.
    Convert(ConvertArgs),

    /// List the sheets in a workbook.
    Sheets(SheetsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Input workbook (.xlsx, .xlsm, .xls, .xlsb, .ods) or .csv file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Sheet to convert (default: "Provided Data", else the first sheet with data).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Where to write the result.
    #[arg(long = "output", value_enum, default_value = "newsheet")]
    pub output: OutputModeArg,

    /// Destination file for newfile output (.xlsx, .csv or .json).
    ///
    /// Defaults to <INPUT stem>_converted.xlsx next to the input.
    #[arg(long = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Name of the sheet the converted table is written to.
    #[arg(long = "output-sheet", value_name = "NAME", default_value = DEFAULT_OUTPUT_SHEET)]
    pub output_sheet: String,

    /// Convert and report without writing any output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SheetsArgs {
    /// Input workbook or .csv file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// CLI output mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputModeArg {
    /// Add a sheet to the source workbook.
    Newsheet,
    /// Write a separate file.
    Newfile,
}

impl From<OutputModeArg> for OutputMode {
    fn from(arg: OutputModeArg) -> Self {
        match arg {
            OutputModeArg::Newsheet => OutputMode::NewSheet,
            OutputModeArg::Newfile => OutputMode::NewFile,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
