//! CLI argument definitions for the CRF date/time normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "crf-datetime",
    version,
    about = "CRF DateTime Normalizer - Convert collected date/time text to ISO 8601",
    long_about = "Normalize free-text CRF date and time values to ISO 8601.\n\n\
                  Handles partial dates with UN/UK/UNK placeholders, liberal\n\
                  separators, and day/month imputation under a min or max rule."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a single date value to ISO 8601.
    Date(DateArgs),

    /// Normalize a single time value to ISO 8601.
    Time(TimeArgs),

    /// Normalize a date and an optional time into a single datetime.
    Combine(CombineArgs),

    /// Normalize date/time columns across a CSV file.
    Batch(BatchArgs),
}

#[derive(Parser)]
pub struct DateArgs {
    /// Date text as recorded on the form.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Imputation rule for unknown day/month placeholders (min or max).
    #[arg(long = "rule", value_name = "RULE", default_value = "min")]
    pub rule: String,

    /// Downgrade data-quality warnings to info-level notes.
    #[arg(long = "no-warn")]
    pub no_warn: bool,
}

#[derive(Parser)]
pub struct TimeArgs {
    /// Time text as recorded on the form.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Downgrade data-quality warnings to info-level notes.
    #[arg(long = "no-warn")]
    pub no_warn: bool,
}

#[derive(Parser)]
pub struct CombineArgs {
    /// Date text as recorded on the form.
    #[arg(value_name = "DATE_TEXT")]
    pub date: String,

    /// Time text as recorded on the form. Omit the flag entirely when
    /// no time was collected; pass an empty string for a blank field.
    #[arg(long = "time", value_name = "TIME_TEXT")]
    pub time: Option<String>,

    /// Whether an unknown time may be filled in as midnight (yes or no).
    #[arg(
        long = "missing-time-allowed",
        value_name = "YES|NO",
        default_value = "yes"
    )]
    pub missing_time_allowed: String,

    /// Imputation rule for unknown day/month placeholders (min or max).
    #[arg(long = "rule", value_name = "RULE", default_value = "min")]
    pub rule: String,

    /// Downgrade data-quality warnings to info-level notes.
    #[arg(long = "no-warn")]
    pub no_warn: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Header of the date column to normalize.
    #[arg(long = "date-column", value_name = "NAME")]
    pub date_column: String,

    /// Header of the time column paired with the date column.
    #[arg(long = "time-column", value_name = "NAME")]
    pub time_column: Option<String>,

    /// Output CSV path with appended ISO columns (omit to skip writing).
    #[arg(long = "out", value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Write a JSON diagnostics report to this path.
    #[arg(long = "report", value_name = "JSON")]
    pub report: Option<PathBuf>,

    /// Imputation rule for unknown day/month placeholders (min or max).
    #[arg(long = "rule", value_name = "RULE", default_value = "min")]
    pub rule: String,

    /// Whether an unknown time may be filled in as midnight (yes or no).
    #[arg(
        long = "missing-time-allowed",
        value_name = "YES|NO",
        default_value = "yes"
    )]
    pub missing_time_allowed: String,

    /// Downgrade data-quality warnings to info-level notes.
    #[arg(long = "no-warn")]
    pub no_warn: bool,
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
