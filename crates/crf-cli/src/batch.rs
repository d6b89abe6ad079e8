//! CSV batch normalization over configured date and time columns.
//!
//! Reads a delimited file once, normalizes the configured columns on
//! every record, and appends the ISO 8601 renderings as new columns.
//! The input file is never modified. Data-quality findings are logged
//! as they are encountered and collected for the run summary.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use csv::{ReaderBuilder, StringRecord, Writer};
use serde::Serialize;
use tracing::{debug, info, warn};

use crf_model::{Diagnostic, ImputationRule, MissingTimePolicy, Severity, ValueKind};
use crf_normalize::{
    TimeArg, combine_datetime, format_iso8601_date, format_iso8601_datetime, format_iso8601_time,
    normalize_date, normalize_time,
};

/// Options controlling a batch run over one CSV file.
#[derive(Debug)]
pub struct BatchOptions<'a> {
    /// Input CSV path.
    pub input: &'a Path,
    /// Output CSV path. When `None`, records are normalized and tallied
    /// but no output file is written.
    pub output: Option<&'a Path>,
    /// Header of the date column to normalize.
    pub date_column: &'a str,
    /// Header of the time column paired with the date column.
    pub time_column: Option<&'a str>,
    /// Imputation rule for unknown day/month placeholders.
    pub rule: ImputationRule,
    /// Policy for combining a known date with an unknown time.
    pub policy: MissingTimePolicy,
    /// Emit findings at warning severity; `false` downgrades to info.
    pub warn: bool,
}

/// Per-column tallies for the run summary.
#[derive(Debug, Clone)]
pub struct ColumnStats {
    /// Column header as spelled in the input file.
    pub column: String,
    /// Whether the column holds dates or times.
    pub kind: ValueKind,
    /// Records that produced a normalized value.
    pub normalized: usize,
    /// Records whose value was blank.
    pub missing: usize,
    /// Records whose value produced a diagnostic.
    pub invalid: usize,
}

impl ColumnStats {
    fn new(column: String, kind: ValueKind) -> Self {
        Self {
            column,
            kind,
            normalized: 0,
            missing: 0,
            invalid: 0,
        }
    }
}

/// One data-quality finding tied to a record and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// 1-based data row number (the header row is not counted).
    pub row: usize,
    /// Column header the value came from.
    pub column: String,
    /// Diagnostic severity.
    pub severity: Severity,
    /// Diagnostic message, carrying the original value verbatim.
    pub message: String,
}

/// Outcome of a batch run.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Number of data records read.
    pub records: usize,
    /// Tallies for each normalized column, date column first.
    pub columns: Vec<ColumnStats>,
    /// Findings in record order.
    pub findings: Vec<Finding>,
    /// Output CSV path, when one was written.
    pub output_path: Option<PathBuf>,
    /// Diagnostics report path, when one was written.
    pub report_path: Option<PathBuf>,
}

/// Normalize the configured columns across every record of a CSV file.
///
/// Appends `<DATE>_ISO` to each record and, when a time column is
/// configured, `<TIME>_ISO` and a combined `<DATE>_DTC` datetime.
/// Cells that normalize to missing are left empty.
///
/// # Errors
///
/// Fails on I/O problems, malformed CSV, or a configured column that is
/// absent from the header row. Invalid cell values are findings, never
/// errors.
pub fn normalize_csv(options: &BatchOptions<'_>) -> Result<BatchOutcome> {
    let start = Instant::now();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(options.input)
        .with_context(|| format!("read csv: {}", options.input.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read headers: {}", options.input.display()))?
        .clone();

    let date_index = find_column(&headers, options.date_column).ok_or_else(|| {
        anyhow!(
            "date column `{}` not found in {}",
            options.date_column,
            options.input.display()
        )
    })?;
    let date_header = header_name(&headers, date_index);
    debug!(column = %date_header, index = date_index, "resolved date column");

    let time = match options.time_column {
        Some(column) => {
            let index = find_column(&headers, column).ok_or_else(|| {
                anyhow!(
                    "time column `{column}` not found in {}",
                    options.input.display()
                )
            })?;
            let header = header_name(&headers, index);
            debug!(column = %header, index, "resolved time column");
            Some((index, header))
        }
        None => None,
    };

    let mut writer = open_writer(options.output)?;
    if let Some(writer) = writer.as_mut() {
        let mut out_headers: Vec<String> = headers.iter().map(str::to_string).collect();
        out_headers.push(format!("{date_header}_ISO"));
        if let Some((_, time_header)) = &time {
            out_headers.push(format!("{time_header}_ISO"));
            out_headers.push(format!("{date_header}_DTC"));
        }
        writer.write_record(&out_headers).context("write headers")?;
    }

    let mut date_stats = ColumnStats::new(date_header, ValueKind::Date);
    let mut time_stats = time
        .as_ref()
        .map(|(_, header)| ColumnStats::new(header.clone(), ValueKind::Time));
    let mut findings = Vec::new();
    let mut records = 0usize;

    for (index, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("read record: {}", options.input.display()))?;
        let row = index + 1;
        records += 1;

        let date = normalize_date(record.get(date_index), options.rule, options.warn);
        tally(
            &mut date_stats,
            row,
            date.value.is_some(),
            date.diagnostic.as_ref(),
            &mut findings,
        );

        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        fields.push(date.value.map(format_iso8601_date).unwrap_or_default());

        if let Some((time_index, _)) = &time {
            let time = normalize_time(record.get(*time_index), options.warn);
            if let Some(stats) = time_stats.as_mut() {
                tally(
                    stats,
                    row,
                    time.value.is_some(),
                    time.diagnostic.as_ref(),
                    &mut findings,
                );
            }
            let combined = combine_datetime(date.value, TimeArg::from(time.value), options.policy);
            fields.push(time.value.map(format_iso8601_time).unwrap_or_default());
            fields.push(combined.map(format_iso8601_datetime).unwrap_or_default());
        }

        if let Some(writer) = writer.as_mut() {
            writer
                .write_record(&fields)
                .with_context(|| format!("write record {row}"))?;
        }
    }

    if let Some(writer) = writer.as_mut() {
        writer.flush().context("flush csv output")?;
    }

    let mut columns = vec![date_stats];
    if let Some(stats) = time_stats {
        columns.push(stats);
    }
    info!(
        records,
        findings = findings.len(),
        duration_ms = start.elapsed().as_millis(),
        "batch normalization complete"
    );

    Ok(BatchOutcome {
        records,
        columns,
        findings,
        output_path: options.output.map(Path::to_path_buf),
        report_path: None,
    })
}

/// Locate a column by header, ignoring case, surrounding whitespace,
/// and a leading BOM.
fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| {
        header
            .trim_matches('\u{feff}')
            .trim()
            .eq_ignore_ascii_case(name.trim())
    })
}

fn header_name(headers: &StringRecord, index: usize) -> String {
    headers
        .get(index)
        .map(|header| header.trim_matches('\u{feff}').trim())
        .unwrap_or_default()
        .to_string()
}

fn open_writer(path: Option<&Path>) -> Result<Option<Writer<std::fs::File>>> {
    match path {
        Some(path) => {
            let writer = Writer::from_path(path)
                .with_context(|| format!("write csv: {}", path.display()))?;
            Ok(Some(writer))
        }
        None => Ok(None),
    }
}

fn tally(
    stats: &mut ColumnStats,
    row: usize,
    value_present: bool,
    diagnostic: Option<&Diagnostic>,
    findings: &mut Vec<Finding>,
) {
    match diagnostic {
        Some(diagnostic) => {
            stats.invalid += 1;
            match diagnostic.severity {
                Severity::Warning => {
                    warn!(row, column = %stats.column, "{}", diagnostic.message);
                }
                Severity::Info => {
                    info!(row, column = %stats.column, "{}", diagnostic.message);
                }
            }
            findings.push(Finding {
                row,
                column: stats.column.clone(),
                severity: diagnostic.severity,
                message: diagnostic.message.clone(),
            });
        }
        None if value_present => stats.normalized += 1,
        None => stats.missing += 1,
    }
}
