//! JSON diagnostics report for batch runs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::batch::{BatchOutcome, Finding};

/// Top-level payload of the diagnostics report.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub records: usize,
    pub columns: Vec<ColumnSummaryJson>,
    pub findings: Vec<Finding>,
}

/// Per-column tallies as serialized into the report.
#[derive(Debug, Serialize)]
pub struct ColumnSummaryJson {
    pub column: String,
    pub kind: &'static str,
    pub normalized: usize,
    pub missing: usize,
    pub invalid: usize,
}

const REPORT_SCHEMA: &str = "crf-datetime.diagnostics-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Write the diagnostics report for a completed batch run.
///
/// # Errors
///
/// Fails when the report file or a parent directory cannot be written.
pub fn write_diagnostics_report(
    output_path: &Path,
    source: &Path,
    outcome: &BatchOutcome,
) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let payload = DiagnosticsReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: source.display().to_string(),
        records: outcome.records,
        columns: outcome
            .columns
            .iter()
            .map(|stats| ColumnSummaryJson {
                column: stats.column.clone(),
                kind: stats.kind.as_str(),
                normalized: stats.normalized,
                missing: stats.missing,
                invalid: stats.invalid,
            })
            .collect(),
        findings: outcome.findings.clone(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(output_path.to_path_buf())
}
