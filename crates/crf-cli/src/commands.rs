use anyhow::Result;
use tracing::{info, warn};

use crf_cli::batch::{BatchOptions, BatchOutcome, normalize_csv};
use crf_cli::report::write_diagnostics_report;
use crf_model::{Diagnostic, ImputationRule, MissingTimePolicy, Severity};
use crf_normalize::{
    CombineRequest, DateRequest, TimeRequest, format_iso8601_date, format_iso8601_datetime,
    format_iso8601_time, normalize_time,
};

use crate::cli::{BatchArgs, CombineArgs, DateArgs, TimeArgs};

const MISSING: &str = "missing";

pub fn run_date(args: &DateArgs) -> Result<String> {
    let result = DateRequest::new()
        .text(Some(&args.text))
        .rule(&args.rule)
        .warn(!args.no_warn)
        .evaluate()?;
    if let Some(diagnostic) = &result.diagnostic {
        emit(diagnostic);
    }
    Ok(match result.value {
        Some(date) => format_iso8601_date(date),
        None => MISSING.to_string(),
    })
}

pub fn run_time(args: &TimeArgs) -> Result<String> {
    let result = TimeRequest::new()
        .text(Some(&args.text))
        .warn(!args.no_warn)
        .evaluate()?;
    if let Some(diagnostic) = &result.diagnostic {
        emit(diagnostic);
    }
    Ok(match result.value {
        Some(time) => format_iso8601_time(time),
        None => MISSING.to_string(),
    })
}

pub fn run_combine(args: &CombineArgs) -> Result<String> {
    let date = DateRequest::new()
        .text(Some(&args.date))
        .rule(&args.rule)
        .warn(!args.no_warn)
        .evaluate()?;
    if let Some(diagnostic) = &date.diagnostic {
        emit(diagnostic);
    }

    // An absent --time flag is an omitted argument, not a missing value.
    let mut request = CombineRequest::new()
        .date(date.value)
        .missing_time_allowed(&args.missing_time_allowed);
    if let Some(text) = &args.time {
        let time = normalize_time(Some(text), !args.no_warn);
        if let Some(diagnostic) = &time.diagnostic {
            emit(diagnostic);
        }
        request = request.time(time.value);
    }

    Ok(match request.evaluate()? {
        Some(datetime) => format_iso8601_datetime(datetime),
        None => MISSING.to_string(),
    })
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchOutcome> {
    let rule: ImputationRule = args.rule.parse()?;
    let policy = MissingTimePolicy::from_flag(&args.missing_time_allowed);
    let options = BatchOptions {
        input: &args.input,
        output: args.output.as_deref(),
        date_column: &args.date_column,
        time_column: args.time_column.as_deref(),
        rule,
        policy,
        warn: !args.no_warn,
    };
    let mut outcome = normalize_csv(&options)?;
    if let Some(path) = &args.report {
        outcome.report_path = Some(write_diagnostics_report(path, &args.input, &outcome)?);
    }
    Ok(outcome)
}

fn emit(diagnostic: &Diagnostic) {
    match diagnostic.severity {
        Severity::Warning => warn!("{}", diagnostic.message),
        Severity::Info => info!("{}", diagnostic.message),
    }
}
