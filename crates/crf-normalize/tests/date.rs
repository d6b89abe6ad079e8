//! Tests for date normalization.

use chrono::NaiveDate;
use crf_model::{ImputationRule, Severity};
use crf_normalize::normalize_date;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn complete_date_normalizes_without_diagnostic() {
    let result = normalize_date(Some("01JAN2022"), ImputationRule::Min, true);
    assert_eq!(result.value, Some(ymd(2022, 1, 1)));
    assert!(result.diagnostic.is_none());
}

#[test]
fn single_digit_day_is_padded() {
    let result = normalize_date(Some("1JAN2022"), ImputationRule::Min, true);
    assert_eq!(result.value, Some(ymd(2022, 1, 1)));
}

#[test]
fn unknown_day_and_month_fill_per_rule() {
    let min = normalize_date(Some("UNUNK2020"), ImputationRule::Min, true);
    assert_eq!(min.value, Some(ymd(2020, 1, 1)));

    let max = normalize_date(Some("UNUNK2020"), ImputationRule::Max, true);
    assert_eq!(max.value, Some(ymd(2020, 12, 31)));
}

#[test]
fn unknown_day_fills_to_month_end_under_max() {
    let result = normalize_date(Some("UN FEB2021"), ImputationRule::Max, true);
    assert_eq!(result.value, Some(ymd(2021, 2, 28)));
}

#[test]
fn unknown_day_respects_leap_years_under_max() {
    let result = normalize_date(Some("UNFEB2020"), ImputationRule::Max, true);
    assert_eq!(result.value, Some(ymd(2020, 2, 29)));
}

#[test]
fn uk_token_matches_un_token() {
    let un = normalize_date(Some("UNMAR2021"), ImputationRule::Min, true);
    let uk = normalize_date(Some("UKMAR2021"), ImputationRule::Min, true);
    assert_eq!(un, uk);
    assert_eq!(un.value, Some(ymd(2021, 3, 1)));
}

#[test]
fn date_is_extracted_from_surrounding_text() {
    let result = normalize_date(Some("SCREENING 05JUN2019 (SITE 12)"), ImputationRule::Min, true);
    assert_eq!(result.value, Some(ymd(2019, 6, 5)));
    assert!(result.diagnostic.is_none());
}

#[test]
fn unusual_separators_are_accepted() {
    let result = normalize_date(Some("01@JAN#2022"), ImputationRule::Min, true);
    assert_eq!(result.value, Some(ymd(2022, 1, 1)));
}

#[test]
fn missing_input_yields_missing_without_diagnostic() {
    for input in [None, Some(""), Some("   ")] {
        let result = normalize_date(input, ImputationRule::Min, true);
        assert!(result.value.is_none());
        assert!(result.diagnostic.is_none());
    }
}

#[test]
fn invalid_input_yields_missing_with_warning() {
    let result = normalize_date(Some("NOTADATE"), ImputationRule::Min, true);
    assert!(result.value.is_none());
    let diag = result.diagnostic.expect("diagnostic for invalid input");
    assert_eq!(diag.severity, Severity::Warning);
    assert!(diag.message.contains("NOTADATE"));
}

#[test]
fn suppressed_warning_becomes_info() {
    let result = normalize_date(Some("NOTADATE"), ImputationRule::Min, false);
    let diag = result.diagnostic.expect("diagnostic for invalid input");
    assert_eq!(diag.severity, Severity::Info);
    assert!(diag.message.contains("NOTADATE"));
}

#[test]
fn diagnostic_line_renders_severity_prefix() {
    let result = normalize_date(Some("NOTADATE"), ImputationRule::Min, true);
    let diag = result.diagnostic.expect("diagnostic for invalid input");
    insta::assert_snapshot!(diag.to_string(), @"WARNING: Input date is not valid: NOTADATE");
}

#[test]
fn impossible_calendar_dates_are_invalid() {
    for input in ["31APR2021", "29FEB2021", "00JAN2022", "32JAN2022"] {
        let result = normalize_date(Some(input), ImputationRule::Min, true);
        assert!(result.value.is_none(), "input {input:?}");
        assert!(result.diagnostic.is_some(), "input {input:?}");
    }
}

#[test]
fn short_year_inputs_are_invalid() {
    // Years shorter than four digits never match the extraction
    // pattern and must not slip through the whole-input parse either.
    for input in ["15JAN20", "7MAY99", "15MAY999"] {
        let result = normalize_date(Some(input), ImputationRule::Min, true);
        assert!(result.value.is_none(), "input {input:?}");
        assert!(result.diagnostic.is_some(), "input {input:?}");
    }
}

#[test]
fn normalization_is_idempotent_on_canonical_form() {
    let first = normalize_date(Some("7SEP2023"), ImputationRule::Min, true);
    let date = first.value.expect("valid date");
    let canonical = date.format("%d%b%Y").to_string().to_uppercase();
    let second = normalize_date(Some(&canonical), ImputationRule::Min, true);
    assert_eq!(second.value, Some(date));
    assert!(second.diagnostic.is_none());
}

#[test]
fn rule_only_affects_placeholder_dates() {
    let min = normalize_date(Some("15JUL2021"), ImputationRule::Min, true);
    let max = normalize_date(Some("15JUL2021"), ImputationRule::Max, true);
    assert_eq!(min, max);
}
