//! Tests for the fail-fast argument boundary.

use chrono::{NaiveDate, NaiveTime};
use crf_model::ConfigError;
use crf_normalize::{CombineRequest, DateRequest, TimeRequest};

#[test]
fn omitted_mandatory_arguments_fail_before_computation() {
    assert_eq!(
        DateRequest::new().evaluate().unwrap_err(),
        ConfigError::MissingArgument("date")
    );
    assert_eq!(
        TimeRequest::new().evaluate().unwrap_err(),
        ConfigError::MissingArgument("time")
    );
    assert_eq!(
        CombineRequest::new().evaluate().unwrap_err(),
        ConfigError::MissingArgument("date")
    );
}

#[test]
fn supplied_missing_values_are_ordinary_inputs() {
    let date = DateRequest::new().text(None).evaluate().unwrap();
    assert!(date.is_missing());
    assert!(date.diagnostic.is_none());

    let time = TimeRequest::new().text(None).evaluate().unwrap();
    assert!(time.is_missing());
    assert!(time.diagnostic.is_none());
}

#[test]
fn invalid_rule_string_is_a_config_error() {
    let err = DateRequest::new()
        .text(Some("01JAN2022"))
        .rule("middle")
        .evaluate()
        .unwrap_err();
    assert_eq!(err, ConfigError::InvalidRule("middle".to_string()));
}

#[test]
fn rule_string_is_case_insensitive() {
    let result = DateRequest::new()
        .text(Some("UNUNK2020"))
        .rule("MAX")
        .evaluate()
        .unwrap();
    assert_eq!(result.value, NaiveDate::from_ymd_opt(2020, 12, 31));
}

#[test]
fn rule_defaults_to_min() {
    let result = DateRequest::new().text(Some("UNUNK2020")).evaluate().unwrap();
    assert_eq!(result.value, NaiveDate::from_ymd_opt(2020, 1, 1));
}

#[test]
fn warn_defaults_to_true() {
    let result = DateRequest::new().text(Some("NOTADATE")).evaluate().unwrap();
    let diag = result.diagnostic.expect("diagnostic for invalid input");
    assert_eq!(diag.severity, crf_model::Severity::Warning);
}

#[test]
fn combine_distinguishes_omitted_from_supplied_missing_time() {
    let date = NaiveDate::from_ymd_opt(2022, 1, 1);
    let midnight = date.map(|d| d.and_time(NaiveTime::MIN));

    // Never calling .time() and calling .time(None) both combine to
    // midnight under the default policy.
    let omitted = CombineRequest::new().date(date).evaluate().unwrap();
    let supplied_missing = CombineRequest::new()
        .date(date)
        .time(None)
        .evaluate()
        .unwrap();
    assert_eq!(omitted, midnight);
    assert_eq!(supplied_missing, midnight);

    // And both reject under a non-yes flag.
    let omitted = CombineRequest::new()
        .date(date)
        .missing_time_allowed("no")
        .evaluate()
        .unwrap();
    let supplied_missing = CombineRequest::new()
        .date(date)
        .time(None)
        .missing_time_allowed("no")
        .evaluate()
        .unwrap();
    assert_eq!(omitted, None);
    assert_eq!(supplied_missing, None);
}

#[test]
fn combine_with_valid_time_ignores_policy_flag() {
    let date = NaiveDate::from_ymd_opt(2022, 1, 1);
    let time = NaiveTime::from_hms_opt(14, 5, 0);
    let expected = date.map(|d| d.and_time(time.unwrap()));

    for flag in ["yes", "no", "0", "whatever"] {
        let combined = CombineRequest::new()
            .date(date)
            .time(time)
            .missing_time_allowed(flag)
            .evaluate()
            .unwrap();
        assert_eq!(combined, expected, "flag {flag:?}");
    }
}

#[test]
fn combine_with_missing_date_is_missing_not_an_error() {
    let combined = CombineRequest::new().date(None).evaluate().unwrap();
    assert_eq!(combined, None);
}

#[test]
fn policy_flag_is_case_insensitive_and_total() {
    let date = NaiveDate::from_ymd_opt(2022, 1, 1);
    let midnight = date.map(|d| d.and_time(NaiveTime::MIN));

    let combined = CombineRequest::new()
        .date(date)
        .missing_time_allowed("YES")
        .evaluate()
        .unwrap();
    assert_eq!(combined, midnight);

    let combined = CombineRequest::new()
        .date(date)
        .missing_time_allowed("nonsense")
        .evaluate()
        .unwrap();
    assert_eq!(combined, None);
}
