//! Tests for datetime combination.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crf_model::MissingTimePolicy;
use crf_normalize::{combine_datetime, format_iso8601_datetime, TimeArg};

fn date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2022, 3, 15)
}

fn at(hour: u32, minute: u32, second: u32) -> Option<NaiveDateTime> {
    date().map(|d| d.and_hms_opt(hour, minute, second).unwrap())
}

#[test]
fn valid_date_and_time_combine() {
    let time = TimeArg::Value(NaiveTime::from_hms_opt(14, 5, 0).unwrap());
    let combined = combine_datetime(date(), time, MissingTimePolicy::AllowMidnight);
    assert_eq!(combined, at(14, 5, 0));
}

#[test]
fn missing_date_is_missing_regardless_of_time_and_policy() {
    let time = TimeArg::Value(NaiveTime::from_hms_opt(14, 5, 0).unwrap());
    for policy in [MissingTimePolicy::AllowMidnight, MissingTimePolicy::Reject] {
        assert_eq!(combine_datetime(None, time, policy), None);
        assert_eq!(combine_datetime(None, TimeArg::Missing, policy), None);
        assert_eq!(combine_datetime(None, TimeArg::Omitted, policy), None);
    }
}

#[test]
fn unknown_time_becomes_midnight_when_allowed() {
    assert_eq!(
        combine_datetime(date(), TimeArg::Missing, MissingTimePolicy::AllowMidnight),
        at(0, 0, 0)
    );
    assert_eq!(
        combine_datetime(date(), TimeArg::Omitted, MissingTimePolicy::AllowMidnight),
        at(0, 0, 0)
    );
}

#[test]
fn unknown_time_is_rejected_when_policy_says_so() {
    assert_eq!(
        combine_datetime(date(), TimeArg::Missing, MissingTimePolicy::Reject),
        None
    );
    assert_eq!(
        combine_datetime(date(), TimeArg::Omitted, MissingTimePolicy::Reject),
        None
    );
}

#[test]
fn omitted_and_supplied_missing_are_equivalent() {
    for policy in [MissingTimePolicy::AllowMidnight, MissingTimePolicy::Reject] {
        assert_eq!(
            combine_datetime(date(), TimeArg::Omitted, policy),
            combine_datetime(date(), TimeArg::Missing, policy)
        );
    }
}

#[test]
fn combined_value_formats_as_iso8601() {
    let combined = combine_datetime(
        date(),
        TimeArg::Value(NaiveTime::from_hms_opt(9, 5, 0).unwrap()),
        MissingTimePolicy::AllowMidnight,
    )
    .expect("combined datetime");
    assert_eq!(format_iso8601_datetime(combined), "2022-03-15T09:05:00");
}
