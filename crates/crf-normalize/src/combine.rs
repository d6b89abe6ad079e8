//! Date and time combination.
//!
//! A normalized date and a normalized time merge into a single datetime
//! value. The policy decides what a known date with an unknown time
//! becomes: midnight or missing. A missing date is always missing, no
//! matter the time or policy.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crf_model::MissingTimePolicy;

/// Time argument for datetime combination.
///
/// Distinguishes a caller that never supplied a time argument from one
/// that supplied a time which resolved to missing. The two combine
/// identically; the distinction stays visible at call sites and in
/// request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeArg {
    /// No time argument was given at all.
    #[default]
    Omitted,
    /// A time was given but resolved to missing.
    Missing,
    /// A valid time of day.
    Value(NaiveTime),
}

impl From<Option<NaiveTime>> for TimeArg {
    fn from(value: Option<NaiveTime>) -> Self {
        match value {
            Some(time) => TimeArg::Value(time),
            None => TimeArg::Missing,
        }
    }
}

/// Combine a normalized date and time into a single datetime.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use crf_model::MissingTimePolicy;
/// use crf_normalize::{combine_datetime, TimeArg};
///
/// let date = NaiveDate::from_ymd_opt(2022, 1, 1);
///
/// // A known time lands on the date.
/// let time = TimeArg::Value(NaiveTime::from_hms_opt(14, 5, 0).unwrap());
/// let combined = combine_datetime(date, time, MissingTimePolicy::AllowMidnight);
/// assert_eq!(combined, date.map(|d| d.and_hms_opt(14, 5, 0).unwrap()));
///
/// // An unknown time becomes midnight only when the policy allows it.
/// let combined = combine_datetime(date, TimeArg::Missing, MissingTimePolicy::AllowMidnight);
/// assert_eq!(combined, date.map(|d| d.and_hms_opt(0, 0, 0).unwrap()));
/// assert_eq!(
///     combine_datetime(date, TimeArg::Missing, MissingTimePolicy::Reject),
///     None
/// );
/// ```
pub fn combine_datetime(
    date: Option<NaiveDate>,
    time: TimeArg,
    policy: MissingTimePolicy,
) -> Option<NaiveDateTime> {
    let date = date?;
    match time {
        TimeArg::Value(time) => Some(date.and_time(time)),
        TimeArg::Omitted | TimeArg::Missing => match policy {
            MissingTimePolicy::AllowMidnight => Some(date.and_time(NaiveTime::MIN)),
            MissingTimePolicy::Reject => None,
        },
    }
}

/// Format a NaiveDateTime to ISO 8601 datetime string.
pub fn format_iso8601_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}
