//! Partial-date normalization.
//!
//! CRF date fields arrive as free text in day-month-year order with
//! placeholder tokens for unknown components: `UN` or `UK` for the day,
//! `UNK` for the month. Normalization extracts the first date-like
//! substring, fills placeholders per the imputation rule, and parses the
//! result strictly against the calendar. Invalid input never aborts
//! processing; it resolves to a missing value plus a diagnostic.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crf_model::{Diagnostic, ImputationRule, ValueKind};

/// First date-like substring: a 1-2 digit or two-letter day token, a
/// three-letter month token, and a four-digit year, each pair joined by
/// at most one separator character. The separator class is any single
/// character that is not ASCII alphanumeric and not a period; collected
/// forms use `-`, `/`, spaces and occasionally stranger delimiters.
static DATE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}|[A-Z]{2})[^0-9A-Za-z.]?([A-Z]{3})[^0-9A-Za-z.]?(\d{4})")
        .expect("invalid date token regex")
});

/// Day placeholders for an unknown day of month.
const UNKNOWN_DAY_TOKENS: [&str; 2] = ["UN", "UK"];

/// Month placeholder for an unknown month.
const UNKNOWN_MONTH_TOKEN: &str = "UNK";

/// Outcome of date normalization.
///
/// `value` is `None` both for missing input (no diagnostic attached)
/// and for invalid input (diagnostic attached).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDate {
    /// The normalized calendar date, if one could be produced.
    pub value: Option<NaiveDate>,
    /// Diagnostic raised when the input was present but invalid.
    pub diagnostic: Option<Diagnostic>,
}

impl NormalizedDate {
    fn missing() -> Self {
        Self {
            value: None,
            diagnostic: None,
        }
    }

    fn valid(date: NaiveDate) -> Self {
        Self {
            value: Some(date),
            diagnostic: None,
        }
    }

    fn invalid(diagnostic: Diagnostic) -> Self {
        Self {
            value: None,
            diagnostic: Some(diagnostic),
        }
    }

    /// Returns true when no date value was produced.
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// Normalize a free-text CRF date into a calendar date.
///
/// Missing input (`None` or blank text) yields a missing result with no
/// diagnostic. Present but unparseable input yields a missing result
/// plus a diagnostic carrying the original text; severity is `Warning`,
/// downgraded to `Info` when `warn` is false.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use crf_model::ImputationRule;
/// use crf_normalize::normalize_date;
///
/// let result = normalize_date(Some("01JAN2022"), ImputationRule::Min, true);
/// assert_eq!(result.value, NaiveDate::from_ymd_opt(2022, 1, 1));
/// assert!(result.diagnostic.is_none());
///
/// // Unknown day and month fill to the latest consistent date.
/// let result = normalize_date(Some("UNUNK2020"), ImputationRule::Max, true);
/// assert_eq!(result.value, NaiveDate::from_ymd_opt(2020, 12, 31));
/// ```
pub fn normalize_date(text: Option<&str>, rule: ImputationRule, warn: bool) -> NormalizedDate {
    let Some(original) = text else {
        return NormalizedDate::missing();
    };
    if original.trim().is_empty() {
        return NormalizedDate::missing();
    }

    let upper = original.to_uppercase();
    match parse_candidate(&upper, rule) {
        Some(date) => NormalizedDate::valid(date),
        None => NormalizedDate::invalid(Diagnostic::invalid_input(
            ValueKind::Date,
            original,
            warn,
        )),
    }
}

/// Extract, impute and strictly parse the date-like portion of an
/// uppercased input. Returns `None` when no calendar date results.
fn parse_candidate(upper: &str, rule: ImputationRule) -> Option<NaiveDate> {
    let Some(caps) = DATE_TOKEN_REGEX.captures(upper) else {
        // No date-like substring: the whole input is the candidate and
        // must survive the strict parse on its own.
        return parse_ddmmmyyyy(upper);
    };

    let mut day = caps[1].to_string();
    let mut month = caps[2].to_string();
    let year = &caps[3];

    if day.len() == 1 {
        day.insert(0, '0');
    }

    if month == UNKNOWN_MONTH_TOKEN {
        month = match rule {
            ImputationRule::Min => "JAN".to_string(),
            ImputationRule::Max => "DEC".to_string(),
        };
    }

    let day_unknown = UNKNOWN_DAY_TOKENS.contains(&day.as_str());
    if day_unknown {
        // Both rules parse with day 01; Max then advances to the last
        // calendar day of the resolved month.
        day = "01".to_string();
    }

    let date = parse_ddmmmyyyy(&format!("{day}{month}{year}"))?;

    if day_unknown && rule == ImputationRule::Max {
        Some(end_of_month(date))
    } else {
        Some(date)
    }
}

/// Strict `DDMMMYYYY` parse. Rejects out-of-calendar days, including
/// 29 February outside leap years. The shape check rejects what
/// `%d%b%Y` alone would tolerate: a one-digit day or a year shorter
/// than four digits.
fn parse_ddmmmyyyy(candidate: &str) -> Option<NaiveDate> {
    if !is_ddmmmyyyy_shaped(candidate) {
        return None;
    }
    NaiveDate::parse_from_str(candidate, "%d%b%Y").ok()
}

/// Returns true when the candidate has the exact `DDMMMYYYY` shape.
fn is_ddmmmyyyy_shaped(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    bytes.len() == 9
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[2..5].iter().all(u8::is_ascii_alphabetic)
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

/// Move a date to the last calendar day of its month.
fn end_of_month(date: NaiveDate) -> NaiveDate {
    let last = max_days_in_month(date.year(), date.month());
    date.with_day(last).unwrap_or(date)
}

/// Returns the number of days in a month.
fn max_days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Returns true if the given year is a leap year.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Format a NaiveDate to ISO 8601 date string.
pub fn format_iso8601_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
