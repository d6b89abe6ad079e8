//! Time-of-day normalization.
//!
//! CRF time fields carry a clock time, frequently with leading free
//! text ("approx 14:05"). Normalization takes the last
//! whitespace-delimited token, extracts the first time-like substring,
//! and parses it strictly. The numeric components are re-checked
//! against the parsed value so a lenient parser can never turn an
//! out-of-range component into an accepted time.

use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use crf_model::{Diagnostic, ValueKind};

/// First time-like substring: one or more hour digits, a two-digit
/// minute, and an optional two-digit second.
static TIME_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+:\d{2}(?::\d{2})?").expect("invalid time token regex"));

/// Outcome of time normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTime {
    /// The normalized time of day, if one could be produced.
    pub value: Option<NaiveTime>,
    /// Diagnostic raised when the input was present but invalid.
    pub diagnostic: Option<Diagnostic>,
}

impl NormalizedTime {
    fn missing() -> Self {
        Self {
            value: None,
            diagnostic: None,
        }
    }

    fn valid(time: NaiveTime) -> Self {
        Self {
            value: Some(time),
            diagnostic: None,
        }
    }

    fn invalid(diagnostic: Diagnostic) -> Self {
        Self {
            value: None,
            diagnostic: Some(diagnostic),
        }
    }

    /// Returns true when no time value was produced.
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// Normalize a free-text CRF time into a time of day.
///
/// Missing input (`None` or blank text) yields a missing result with no
/// diagnostic. Present but unparseable input yields a missing result
/// plus a diagnostic carrying the original text; severity is `Warning`,
/// downgraded to `Info` when `warn` is false.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use crf_normalize::normalize_time;
///
/// let result = normalize_time(Some("9:05"), true);
/// assert_eq!(result.value, NaiveTime::from_hms_opt(9, 5, 0));
///
/// // Out-of-range minutes never round into a valid time.
/// let result = normalize_time(Some("01:62"), true);
/// assert!(result.value.is_none());
/// assert!(result.diagnostic.is_some());
/// ```
pub fn normalize_time(text: Option<&str>, warn: bool) -> NormalizedTime {
    let Some(original) = text else {
        return NormalizedTime::missing();
    };
    if original.trim().is_empty() {
        return NormalizedTime::missing();
    }

    match parse_candidate(original) {
        Some(time) => NormalizedTime::valid(time),
        None => NormalizedTime::invalid(Diagnostic::invalid_input(
            ValueKind::Time,
            original,
            warn,
        )),
    }
}

/// Extract and strictly parse the time-like portion of the input.
/// Returns `None` when no valid time of day results.
fn parse_candidate(original: &str) -> Option<NaiveTime> {
    // Times are collected with leading qualifiers; the clock value is
    // the last whitespace-delimited token.
    let token = original.split_whitespace().next_back()?;

    let mut candidate = match TIME_TOKEN_REGEX.find(token) {
        Some(found) => found.as_str().to_string(),
        // No time-like substring: the token itself is the candidate
        // and must survive the strict parse on its own.
        None => token.to_string(),
    };

    if candidate.find(':') == Some(1) {
        candidate.insert(0, '0');
    }

    let format = if candidate.matches(':').count() == 2 {
        "%H:%M:%S"
    } else {
        "%H:%M"
    };
    let time = NaiveTime::parse_from_str(&candidate, format).ok()?;

    verify_components(&candidate, time).then_some(time)
}

/// Compare the numeric components of the candidate text against the
/// parsed value. Guards against parser leniency: an out-of-range
/// component must invalidate the whole value, not round, and a
/// seconds token of `60` must not survive as a leap second.
fn verify_components(candidate: &str, time: NaiveTime) -> bool {
    let mut parts = candidate.split(':');
    let hour = parts.next().and_then(|p| p.parse::<u32>().ok());
    let minute = parts.next().and_then(|p| p.parse::<u32>().ok());
    let second = parts.next();
    match (hour, minute) {
        (Some(hour), Some(minute)) => {
            time.hour() == hour
                && time.minute() == minute
                && second.is_none_or(|token| token.parse::<u32>().ok() == Some(time.second()))
        }
        _ => false,
    }
}

/// Format a NaiveTime to ISO 8601 time string.
pub fn format_iso8601_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}
