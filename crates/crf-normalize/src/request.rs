//! Argument validation for the normalization entry points.
//!
//! The request types here model the untyped call boundary. A mandatory
//! argument whose setter was never called is a configuration mistake
//! and fails fast with [`ConfigError::MissingArgument`] before any
//! normalization runs; calling a setter with `None` supplies an
//! ordinary missing value and normalizes like any other input. Rule
//! and policy strings are parsed at this boundary too, so an illegal
//! rule never reaches the core functions.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crf_model::{ConfigError, ImputationRule, MissingTimePolicy, Result};

use crate::combine::{combine_datetime, TimeArg};
use crate::date::{normalize_date, NormalizedDate};
use crate::time::{normalize_time, NormalizedTime};

/// Request for date normalization.
///
/// # Examples
///
/// ```
/// use crf_model::ConfigError;
/// use crf_normalize::DateRequest;
///
/// // Omitting the mandatory text argument is a configuration error.
/// let err = DateRequest::new().evaluate().unwrap_err();
/// assert_eq!(err, ConfigError::MissingArgument("date"));
///
/// // A supplied-but-missing value is not.
/// let result = DateRequest::new().text(None).evaluate().unwrap();
/// assert!(result.is_missing());
/// assert!(result.diagnostic.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateRequest<'a> {
    text: Option<Option<&'a str>>,
    rule: Option<&'a str>,
    warn: Option<bool>,
}

impl<'a> DateRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the date text. `None` is a missing value, not a missing
    /// argument.
    #[must_use]
    pub fn text(mut self, text: Option<&'a str>) -> Self {
        self.text = Some(text);
        self
    }

    /// Supply the imputation rule string. Defaults to `min`.
    #[must_use]
    pub fn rule(mut self, rule: &'a str) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Control diagnostic severity. Defaults to warnings.
    #[must_use]
    pub fn warn(mut self, warn: bool) -> Self {
        self.warn = Some(warn);
        self
    }

    /// Validate the arguments and normalize.
    pub fn evaluate(self) -> Result<NormalizedDate> {
        let text = self.text.ok_or(ConfigError::MissingArgument("date"))?;
        let rule = match self.rule {
            Some(raw) => raw.parse::<ImputationRule>()?,
            None => ImputationRule::default(),
        };
        let warn = self.warn.unwrap_or(true);
        Ok(normalize_date(text, rule, warn))
    }
}

/// Request for time normalization.
#[derive(Debug, Clone, Default)]
pub struct TimeRequest<'a> {
    text: Option<Option<&'a str>>,
    warn: Option<bool>,
}

impl<'a> TimeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the time text. `None` is a missing value, not a missing
    /// argument.
    #[must_use]
    pub fn text(mut self, text: Option<&'a str>) -> Self {
        self.text = Some(text);
        self
    }

    /// Control diagnostic severity. Defaults to warnings.
    #[must_use]
    pub fn warn(mut self, warn: bool) -> Self {
        self.warn = Some(warn);
        self
    }

    /// Validate the arguments and normalize.
    pub fn evaluate(self) -> Result<NormalizedTime> {
        let text = self.text.ok_or(ConfigError::MissingArgument("time"))?;
        let warn = self.warn.unwrap_or(true);
        Ok(normalize_time(text, warn))
    }
}

/// Request for datetime combination.
///
/// The time argument is three-way: never calling [`CombineRequest::time`]
/// leaves it omitted, calling it with `None` supplies a missing time,
/// calling it with a value supplies a known time. The first two combine
/// identically.
#[derive(Debug, Clone, Default)]
pub struct CombineRequest<'a> {
    date: Option<Option<NaiveDate>>,
    time: TimeArg,
    missing_time_allowed: Option<&'a str>,
}

impl<'a> CombineRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the normalized date. `None` is a missing value, not a
    /// missing argument.
    #[must_use]
    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = Some(date);
        self
    }

    /// Supply the normalized time. `None` is a missing value.
    #[must_use]
    pub fn time(mut self, time: Option<NaiveTime>) -> Self {
        self.time = TimeArg::from(time);
        self
    }

    /// Supply the missing-time flag. `yes` (any case) substitutes
    /// midnight for an unknown time; anything else leaves the combined
    /// value missing. Defaults to `yes`.
    #[must_use]
    pub fn missing_time_allowed(mut self, flag: &'a str) -> Self {
        self.missing_time_allowed = Some(flag);
        self
    }

    /// Validate the arguments and combine.
    pub fn evaluate(self) -> Result<Option<NaiveDateTime>> {
        let date = self.date.ok_or(ConfigError::MissingArgument("date"))?;
        let policy = self
            .missing_time_allowed
            .map_or_else(MissingTimePolicy::default, MissingTimePolicy::from_flag);
        Ok(combine_datetime(date, self.time, policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omitted_date_text_is_a_config_error() {
        let err = DateRequest::new().rule("max").evaluate().unwrap_err();
        assert_eq!(err, ConfigError::MissingArgument("date"));
    }

    #[test]
    fn test_invalid_rule_is_a_config_error() {
        let err = DateRequest::new()
            .text(Some("01JAN2022"))
            .rule("median")
            .evaluate()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidRule("median".to_string()));
    }

    #[test]
    fn test_supplied_missing_text_is_not_an_error() {
        let result = DateRequest::new().text(None).evaluate().unwrap();
        assert!(result.is_missing());
        assert!(result.diagnostic.is_none());
    }

    #[test]
    fn test_omitted_time_text_is_a_config_error() {
        let err = TimeRequest::new().warn(false).evaluate().unwrap_err();
        assert_eq!(err, ConfigError::MissingArgument("time"));
    }

    #[test]
    fn test_combine_requires_date_argument() {
        let err = CombineRequest::new().evaluate().unwrap_err();
        assert_eq!(err, ConfigError::MissingArgument("date"));
    }

    #[test]
    fn test_combine_time_is_optional() {
        let date = NaiveDate::from_ymd_opt(2022, 1, 1);
        let combined = CombineRequest::new().date(date).evaluate().unwrap();
        assert_eq!(combined, date.map(|d| d.and_time(NaiveTime::MIN)));
    }

    #[test]
    fn test_policy_flag_never_errors() {
        let date = NaiveDate::from_ymd_opt(2022, 1, 1);
        let combined = CombineRequest::new()
            .date(date)
            .missing_time_allowed("whatever")
            .evaluate()
            .unwrap();
        assert_eq!(combined, None);
    }
}
