//! Imputation and combination policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rule for filling unknown-day/unknown-month placeholders in a
/// partial date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImputationRule {
    /// Earliest consistent calendar date: unknown month becomes
    /// January, unknown day becomes the 1st.
    #[default]
    Min,
    /// Latest consistent calendar date: unknown month becomes
    /// December, unknown day becomes the last day of the month.
    Max,
}

impl ImputationRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImputationRule::Min => "min",
            ImputationRule::Max => "max",
        }
    }
}

impl fmt::Display for ImputationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImputationRule {
    type Err = ConfigError;

    /// Parse a rule string (case-insensitive). Anything other than
    /// `min` or `max` is a configuration error, not a data problem.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MIN" => Ok(ImputationRule::Min),
            "MAX" => Ok(ImputationRule::Max),
            _ => Err(ConfigError::InvalidRule(s.to_string())),
        }
    }
}

/// Policy for combining a known date with an unknown time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTimePolicy {
    /// Substitute midnight when the time is unknown.
    #[default]
    AllowMidnight,
    /// Leave the combined value missing when the time is unknown.
    Reject,
}

impl MissingTimePolicy {
    /// Interpret the flag form: `yes` (any case) allows midnight,
    /// every other value rejects. The flag is never a configuration
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use crf_model::MissingTimePolicy;
    ///
    /// assert_eq!(MissingTimePolicy::from_flag("yes"), MissingTimePolicy::AllowMidnight);
    /// assert_eq!(MissingTimePolicy::from_flag("YES"), MissingTimePolicy::AllowMidnight);
    /// assert_eq!(MissingTimePolicy::from_flag("no"), MissingTimePolicy::Reject);
    /// assert_eq!(MissingTimePolicy::from_flag("anything"), MissingTimePolicy::Reject);
    /// ```
    pub fn from_flag(flag: &str) -> Self {
        if flag.trim().eq_ignore_ascii_case("yes") {
            MissingTimePolicy::AllowMidnight
        } else {
            MissingTimePolicy::Reject
        }
    }
}
