use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a data-quality diagnostic.
///
/// `Warning` is the default for invalid input; callers that suppress
/// warnings receive the same diagnostic downgraded to `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

impl Severity {
    /// Returns the label used in rendered diagnostic lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of value a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Date,
    Time,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Date => "date",
            ValueKind::Time => "time",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A data-quality diagnostic attached to a normalization result.
///
/// Diagnostics report invalid input values. They never abort
/// processing; the associated result is simply missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Human-readable message. Carries the original input text verbatim.
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Builds the canonical invalid-input diagnostic for a date or time.
    ///
    /// The message embeds the input exactly as received, so the source
    /// record can be located from the log line alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use crf_model::{Diagnostic, Severity, ValueKind};
    ///
    /// let diag = Diagnostic::invalid_input(ValueKind::Date, "NOTADATE", true);
    /// assert_eq!(diag.severity, Severity::Warning);
    /// assert_eq!(diag.to_string(), "WARNING: Input date is not valid: NOTADATE");
    /// ```
    pub fn invalid_input(kind: ValueKind, original: &str, warn: bool) -> Self {
        let message = format!("Input {kind} is not valid: {original}");
        if warn {
            Self::warning(message)
        } else {
            Self::info(message)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Info.to_string(), "INFO");
    }

    #[test]
    fn invalid_input_renders_canonical_line() {
        let diag = Diagnostic::invalid_input(ValueKind::Time, "25:00", true);
        assert_eq!(diag.to_string(), "WARNING: Input time is not valid: 25:00");
    }

    #[test]
    fn warn_flag_downgrades_to_info() {
        let diag = Diagnostic::invalid_input(ValueKind::Date, "BAD", false);
        assert_eq!(diag.severity, Severity::Info);
        assert_eq!(diag.to_string(), "INFO: Input date is not valid: BAD");
    }
}
