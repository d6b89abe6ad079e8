use thiserror::Error;

/// Fatal configuration mistakes, reported before any value is computed.
///
/// Data-quality problems in the values themselves never surface here;
/// those resolve to a missing result plus a [`crate::Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("mandatory argument `{0}` was not supplied")]
    MissingArgument(&'static str),
    #[error("invalid imputation rule `{0}`: expected `min` or `max`")]
    InvalidRule(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
