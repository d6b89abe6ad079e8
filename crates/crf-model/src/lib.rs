pub mod diagnostic;
pub mod error;
pub mod policy;

pub use diagnostic::{Diagnostic, Severity, ValueKind};
pub use error::{ConfigError, Result};
pub use policy::{ImputationRule, MissingTimePolicy};
