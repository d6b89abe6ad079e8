//! Normalization of free-text CRF dates and times.
//!
//! This crate turns partially specified clinical date and time text
//! into canonical calendar values:
//!
//! - **date**: partial-date extraction, placeholder imputation, strict parsing
//! - **time**: time-token extraction, strict parsing, component re-validation
//! - **combine**: date + time combination under a missing-time policy
//! - **request**: argument builders that fail fast on configuration mistakes

pub mod combine;
pub mod date;
pub mod request;
pub mod time;

// Re-export common items for external use
pub use combine::{combine_datetime, format_iso8601_datetime, TimeArg};
pub use date::{format_iso8601_date, normalize_date, NormalizedDate};
pub use request::{CombineRequest, DateRequest, TimeRequest};
pub use time::{format_iso8601_time, normalize_time, NormalizedTime};
