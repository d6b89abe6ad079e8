//! CLI library components for the CRF date/time normalizer.

pub mod batch;
pub mod logging;
pub mod report;
