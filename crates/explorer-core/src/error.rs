// File: crates/explorer-core/src/error.rs
// Summary: Error types for table ingestion and numeric guards.

use thiserror::Error;

use crate::axis::AxisRole;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TableError {
    #[error("file '{name}' is not a recognized MESA history/profile output")]
    UnknownFormat { name: String },
    #[error("file '{name}': header line {line} is missing")]
    MissingHeader { name: String, line: usize },
    #[error("table '{name}' has no columns")]
    NoColumns { name: String },
}

/// Reasons an axis commit is refused. Logged and skipped, never surfaced.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GuardError {
    #[error("axis {role}: non-finite delta {delta}")]
    NonFiniteDelta { role: AxisRole, delta: f64 },
    #[error("axis {role}: non-finite bounds [{min}, {max}]")]
    NonFiniteBounds { role: AxisRole, min: f64, max: f64 },
    #[error("axis {role}: logarithmic bounds must be positive, got [{min}, {max}]")]
    NonPositiveLog { role: AxisRole, min: f64, max: f64 },
}
