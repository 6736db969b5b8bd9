//! Validation errors for request arguments

use thiserror::Error;

/// Errors raised while validating caller-supplied arguments.
///
/// These are always produced before any network activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// K-line period outside the allow-list
    #[error("Period selected is not in allowed period: {0}")]
    InvalidPeriod(u32),

    /// Depth step outside the allow-list
    #[error("Step selected is not in allowed steps: {0}")]
    InvalidStep(String),

    /// Date argument does not match `YYYY-MM-DD HH:MM:SS`
    #[error("{field} pattern mismatch: {value:?}")]
    InvalidDate {
        /// Argument name (e.g. `start_date`)
        field: &'static str,
        /// Rejected value
        value: String,
    },
}

/// Result type for argument validation
pub type TypeResult<T> = Result<T, TypeError>;
