//! Calendar errors.

use thiserror::Error;
use units_core::types::RangeError;

/// Errors that can occur during business-day calculations.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Negative business-day offset
    #[error("Negative business-day count: {0}")]
    NegativeCount(i64),

    /// Range without an end where a finite one is required
    #[error("Date range is unbounded")]
    UnboundedRange,

    /// Unknown calendar identifier
    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    /// Interval or iteration contract violation
    #[error("Range error: {0}")]
    Range(#[from] RangeError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] infra_config::ConfigError),
}

/// Result type for calendar operations
pub type Result<T> = std::result::Result<T, CalendarError>;
