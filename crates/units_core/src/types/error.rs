//! Range error types for structured error handling.

use thiserror::Error;

/// Categorised range errors.
///
/// All variants describe caller contract violations. Nothing in this
/// crate retries or recovers from them.
///
/// # Variants
/// - `IllegalRange`: Interval constructed with its lower edge past its upper edge
/// - `EmptyExtent`: Extent requested on a sequence with no intervals
/// - `ExhaustedIterator`: Iteration advanced past its last element
/// - `InvalidDate`: Month/day combination that never occurs in any year
///
/// # Examples
/// ```
/// use units_core::types::RangeError;
///
/// let err = RangeError::EmptyExtent;
/// assert_eq!(format!("{}", err), "Extent requested on an empty interval sequence");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Lower limit lies above upper limit
    #[error("Illegal range: lower limit {lower} is greater than upper limit {upper}")]
    IllegalRange { lower: String, upper: String },

    /// Extent of an empty sequence
    #[error("Extent requested on an empty interval sequence")]
    EmptyExtent,

    /// Iterator advanced past its end
    #[error("Iterator advanced past its last element")]
    ExhaustedIterator,

    /// Invalid month/day rule
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
