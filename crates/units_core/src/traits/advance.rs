//! Fallible iteration.

use crate::types::RangeError;

/// Advance an iterator, treating its end as a contract violation.
///
/// `Iterator::next` reports the end with `None`. Callers that have
/// already established there is another element use `advance` instead,
/// so running past the end surfaces as `RangeError::ExhaustedIterator`.
///
/// # Examples
///
/// ```
/// use units_core::traits::Advance;
/// use units_core::types::RangeError;
///
/// let mut values = [1, 2].into_iter();
/// assert_eq!(values.advance(), Ok(1));
/// assert_eq!(values.advance(), Ok(2));
/// assert_eq!(values.advance(), Err(RangeError::ExhaustedIterator));
/// ```
pub trait Advance: Iterator {
    /// Return the next element or fail with `ExhaustedIterator`.
    fn advance(&mut self) -> Result<Self::Item, RangeError> {
        self.next().ok_or(RangeError::ExhaustedIterator)
    }
}

impl<I: Iterator + ?Sized> Advance for I {}
