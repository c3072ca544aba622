//! # units_core
//!
//! Interval algebra and composable specifications.
//!
//! This crate provides:
//! - `interval`: Intervals with possibly-unbounded edges, and sorted
//!   interval sequences with overlap, gap and extent queries
//! - `spec`: Composable boolean predicates and calendar-date rules
//! - `traits`: Fallible iteration (`Advance`)
//! - `types`: Structured error type (`RangeError`)
//!
//! ## Example
//!
//! ```rust
//! use units_core::interval::{Interval, IntervalSeq};
//!
//! let seq: IntervalSeq<i32> = [
//!     Interval::closed(5, 10).unwrap(),
//!     Interval::closed(20, 25).unwrap(),
//! ]
//! .into_iter()
//! .collect();
//!
//! let gaps: Vec<_> = seq.gaps().collect();
//! assert_eq!(gaps, vec![Interval::open(10, 20).unwrap()]);
//! ```

pub mod interval;
pub mod spec;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::interval::{Interval, IntervalSeq, Limit, LowerBound, UpperBound};
    pub use crate::spec::{DateRule, DateSpecification, Predicate, Specification};
    pub use crate::traits::Advance;
    pub use crate::types::RangeError;
}
