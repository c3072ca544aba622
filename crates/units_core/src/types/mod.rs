//! Shared error types.
//!
//! This module provides:
//! - `error`: Structured error type for interval and iteration contracts

pub mod error;

pub use error::RangeError;
