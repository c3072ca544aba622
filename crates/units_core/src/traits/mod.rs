//! Core traits shared across the workspace.
//!
//! This module defines:
//! - Fallible iteration (`Advance` trait)

pub mod advance;

pub use advance::Advance;
