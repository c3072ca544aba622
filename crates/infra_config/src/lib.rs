//! # infra_config
//!
//! Calendar configuration loading.
//!
//! This crate loads business-calendar settings (TOML files and
//! environment variables): which preset holiday calendar to start from,
//! extra one-off holidays, and extra holidays recurring every year.
//!
//! ## Example
//!
//! ```rust
//! use infra_config::Settings;
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//!     [calendar]
//!     preset = "tokyo"
//!     holidays = ["2026-05-06"]
//!     annual_holidays = [{ month = 11, day = 3 }]
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(settings.calendar.holidays.len(), 1);
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{AnnualHoliday, CalendarConfig, Settings};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AnnualHoliday, CalendarConfig, ConfigError, Settings};
}
