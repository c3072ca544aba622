//! # infra_calendar
//!
//! Business-day calendars for Baseunits.
//!
//! This crate combines the interval and specification algebra of
//! `units_core` into a calendar that decides whether a date is a
//! working day and performs business-day arithmetic:
//! - Date ranges with day-by-day iteration in either direction
//! - Accumulated holiday rules (fixed dates, annual dates, n-th weekdays)
//! - Lazy business-day filtering with look-ahead
//! - Preset holiday calendars (TARGET, NY, Tokyo, London)
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use infra_calendar::{BusinessCalendar, CalendarId};
//!
//! let calendar = BusinessCalendar::preset(CalendarId::Target);
//! assert!(calendar.is_business_day(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
//! ```

mod business_days;
mod calendar;
mod error;
mod range;

pub use business_days::BusinessDays;
pub use calendar::{BusinessCalendar, CalendarId};
pub use error::{CalendarError, Result};
pub use range::{DateRange, Days};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BusinessCalendar, BusinessDays, CalendarError, CalendarId, DateRange, Days};
}
