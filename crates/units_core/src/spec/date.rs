//! Calendar-date specifications.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use super::{Predicate, Specification};
use crate::types::RangeError;

/// Primitive rules over calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateRule {
    /// Never satisfied
    Never,
    /// Exactly one date
    Fixed(NaiveDate),
    /// Any date of a set
    OneOf(BTreeSet<NaiveDate>),
    /// The same month and day every year
    Annual { month: u32, day: u32 },
    /// The `n`-th given weekday of a month every year, e.g. the 4th Thursday of November
    NthWeekdayOfMonth { month: u32, weekday: Weekday, n: u8 },
}

impl Predicate<NaiveDate> for DateRule {
    fn test(&self, date: &NaiveDate) -> bool {
        match *self {
            DateRule::Never => false,
            DateRule::Fixed(fixed) => *date == fixed,
            DateRule::OneOf(ref dates) => dates.contains(date),
            DateRule::Annual { month, day } => date.month() == month && date.day() == day,
            DateRule::NthWeekdayOfMonth { month, weekday, n } => {
                date.month() == month
                    && date.weekday() == weekday
                    && (date.day() - 1) / 7 + 1 == u32::from(n)
            }
        }
    }
}

/// A composable predicate over calendar dates.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use units_core::spec::DateSpecification;
///
/// let new_year = DateSpecification::annual(1, 1).unwrap();
/// let founding = DateSpecification::fixed(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
/// let holidays = new_year | founding;
///
/// assert!(holidays.is_satisfied_by(&NaiveDate::from_ymd_opt(2031, 1, 1).unwrap()));
/// assert!(holidays.is_satisfied_by(&NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()));
/// assert!(!holidays.is_satisfied_by(&NaiveDate::from_ymd_opt(2027, 3, 2).unwrap()));
/// ```
pub type DateSpecification = Specification<DateRule>;

impl Specification<DateRule> {
    /// Never satisfied. The identity of `or`.
    pub fn never() -> Self {
        Specification::Leaf(DateRule::Never)
    }

    /// Always satisfied. The identity of `and`.
    pub fn always() -> Self {
        !Self::never()
    }

    /// Satisfied only by `date`.
    pub fn fixed(date: NaiveDate) -> Self {
        Specification::Leaf(DateRule::Fixed(date))
    }

    /// Satisfied by any of `dates`.
    ///
    /// A single flat leaf however many dates it holds.
    pub fn one_of<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Specification::Leaf(DateRule::OneOf(dates.into_iter().collect()))
    }

    /// Satisfied by `month`/`day` in every year.
    ///
    /// February 29 is accepted and only matches in leap years.
    ///
    /// # Returns
    ///
    /// * `Ok(DateSpecification)` - The month/day exists in some year
    /// * `Err(RangeError::InvalidDate)` - No year has this month/day
    pub fn annual(month: u32, day: u32) -> Result<Self, RangeError> {
        // 2000 is a leap year, so every real month/day exists in it.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(RangeError::InvalidDate(format!(
                "month {} has no day {}",
                month, day
            )));
        }
        Ok(Specification::Leaf(DateRule::Annual { month, day }))
    }

    /// Satisfied by the `n`-th `weekday` of `month` in every year.
    ///
    /// # Returns
    ///
    /// * `Ok(DateSpecification)` - `month` is in 1..=12 and `n` in 1..=5
    /// * `Err(RangeError::InvalidDate)` - Otherwise
    pub fn nth_weekday_of_month(month: u32, weekday: Weekday, n: u8) -> Result<Self, RangeError> {
        if !(1..=12).contains(&month) {
            return Err(RangeError::InvalidDate(format!("month {} out of range", month)));
        }
        if !(1..=5).contains(&n) {
            return Err(RangeError::InvalidDate(format!(
                "occurrence {} of {} out of range",
                n, weekday
            )));
        }
        Ok(Specification::Leaf(DateRule::NthWeekdayOfMonth { month, weekday, n }))
    }
}
