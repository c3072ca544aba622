//! Date ranges and day-by-day iteration.

use chrono::NaiveDate;
use units_core::interval::Interval;
use units_core::types::RangeError;

use crate::error::{CalendarError, Result};

/// A contiguous range of calendar dates.
///
/// Either side may be unbounded. Iterating an unbounded side runs until
/// chrono's representable limit (`NaiveDate::MIN` / `NaiveDate::MAX`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use infra_calendar::DateRange;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
/// let range = DateRange::inclusive(start, end).unwrap();
///
/// let days: Vec<_> = range.days_in_reverse().collect();
/// assert_eq!(days, vec![end, end.pred_opt().unwrap(), start]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateRange {
    interval: Interval<NaiveDate>,
}

impl DateRange {
    /// `[start, end]`
    pub fn inclusive(start: NaiveDate, end: NaiveDate) -> std::result::Result<Self, RangeError> {
        Interval::closed(start, end).map(Self::from_interval)
    }

    /// Every day from `start` on, `start` included.
    pub fn ever_from(start: NaiveDate) -> Self {
        Self::from_interval(Interval::and_more(start))
    }

    /// Every day before `end`, `end` excluded.
    pub fn ever_preceding(end: NaiveDate) -> Self {
        Self::from_interval(Interval::under(end))
    }

    /// Every day up to `end`, `end` included.
    pub fn ever_until(end: NaiveDate) -> Self {
        Self::from_interval(Interval::at_most(end))
    }

    pub fn from_interval(interval: Interval<NaiveDate>) -> Self {
        Self { interval }
    }

    pub fn as_interval(&self) -> &Interval<NaiveDate> {
        &self.interval
    }

    pub fn includes(&self, day: &NaiveDate) -> bool {
        self.interval.includes(day)
    }

    /// Both sides have a limit.
    pub fn is_bounded(&self) -> bool {
        self.interval.has_lower_limit() && self.interval.has_upper_limit()
    }

    /// The earliest day in the range, if it contains any.
    pub fn first_day(&self) -> Option<NaiveDate> {
        let first = match self.interval.lower_limit().value() {
            None => NaiveDate::MIN,
            Some(day) if self.interval.includes_lower_limit() => *day,
            Some(day) => day.succ_opt()?,
        };
        self.includes(&first).then_some(first)
    }

    /// The latest day in the range, if it contains any.
    pub fn last_day(&self) -> Option<NaiveDate> {
        let last = match self.interval.upper_limit().value() {
            None => NaiveDate::MAX,
            Some(day) if self.interval.includes_upper_limit() => *day,
            Some(day) => day.pred_opt()?,
        };
        self.includes(&last).then_some(last)
    }

    /// Number of days in a bounded range.
    pub fn length_in_days(&self) -> Result<i64> {
        if !self.is_bounded() {
            return Err(CalendarError::UnboundedRange);
        }
        Ok(match (self.first_day(), self.last_day()) {
            (Some(first), Some(last)) => (last - first).num_days() + 1,
            _ => 0,
        })
    }

    /// Ascending iterator over the days of the range.
    pub fn days(&self) -> Days {
        Days {
            range: self.interval.clone(),
            upcoming: self.first_day(),
            direction: Direction::Forward,
        }
    }

    /// Descending iterator over the days of the range.
    pub fn days_in_reverse(&self) -> Days {
        Days {
            range: self.interval.clone(),
            upcoming: self.last_day(),
            direction: Direction::Reverse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

/// Day-by-day iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    range: Interval<NaiveDate>,
    upcoming: Option<NaiveDate>,
    direction: Direction,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.upcoming.take()?;
        if !self.range.includes(&current) {
            return None;
        }
        self.upcoming = match self.direction {
            Direction::Forward => current.succ_opt(),
            Direction::Reverse => current.pred_opt(),
        };
        Some(current)
    }
}

impl std::iter::FusedIterator for Days {}
