//! Lazy business-day filtering.

use std::iter::FusedIterator;

use chrono::NaiveDate;
use tracing::trace;

use crate::calendar::BusinessCalendar;

/// Iterator adapter yielding only the business days of its input.
///
/// Holds a one-element look-ahead so [`BusinessDays::has_next`] can
/// answer without losing a day. The input is consumed as the adapter is
/// advanced and must not be advanced separately. Whether the output is
/// finite depends on the input.
///
/// Created by [`BusinessCalendar::business_days_only`].
#[derive(Debug)]
pub struct BusinessDays<'a, I> {
    calendar: &'a BusinessCalendar,
    days: I,
    lookahead: Option<NaiveDate>,
    exhausted: bool,
}

impl<'a, I> BusinessDays<'a, I>
where
    I: Iterator<Item = NaiveDate>,
{
    pub(crate) fn new(calendar: &'a BusinessCalendar, days: I) -> Self {
        Self {
            calendar,
            days,
            lookahead: None,
            exhausted: false,
        }
    }

    /// Whether another business day follows.
    ///
    /// Pulls from the input until a business day is found or the input
    /// ends. On an unbounded input where no day is ever a business day
    /// this does not return.
    pub fn has_next(&mut self) -> bool {
        self.fill();
        self.lookahead.is_some()
    }

    fn fill(&mut self) {
        if self.lookahead.is_some() || self.exhausted {
            return;
        }
        let calendar = self.calendar;
        self.lookahead = self.days.find(|day| calendar.is_business_day(*day));
        self.exhausted = self.lookahead.is_none();
        if self.exhausted {
            trace!("business-day input exhausted");
        }
    }
}

impl<I> Iterator for BusinessDays<'_, I>
where
    I: Iterator<Item = NaiveDate>,
{
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        self.fill();
        self.lookahead.take()
    }
}

impl<I> FusedIterator for BusinessDays<'_, I> where I: Iterator<Item = NaiveDate> {}
