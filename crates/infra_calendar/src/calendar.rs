//! Business-day calendars.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use infra_config::{CalendarConfig, Settings};
use tracing::{debug, info};
use units_core::spec::{DateRule, DateSpecification, Specification};
use units_core::traits::Advance;

use crate::business_days::BusinessDays;
use crate::error::{CalendarError, Result};
use crate::range::DateRange;

/// Calendar identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarId {
    /// TARGET (Trans-European Automated Real-time Gross Settlement Express Transfer)
    Target,
    /// New York
    NewYork,
    /// Tokyo
    Tokyo,
    /// London
    London,
    /// Weekend only (Saturday/Sunday)
    WeekendOnly,
}

impl CalendarId {
    /// Holiday rule of this calendar (simplified, fixed-date holidays only
    /// apart from US Thanksgiving).
    pub fn holidays(self) -> DateSpecification {
        match self {
            CalendarId::WeekendOnly => DateSpecification::never(),
            CalendarId::Target => annual_rules(&[
                (1, 1),   // New Year's Day
                (5, 1),   // Labour Day
                (12, 25), // Christmas Day
                (12, 26), // Boxing Day
            ]),
            CalendarId::NewYork => {
                annual_rules(&[
                    (1, 1),   // New Year's Day
                    (7, 4),   // Independence Day
                    (12, 25), // Christmas Day
                ]) | Specification::leaf(DateRule::NthWeekdayOfMonth {
                    month: 11,
                    weekday: Weekday::Thu,
                    n: 4,
                })
            }
            CalendarId::Tokyo => annual_rules(&[
                (1, 1), // New Year's Day
                (1, 2), // Bank Holiday
                (1, 3), // Bank Holiday
            ]),
            CalendarId::London => annual_rules(&[
                (1, 1),   // New Year's Day
                (12, 25), // Christmas Day
                (12, 26), // Boxing Day
            ]),
        }
    }
}

impl FromStr for CalendarId {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "target" => Ok(CalendarId::Target),
            "new_york" | "newyork" => Ok(CalendarId::NewYork),
            "tokyo" => Ok(CalendarId::Tokyo),
            "london" => Ok(CalendarId::London),
            "weekend_only" | "weekendonly" => Ok(CalendarId::WeekendOnly),
            _ => Err(CalendarError::CalendarNotFound(s.to_string())),
        }
    }
}

fn annual_rules(days: &[(u32, u32)]) -> DateSpecification {
    days.iter()
        .map(|&(month, day)| Specification::leaf(DateRule::Annual { month, day }))
        .fold(DateSpecification::never(), DateSpecification::or)
}

/// Holiday calendar for business day calculations.
///
/// Saturdays and Sundays are never business days. Holidays accumulate
/// and cannot be removed: one-off dates are kept in a flat set, other
/// rules are OR-ed into a [`DateSpecification`] that starts out as "never".
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use infra_calendar::BusinessCalendar;
///
/// let mut calendar = BusinessCalendar::new();
/// calendar.add_holiday(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
///
/// // Friday + 1 business day skips the weekend and the Monday holiday.
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
/// let next = calendar.plus_business_days(friday, 1).unwrap();
/// assert_eq!(next, NaiveDate::from_ymd_opt(2026, 1, 13).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessCalendar {
    dates: BTreeSet<NaiveDate>,
    rules: DateSpecification,
}

impl BusinessCalendar {
    /// A calendar with weekends and no holidays.
    pub fn new() -> Self {
        Self {
            dates: BTreeSet::new(),
            rules: DateSpecification::never(),
        }
    }

    /// A calendar starting from a preset holiday rule.
    pub fn preset(id: CalendarId) -> Self {
        debug!(calendar = ?id, "building preset calendar");
        Self {
            dates: BTreeSet::new(),
            rules: id.holidays(),
        }
    }

    /// Build a calendar from configuration.
    ///
    /// Starts from the configured preset (if any), then adds one-off and
    /// annual holidays.
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        let mut calendar = match config.preset.as_deref() {
            Some(id) => Self::preset(id.parse()?),
            None => Self::new(),
        };

        calendar.add_holidays(config.holidays.iter().copied());
        for holiday in &config.annual_holidays {
            calendar.add_holiday_spec(DateSpecification::annual(holiday.month, holiday.day)?);
        }

        info!(
            preset = ?config.preset,
            holidays = config.holidays.len(),
            annual_holidays = config.annual_holidays.len(),
            "business calendar configured"
        );
        Ok(calendar)
    }

    /// Build a calendar from the settings found in the environment.
    ///
    /// See [`Settings::load`] for the sources consulted.
    pub fn load() -> Result<Self> {
        let settings = Settings::load()?;
        Self::from_config(&settings.calendar)
    }

    /// The accumulated holiday rule as a single specification.
    pub fn holiday_spec(&self) -> DateSpecification {
        DateSpecification::one_of(self.dates.iter().copied()).or(self.rules.clone())
    }

    /// Mark a single date as a holiday.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        debug!(%date, "adding holiday");
        self.dates.insert(date);
    }

    /// Mark each of `dates` as a holiday.
    pub fn add_holidays<I>(&mut self, dates: I)
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let before = self.dates.len();
        self.dates.extend(dates);
        debug!(added = self.dates.len() - before, "adding holidays");
    }

    /// Treat every date satisfying `spec` as a holiday.
    pub fn add_holiday_spec(&mut self, spec: DateSpecification) {
        debug!(?spec, "adding holiday rule");
        let current = std::mem::replace(&mut self.rules, DateSpecification::never());
        self.rules = current.or(spec);
    }

    /// Check if a date falls on Saturday or Sunday.
    pub fn is_weekend(&self, day: NaiveDate) -> bool {
        matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Check if a date is a holiday (regardless of weekday).
    pub fn is_holiday(&self, day: NaiveDate) -> bool {
        self.dates.contains(&day) || self.rules.is_satisfied_by(&day)
    }

    /// Check if a date is a business day.
    pub fn is_business_day(&self, day: NaiveDate) -> bool {
        !self.is_weekend(day) && !self.is_holiday(day)
    }

    /// Lazily filter `days` down to business days.
    pub fn business_days_only<I>(&self, days: I) -> BusinessDays<'_, I::IntoIter>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        BusinessDays::new(self, days.into_iter())
    }

    /// Lazily list the holidays falling in `range`, weekends included.
    pub fn holidays_in<'a>(&'a self, range: &DateRange) -> impl Iterator<Item = NaiveDate> + 'a {
        range.days().filter(move |day| self.is_holiday(*day))
    }

    /// Count the business days in a bounded range.
    ///
    /// # Returns
    ///
    /// * `Ok(count)` - Number of business days in `range`
    /// * `Err(CalendarError::UnboundedRange)` - `range` has an unbounded side
    pub fn elapsed_business_days(&self, range: &DateRange) -> Result<usize> {
        if !range.is_bounded() {
            return Err(CalendarError::UnboundedRange);
        }
        Ok(self.business_days_only(range.days()).count())
    }

    /// The (`number_of_days` + 1)-th business day on or after `start`.
    ///
    /// `0` gives the first business day at or after `start`.
    ///
    /// Does not return if no later date is ever a business day.
    ///
    /// # Returns
    ///
    /// * `Ok(date)` - The business day found
    /// * `Err(CalendarError::NegativeCount)` - `number_of_days < 0`
    /// * `Err(CalendarError::Range(ExhaustedIterator))` - Ran past `NaiveDate::MAX`
    pub fn plus_business_days(&self, start: NaiveDate, number_of_days: i64) -> Result<NaiveDate> {
        let skip = checked_count(number_of_days)?;
        let days = self.business_days_only(DateRange::ever_from(start).days());
        nth_business_day(days, skip)
    }

    /// The (`number_of_days` + 1)-th business day on or before `start`.
    ///
    /// `0` gives the first business day at or before `start`.
    pub fn minus_business_days(&self, start: NaiveDate, number_of_days: i64) -> Result<NaiveDate> {
        let skip = checked_count(number_of_days)?;
        let days = self.business_days_only(DateRange::ever_until(start).days_in_reverse());
        nth_business_day(days, skip)
    }

    /// The first business day strictly after `start`.
    pub fn next_business_day(&self, start: NaiveDate) -> Result<NaiveDate> {
        if self.is_business_day(start) {
            self.plus_business_days(start, 1)
        } else {
            self.plus_business_days(start, 0)
        }
    }

    /// The last business day strictly before `start`.
    pub fn prev_business_day(&self, start: NaiveDate) -> Result<NaiveDate> {
        if self.is_business_day(start) {
            self.minus_business_days(start, 1)
        } else {
            self.minus_business_days(start, 0)
        }
    }

    /// `start` if it is a business day, otherwise the next one.
    pub fn nearest_next_business_day(&self, start: NaiveDate) -> Result<NaiveDate> {
        if self.is_business_day(start) {
            Ok(start)
        } else {
            self.next_business_day(start)
        }
    }

    /// `start` if it is a business day, otherwise the previous one.
    pub fn nearest_prev_business_day(&self, start: NaiveDate) -> Result<NaiveDate> {
        if self.is_business_day(start) {
            Ok(start)
        } else {
            self.prev_business_day(start)
        }
    }
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_count(number_of_days: i64) -> Result<u64> {
    u64::try_from(number_of_days).map_err(|_| CalendarError::NegativeCount(number_of_days))
}

fn nth_business_day<I>(mut days: BusinessDays<'_, I>, skip: u64) -> Result<NaiveDate>
where
    I: Iterator<Item = NaiveDate>,
{
    for _ in 0..skip {
        days.advance()?;
    }
    Ok(days.advance()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_config::AnnualHoliday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_not_business_day() {
        let calendar = BusinessCalendar::preset(CalendarId::WeekendOnly);
        // Saturday
        let saturday = date(2026, 1, 10);
        assert!(calendar.is_weekend(saturday));
        assert!(!calendar.is_business_day(saturday));
        // Monday
        let monday = date(2026, 1, 5);
        assert!(!calendar.is_weekend(monday));
        assert!(calendar.is_business_day(monday));
    }

    #[test]
    fn test_holidays_accumulate() {
        let mut calendar = BusinessCalendar::new();
        assert!(!calendar.is_holiday(date(2026, 1, 5)));

        calendar.add_holiday(date(2026, 1, 5));
        calendar.add_holidays([date(2026, 1, 6), date(2026, 1, 7)]);
        calendar.add_holiday_spec(DateSpecification::annual(3, 20).unwrap());

        assert!(calendar.is_holiday(date(2026, 1, 5)));
        assert!(calendar.is_holiday(date(2026, 1, 6)));
        assert!(calendar.is_holiday(date(2026, 1, 7)));
        assert!(calendar.is_holiday(date(2030, 3, 20)));
        assert!(!calendar.is_holiday(date(2026, 1, 8)));
        assert!(calendar.is_business_day(date(2026, 1, 8)));
    }

    #[test]
    fn test_many_one_off_holidays() {
        let mut calendar = BusinessCalendar::new();
        let start = date(1800, 1, 1);
        calendar.add_holidays(start.iter_days().take(100_000));

        // 100k days from 1800-01-01 runs into 2073
        assert!(calendar.is_holiday(date(1990, 1, 2)));
        assert!(!calendar.is_business_day(date(1990, 1, 2)));
        assert!(calendar.is_business_day(date(2080, 1, 2)));
        assert!(calendar.holiday_spec().is_satisfied_by(&date(2000, 6, 1)));

        let copy = calendar.clone();
        assert_eq!(copy, calendar);
    }

    #[test]
    fn test_holiday_spec_combines_dates_and_rules() {
        let mut calendar = BusinessCalendar::new();
        calendar.add_holiday(date(2026, 3, 2));
        calendar.add_holiday_spec(DateSpecification::annual(8, 15).unwrap());

        let spec = calendar.holiday_spec();
        assert!(spec.is_satisfied_by(&date(2026, 3, 2)));
        assert!(spec.is_satisfied_by(&date(2031, 8, 15)));
        assert!(!spec.is_satisfied_by(&date(2027, 3, 2)));
    }

    #[test]
    fn test_holiday_on_weekend_is_still_holiday() {
        let mut calendar = BusinessCalendar::new();
        calendar.add_holiday(date(2026, 7, 4));
        assert!(calendar.is_holiday(date(2026, 7, 4)));
        assert!(calendar.is_weekend(date(2026, 7, 4)));
    }

    #[test]
    fn test_add_business_days() {
        let calendar = BusinessCalendar::preset(CalendarId::WeekendOnly);
        let friday = date(2026, 1, 9);
        let monday = calendar.plus_business_days(friday, 1).unwrap();
        assert_eq!(monday, date(2026, 1, 12));
    }

    #[test]
    fn test_plus_zero_business_days() {
        let calendar = BusinessCalendar::new();
        assert_eq!(calendar.plus_business_days(date(2026, 1, 9), 0).unwrap(), date(2026, 1, 9));
        assert_eq!(calendar.plus_business_days(date(2026, 1, 10), 0).unwrap(), date(2026, 1, 12));
    }

    #[test]
    fn test_plus_business_days_skips_holidays() {
        let calendar = BusinessCalendar::preset(CalendarId::Target);
        // Thu 2026-12-24 + 1 skips Christmas (Fri) and the weekend.
        assert_eq!(calendar.plus_business_days(date(2026, 12, 24), 1).unwrap(), date(2026, 12, 28));
        assert_eq!(calendar.plus_business_days(date(2026, 12, 24), 5).unwrap(), date(2027, 1, 4));
    }

    #[test]
    fn test_minus_business_days() {
        let calendar = BusinessCalendar::new();
        let monday = date(2026, 1, 12);
        assert_eq!(calendar.minus_business_days(monday, 0).unwrap(), monday);
        assert_eq!(calendar.minus_business_days(monday, 1).unwrap(), date(2026, 1, 9));
        assert_eq!(calendar.minus_business_days(date(2026, 1, 11), 0).unwrap(), date(2026, 1, 9));
    }

    #[test]
    fn test_negative_count_rejected() {
        let calendar = BusinessCalendar::new();
        assert!(matches!(
            calendar.plus_business_days(date(2026, 1, 5), -1),
            Err(CalendarError::NegativeCount(-1))
        ));
        assert!(matches!(
            calendar.minus_business_days(date(2026, 1, 5), -3),
            Err(CalendarError::NegativeCount(-3))
        ));
    }

    #[test]
    fn test_next_and_prev_business_day() {
        let calendar = BusinessCalendar::new();
        // Business day: strictly next/previous one
        assert_eq!(calendar.next_business_day(date(2026, 1, 9)).unwrap(), date(2026, 1, 12));
        assert_eq!(calendar.prev_business_day(date(2026, 1, 12)).unwrap(), date(2026, 1, 9));
        // Weekend: first business day on the far side
        assert_eq!(calendar.next_business_day(date(2026, 1, 10)).unwrap(), date(2026, 1, 12));
        assert_eq!(calendar.prev_business_day(date(2026, 1, 11)).unwrap(), date(2026, 1, 9));
    }

    #[test]
    fn test_nearest_business_days() {
        let calendar = BusinessCalendar::new();
        let monday = date(2026, 1, 12);
        assert_eq!(calendar.nearest_next_business_day(monday).unwrap(), monday);
        assert_eq!(calendar.nearest_prev_business_day(monday).unwrap(), monday);

        let saturday = date(2026, 1, 10);
        assert_eq!(calendar.nearest_next_business_day(saturday).unwrap(), monday);
        assert_eq!(calendar.nearest_prev_business_day(saturday).unwrap(), date(2026, 1, 9));
    }

    #[test]
    fn test_elapsed_business_days() {
        let calendar = BusinessCalendar::preset(CalendarId::Tokyo);
        let january = DateRange::inclusive(date(2026, 1, 1), date(2026, 1, 31)).unwrap();
        // 22 weekdays in January 2026, less Jan 1 (Thu) and Jan 2 (Fri)
        assert_eq!(calendar.elapsed_business_days(&january).unwrap(), 20);
    }

    #[test]
    fn test_elapsed_business_days_requires_bounded_range() {
        let calendar = BusinessCalendar::new();
        let range = DateRange::ever_from(date(2026, 1, 1));
        assert!(matches!(
            calendar.elapsed_business_days(&range),
            Err(CalendarError::UnboundedRange)
        ));
    }

    #[test]
    fn test_holidays_in() {
        let calendar = BusinessCalendar::preset(CalendarId::NewYork);
        let year = DateRange::inclusive(date(2026, 1, 1), date(2026, 12, 31)).unwrap();
        let holidays: Vec<_> = calendar.holidays_in(&year).collect();
        assert_eq!(
            holidays,
            vec![date(2026, 1, 1), date(2026, 7, 4), date(2026, 11, 26), date(2026, 12, 25)]
        );
    }

    #[test]
    fn test_calendar_id_from_str() {
        assert_eq!("target".parse::<CalendarId>().unwrap(), CalendarId::Target);
        assert_eq!("New_York".parse::<CalendarId>().unwrap(), CalendarId::NewYork);
        assert!(matches!(
            "mars".parse::<CalendarId>(),
            Err(CalendarError::CalendarNotFound(_))
        ));
    }

    #[test]
    fn test_from_config() {
        let config = CalendarConfig {
            preset: Some("london".to_string()),
            holidays: vec![date(2026, 6, 1)],
            annual_holidays: vec![AnnualHoliday { month: 8, day: 31 }],
        };
        let calendar = BusinessCalendar::from_config(&config).unwrap();
        assert!(calendar.is_holiday(date(2026, 12, 26)));
        assert!(calendar.is_holiday(date(2026, 6, 1)));
        assert!(calendar.is_holiday(date(2027, 8, 31)));
        assert!(!calendar.is_holiday(date(2027, 6, 1)));
    }

    #[test]
    fn test_from_config_unknown_preset() {
        let config = CalendarConfig {
            preset: Some("atlantis".to_string()),
            ..CalendarConfig::default()
        };
        assert!(matches!(
            BusinessCalendar::from_config(&config),
            Err(CalendarError::CalendarNotFound(_))
        ));
    }

    #[test]
    fn test_from_config_invalid_annual_holiday() {
        let config = CalendarConfig {
            annual_holidays: vec![AnnualHoliday { month: 4, day: 31 }],
            ..CalendarConfig::default()
        };
        assert!(matches!(
            BusinessCalendar::from_config(&config),
            Err(CalendarError::Range(_))
        ));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = NaiveDate> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32).prop_filter_map(
                "valid date",
                |(year, month, day)| NaiveDate::from_ymd_opt(year, month, day),
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(300))]

            #[test]
            fn test_nearest_brackets_non_business_days(day in date_strategy()) {
                let calendar = BusinessCalendar::preset(CalendarId::Target);
                let next = calendar.nearest_next_business_day(day).unwrap();
                let prev = calendar.nearest_prev_business_day(day).unwrap();

                prop_assert!(calendar.is_business_day(next));
                prop_assert!(calendar.is_business_day(prev));
                prop_assert!(prev <= day && day <= next);

                if !calendar.is_business_day(day) {
                    prop_assert!(prev < day && day < next);
                    let between = DateRange::from_interval(
                        units_core::interval::Interval::open(prev, next).unwrap(),
                    );
                    prop_assert_eq!(calendar.elapsed_business_days(&between).unwrap(), 0);
                }

                // Idempotent once on a business day
                prop_assert_eq!(calendar.nearest_next_business_day(next).unwrap(), next);
                prop_assert_eq!(calendar.nearest_prev_business_day(prev).unwrap(), prev);
            }

            #[test]
            fn test_plus_then_count(day in date_strategy(), n in 0i64..30) {
                let calendar = BusinessCalendar::preset(CalendarId::NewYork);
                let target = calendar.plus_business_days(day, n).unwrap();
                let range = DateRange::inclusive(day, target).unwrap();
                prop_assert_eq!(calendar.elapsed_business_days(&range).unwrap() as i64, n + 1);
            }

            #[test]
            fn test_negative_counts_always_rejected(day in date_strategy(), n in i64::MIN..0) {
                let calendar = BusinessCalendar::new();
                prop_assert!(
                    matches!(
                        calendar.plus_business_days(day, n),
                        Err(CalendarError::NegativeCount(_))
                    ),
                    "plus_business_days({}, {}) should be rejected",
                    day,
                    n
                );
                prop_assert!(
                    matches!(
                        calendar.minus_business_days(day, n),
                        Err(CalendarError::NegativeCount(_))
                    ),
                    "minus_business_days({}, {}) should be rejected",
                    day,
                    n
                );
            }
        }
    }
}
