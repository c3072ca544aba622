//! Intervals over totally ordered values.
//!
//! An [`Interval`] is a contiguous range between a [`LowerBound`] and an
//! [`UpperBound`], each edge either concrete (included or excluded) or
//! unbounded. Intervals are immutable; every operation returns a new one.
//!
//! ## Submodules
//! - `limit`: Edge values and their role-aware orderings
//! - `seq`: Sorted collections of intervals with overlap, gap and extent queries

pub mod limit;
pub mod seq;

pub use limit::{Limit, LowerBound, UpperBound};
pub use seq::IntervalSeq;

use std::cmp::Ordering;
use std::fmt;

use crate::types::RangeError;
use limit::spans_points;

/// A contiguous range of `T` with independently included edges.
///
/// Equality is structural: `[5, 5]` and `(5, 5)` are different values
/// even though both are degenerate.
///
/// # Ordering
///
/// Intervals order by lower bound, then by upper bound. Unbounded lower
/// edges sort first and unbounded upper edges sort last.
///
/// # Examples
///
/// ```
/// use units_core::interval::Interval;
///
/// let a = Interval::closed(5, 10).unwrap();
/// let b = Interval::open(10, 12).unwrap();
///
/// assert!(a.includes(&10));
/// assert!(!b.includes(&10));
/// assert!(!a.intersects(&b));
/// assert_eq!(a.gap(&b), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: LowerBound<T>,
    upper: UpperBound<T>,
}

impl<T: Ord + fmt::Debug> Interval<T> {
    /// Construct an interval from optional edges and their inclusion flags.
    ///
    /// `None` means the edge is unbounded; its inclusion flag is ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(Interval)` - Both edges are unbounded or `lower <= upper`
    /// * `Err(RangeError::IllegalRange)` - Both edges are concrete and `lower > upper`
    ///
    /// # Examples
    ///
    /// ```
    /// use units_core::interval::Interval;
    ///
    /// let under = Interval::over(None, false, Some(18), false).unwrap();
    /// assert!(under.includes(&-1_000));
    /// assert!(!under.includes(&18));
    ///
    /// assert!(Interval::over(Some(3), true, Some(2), true).is_err());
    /// ```
    pub fn over(
        lower: Option<T>,
        lower_included: bool,
        upper: Option<T>,
        upper_included: bool,
    ) -> Result<Self, RangeError> {
        if let (Some(lo), Some(hi)) = (&lower, &upper) {
            if lo > hi {
                return Err(RangeError::IllegalRange {
                    lower: format!("{:?}", lo),
                    upper: format!("{:?}", hi),
                });
            }
        }

        Ok(Self::from_bounds(
            LowerBound::new(lower.into(), lower_included),
            UpperBound::new(upper.into(), upper_included),
        ))
    }

    /// `[lower, upper]`
    pub fn closed(lower: T, upper: T) -> Result<Self, RangeError> {
        Self::over(Some(lower), true, Some(upper), true)
    }

    /// `(lower, upper)`
    pub fn open(lower: T, upper: T) -> Result<Self, RangeError> {
        Self::over(Some(lower), false, Some(upper), false)
    }
}

impl<T> Interval<T> {
    pub(crate) fn from_bounds(lower: LowerBound<T>, upper: UpperBound<T>) -> Self {
        Self { lower, upper }
    }

    /// `(-inf, upper)`
    pub fn under(upper: T) -> Self {
        Self::from_bounds(LowerBound::unbounded(), UpperBound::new(Limit::new(upper), false))
    }

    /// `(-inf, upper]`
    pub fn at_most(upper: T) -> Self {
        Self::from_bounds(LowerBound::unbounded(), UpperBound::new(Limit::new(upper), true))
    }

    /// `[lower, +inf)`
    pub fn and_more(lower: T) -> Self {
        Self::from_bounds(LowerBound::new(Limit::new(lower), true), UpperBound::unbounded())
    }

    /// `[lower, +inf)`, alias of [`Interval::and_more`].
    pub fn at_least(lower: T) -> Self {
        Self::and_more(lower)
    }

    /// `(lower, +inf)`
    pub fn more_than(lower: T) -> Self {
        Self::from_bounds(LowerBound::new(Limit::new(lower), false), UpperBound::unbounded())
    }

    /// `(-inf, +inf)`
    pub fn unbounded() -> Self {
        Self::from_bounds(LowerBound::unbounded(), UpperBound::unbounded())
    }

    pub fn lower_bound(&self) -> &LowerBound<T> {
        &self.lower
    }

    pub fn upper_bound(&self) -> &UpperBound<T> {
        &self.upper
    }

    /// Raw lower edge. Inclusion is reported by [`Interval::includes_lower_limit`].
    pub fn lower_limit(&self) -> &Limit<T> {
        self.lower.limit()
    }

    /// Raw upper edge. Inclusion is reported by [`Interval::includes_upper_limit`].
    pub fn upper_limit(&self) -> &Limit<T> {
        self.upper.limit()
    }

    pub fn includes_lower_limit(&self) -> bool {
        self.lower.is_included()
    }

    pub fn includes_upper_limit(&self) -> bool {
        self.upper.is_included()
    }

    pub fn has_lower_limit(&self) -> bool {
        !self.lower.is_unbounded()
    }

    pub fn has_upper_limit(&self) -> bool {
        !self.upper.is_unbounded()
    }

    /// Neither edge is included.
    pub fn is_open(&self) -> bool {
        !self.includes_lower_limit() && !self.includes_upper_limit()
    }

    /// Both edges are concrete and included.
    pub fn is_closed(&self) -> bool {
        self.includes_lower_limit() && self.includes_upper_limit()
    }
}

impl<T: Clone> Interval<T> {
    /// `[value, value]`
    pub fn single_element(value: T) -> Self {
        Self::from_bounds(
            LowerBound::new(Limit::new(value.clone()), true),
            UpperBound::new(Limit::new(value), true),
        )
    }

    /// The empty interval `(at, at)`.
    pub fn empty(at: T) -> Self {
        Self::from_bounds(
            LowerBound::new(Limit::new(at.clone()), false),
            UpperBound::new(Limit::new(at), false),
        )
    }
}

impl<T: Ord> Interval<T> {
    /// Whether `value` satisfies both edges.
    pub fn includes(&self, value: &T) -> bool {
        self.lower.admits(value) && self.upper.admits(value)
    }

    /// True iff the interval contains no points.
    pub fn is_empty(&self) -> bool {
        !spans_points(&self.lower, &self.upper)
    }

    pub fn is_single_element(&self) -> bool {
        match (self.lower_limit().value(), self.upper_limit().value()) {
            (Some(lo), Some(hi)) => lo == hi && self.is_closed(),
            _ => false,
        }
    }

    /// Every point of the interval lies below `value`.
    pub fn is_below(&self, value: &T) -> bool {
        !self.upper.admits(value)
    }

    /// Every point of the interval lies above `value`.
    pub fn is_above(&self, value: &T) -> bool {
        !self.lower.admits(value)
    }

    /// Whether every point of `other` is also a point of `self`.
    ///
    /// The empty interval is covered by every interval.
    pub fn covers(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Whether the two intervals share at least one point.
    pub fn intersects(&self, other: &Self) -> bool {
        let lower = (&self.lower).max(&other.lower);
        let upper = (&self.upper).min(&other.upper);
        spans_points(lower, upper)
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// The set intersection of two intervals.
    ///
    /// Each edge comes from whichever input is tighter on that side; when
    /// both inputs share the edge value it is included only if both
    /// include it. Disjoint inputs yield an empty interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use units_core::interval::Interval;
    ///
    /// let a = Interval::over(Some(10), false, Some(12), true).unwrap();
    /// let b = Interval::over(Some(11), false, Some(20), true).unwrap();
    /// assert_eq!(a.intersect(&b), Interval::over(Some(11), false, Some(12), true).unwrap());
    /// ```
    pub fn intersect(&self, other: &Self) -> Self {
        let lower = (&self.lower).max(&other.lower).clone();
        let upper = (&self.upper).min(&other.upper).clone();

        match (lower.limit().value(), upper.limit().value()) {
            (Some(lo), Some(hi)) if lo > hi => Self::empty(hi.clone()),
            _ => Self::from_bounds(lower, upper),
        }
    }

    /// The interval lying strictly between two non-intersecting intervals.
    ///
    /// # Returns
    ///
    /// * `Some(gap)` - The points between the earlier interval's upper edge
    ///   and the later interval's lower edge
    /// * `None` - The intervals intersect, either one is empty, or they
    ///   touch so that their union is already contiguous
    ///
    /// # Examples
    ///
    /// ```
    /// use units_core::interval::Interval;
    ///
    /// let a = Interval::closed(20, 25).unwrap();
    /// let b = Interval::open(30, 35).unwrap();
    /// assert_eq!(a.gap(&b), Some(Interval::over(Some(25), false, Some(30), true).unwrap()));
    /// assert_eq!(b.gap(&a), a.gap(&b));
    /// ```
    pub fn gap(&self, other: &Self) -> Option<Self> {
        if self.is_empty() || other.is_empty() || self.intersects(other) {
            return None;
        }

        let (earlier, later) = if self.lower <= other.lower {
            (self, other)
        } else {
            (other, self)
        };

        let gap = Self::from_bounds(
            LowerBound::new(earlier.upper.limit().clone(), !earlier.upper.is_included()),
            UpperBound::new(later.lower.limit().clone(), !later.lower.is_included()),
        );

        (!gap.is_empty()).then_some(gap)
    }

    /// The parts of `other` not covered by `self`, in ascending order.
    pub fn complement_relative_to(&self, other: &Self) -> Vec<Self> {
        if other.is_empty() {
            return Vec::new();
        }
        if !self.intersects(other) {
            return vec![other.clone()];
        }

        let mut parts = Vec::with_capacity(2);

        if other.lower < self.lower {
            let left = Self::from_bounds(
                other.lower.clone(),
                UpperBound::new(self.lower.limit().clone(), !self.lower.is_included()),
            );
            if !left.is_empty() {
                parts.push(left);
            }
        }

        if self.upper < other.upper {
            let right = Self::from_bounds(
                LowerBound::new(self.upper.limit().clone(), !self.upper.is_included()),
                other.upper.clone(),
            );
            if !right.is_empty() {
                parts.push(right);
            }
        }

        parts
    }
}

impl<T: Ord> Ord for Interval<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lower
            .cmp(&other.lower)
            .then_with(|| self.upper.cmp(&other.upper))
    }
}

impl<T: Ord> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower_limit().value() {
            Some(lo) if self.includes_lower_limit() => write!(f, "[{}", lo)?,
            Some(lo) => write!(f, "({}", lo)?,
            None => write!(f, "(-inf")?,
        }
        match self.upper_limit().value() {
            Some(hi) if self.includes_upper_limit() => write!(f, ", {}]", hi),
            Some(hi) => write!(f, ", {})", hi),
            None => write!(f, ", +inf)"),
        }
    }
}
