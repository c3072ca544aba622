//! Interval edges.
//!
//! A [`Limit`] is a concrete value or "no limit". What "no limit" means
//! depends on which side of an interval it sits on, so a raw `Limit` has
//! no ordering. Comparisons go through the two role types instead:
//!
//! - [`LowerBound`]: unbounded sorts below every concrete value
//! - [`UpperBound`]: unbounded sorts above every concrete value
//!
//! Being distinct types, a lower bound cannot be compared with an upper
//! bound through `Ord`.

use std::cmp::Ordering;

/// A boundary value, either concrete or unbounded.
///
/// # Examples
///
/// ```
/// use units_core::interval::Limit;
///
/// let five = Limit::new(5);
/// assert_eq!(five.value(), Some(&5));
/// assert!(Limit::<i32>::unbounded().is_unbounded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limit<T>(Option<T>);

impl<T> Limit<T> {
    /// Concrete limit at `value`.
    pub fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// No limit.
    pub fn unbounded() -> Self {
        Self(None)
    }

    /// The concrete value, if any.
    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn is_unbounded(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_bounded(&self) -> bool {
        self.0.is_some()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> From<Option<T>> for Limit<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

/// Lower edge of an interval.
///
/// Ordering: unbounded first, then by value; at equal values an included
/// edge comes before an excluded one (it admits more points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LowerBound<T> {
    limit: Limit<T>,
    included: bool,
}

impl<T> LowerBound<T> {
    /// Create a lower bound. An unbounded limit is never marked included.
    pub fn new(limit: Limit<T>, included: bool) -> Self {
        let included = included && limit.is_bounded();
        Self { limit, included }
    }

    pub fn unbounded() -> Self {
        Self::new(Limit::unbounded(), false)
    }

    pub fn limit(&self) -> &Limit<T> {
        &self.limit
    }

    pub fn is_included(&self) -> bool {
        self.included
    }

    pub fn is_unbounded(&self) -> bool {
        self.limit.is_unbounded()
    }

    /// Whether `value` lies on the admitted side of this edge.
    pub fn admits(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match self.limit.value() {
            None => true,
            Some(lower) if self.included => lower <= value,
            Some(lower) => lower < value,
        }
    }
}

impl<T: Ord> Ord for LowerBound<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.limit.value(), other.limit.value()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a
                .cmp(b)
                .then_with(|| other.included.cmp(&self.included)),
        }
    }
}

impl<T: Ord> PartialOrd for LowerBound<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Upper edge of an interval.
///
/// Ordering: by value, unbounded last; at equal values an excluded edge
/// comes before an included one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpperBound<T> {
    limit: Limit<T>,
    included: bool,
}

impl<T> UpperBound<T> {
    /// Create an upper bound. An unbounded limit is never marked included.
    pub fn new(limit: Limit<T>, included: bool) -> Self {
        let included = included && limit.is_bounded();
        Self { limit, included }
    }

    pub fn unbounded() -> Self {
        Self::new(Limit::unbounded(), false)
    }

    pub fn limit(&self) -> &Limit<T> {
        &self.limit
    }

    pub fn is_included(&self) -> bool {
        self.included
    }

    pub fn is_unbounded(&self) -> bool {
        self.limit.is_unbounded()
    }

    /// Whether `value` lies on the admitted side of this edge.
    pub fn admits(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match self.limit.value() {
            None => true,
            Some(upper) if self.included => value <= upper,
            Some(upper) => value < upper,
        }
    }
}

impl<T: Ord> Ord for UpperBound<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.limit.value(), other.limit.value()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b).then_with(|| self.included.cmp(&other.included)),
        }
    }
}

impl<T: Ord> PartialOrd for UpperBound<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Whether the points admitted by both `lower` and `upper` form a
/// non-empty set.
pub(crate) fn spans_points<T: Ord>(lower: &LowerBound<T>, upper: &UpperBound<T>) -> bool {
    match (lower.limit.value(), upper.limit.value()) {
        (Some(lo), Some(hi)) => match lo.cmp(hi) {
            Ordering::Less => true,
            Ordering::Equal => lower.included && upper.included,
            Ordering::Greater => false,
        },
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_edge_is_never_included() {
        let lower = LowerBound::<i32>::new(Limit::unbounded(), true);
        let upper = UpperBound::<i32>::new(Limit::unbounded(), true);
        assert!(!lower.is_included());
        assert!(!upper.is_included());
        assert_eq!(lower, LowerBound::unbounded());
        assert_eq!(upper, UpperBound::unbounded());
    }

    #[test]
    fn test_lower_bound_ordering() {
        let none = LowerBound::unbounded();
        let closed5 = LowerBound::new(Limit::new(5), true);
        let open5 = LowerBound::new(Limit::new(5), false);
        let closed6 = LowerBound::new(Limit::new(6), true);

        assert!(none < closed5);
        assert!(closed5 < open5);
        assert!(open5 < closed6);
        assert_eq!(none.cmp(&LowerBound::unbounded()), Ordering::Equal);
    }

    #[test]
    fn test_upper_bound_ordering() {
        let none = UpperBound::unbounded();
        let closed5 = UpperBound::new(Limit::new(5), true);
        let open5 = UpperBound::new(Limit::new(5), false);
        let open4 = UpperBound::new(Limit::new(4), false);

        assert!(open4 < open5);
        assert!(open5 < closed5);
        assert!(closed5 < none);
    }

    #[test]
    fn test_admits() {
        let lower = LowerBound::new(Limit::new(5), false);
        assert!(!lower.admits(&5));
        assert!(lower.admits(&6));

        let upper = UpperBound::new(Limit::new(5), true);
        assert!(upper.admits(&5));
        assert!(!upper.admits(&6));

        assert!(LowerBound::unbounded().admits(&i32::MIN));
        assert!(UpperBound::unbounded().admits(&i32::MAX));
    }

    #[test]
    fn test_spans_points() {
        let closed = |v| (LowerBound::new(Limit::new(v), true), UpperBound::new(Limit::new(v), true));
        let (lo, hi) = closed(3);
        assert!(spans_points(&lo, &hi));

        let lo = LowerBound::new(Limit::new(3), false);
        assert!(!spans_points(&lo, &hi));

        let lo = LowerBound::new(Limit::new(4), true);
        assert!(!spans_points(&lo, &hi));
        assert!(spans_points(&LowerBound::unbounded(), &hi));
    }
}
