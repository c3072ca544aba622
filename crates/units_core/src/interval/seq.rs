//! Sorted interval sequences.

use std::slice;

use super::{Interval, LowerBound, UpperBound};
use crate::types::RangeError;

/// An append-only collection of intervals, iterated in sort order.
///
/// Intervals are kept sorted by (lower bound, upper bound) regardless of
/// insertion order. Overlapping or touching members are stored as given,
/// never merged. Overlap and gap queries only look at sort-adjacent
/// pairs: with three or more mutually overlapping members, the overlap
/// between the first and the third is reported only through the
/// adjacent pairwise intersections.
///
/// # Examples
///
/// ```
/// use units_core::interval::{Interval, IntervalSeq};
///
/// let mut seq = IntervalSeq::new();
/// seq.append(Interval::closed(20, 25).unwrap());
/// seq.append(Interval::closed(5, 10).unwrap());
///
/// let extent = seq.extent().unwrap();
/// assert_eq!(extent, Interval::closed(5, 25).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSeq<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> IntervalSeq<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// True iff nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Iterate the intervals in ascending order.
    ///
    /// Each call starts again from the first interval.
    pub fn iter(&self) -> slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }
}

impl<T: Ord> IntervalSeq<T> {
    /// Insert an interval at its sorted position.
    ///
    /// Equal intervals are kept; a new one goes after existing equals.
    pub fn append(&mut self, interval: Interval<T>) {
        let position = self.intervals.partition_point(|existing| *existing <= interval);
        self.intervals.insert(position, interval);
    }
}

impl<T: Ord + Clone> IntervalSeq<T> {
    /// Intersections of sort-adjacent pairs that overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use units_core::interval::{Interval, IntervalSeq};
    ///
    /// let seq: IntervalSeq<i32> = [
    ///     Interval::over(Some(10), false, Some(12), true).unwrap(),
    ///     Interval::over(Some(11), false, Some(20), true).unwrap(),
    ///     Interval::closed(20, 25).unwrap(),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let overlaps: Vec<_> = seq.intersections().collect();
    /// assert_eq!(overlaps[1], Interval::single_element(20));
    /// ```
    pub fn intersections(&self) -> impl Iterator<Item = Interval<T>> + '_ {
        self.intervals.windows(2).filter_map(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            a.intersects(b).then(|| a.intersect(b))
        })
    }

    /// Gaps between sort-adjacent pairs that neither overlap nor touch.
    pub fn gaps(&self) -> impl Iterator<Item = Interval<T>> + '_ {
        self.intervals
            .windows(2)
            .filter_map(|pair| pair[0].gap(&pair[1]))
    }

    /// The smallest single interval covering every member.
    ///
    /// Each edge is taken from the member with the most extreme bound on
    /// that side. When several members share the extreme value, the edge
    /// is included if any of them includes it.
    ///
    /// # Returns
    ///
    /// * `Ok(Interval)` - The bounding interval
    /// * `Err(RangeError::EmptyExtent)` - The sequence is empty
    pub fn extent(&self) -> Result<Interval<T>, RangeError> {
        let lower: &LowerBound<T> = self
            .intervals
            .iter()
            .map(Interval::lower_bound)
            .min()
            .ok_or(RangeError::EmptyExtent)?;
        let upper: &UpperBound<T> = self
            .intervals
            .iter()
            .map(Interval::upper_bound)
            .max()
            .ok_or(RangeError::EmptyExtent)?;

        Ok(Interval::from_bounds(lower.clone(), upper.clone()))
    }
}

impl<T> Default for IntervalSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<Interval<T>> for IntervalSeq<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T: Ord> Extend<Interval<T>> for IntervalSeq<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.append(interval);
        }
    }
}

impl<'a, T> IntoIterator for &'a IntervalSeq<T> {
    type Item = &'a Interval<T>;
    type IntoIter = slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
