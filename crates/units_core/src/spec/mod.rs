//! Composable boolean predicates.
//!
//! A [`Specification`] is a closed tree of `Leaf`, `And`, `Or` and `Not`
//! nodes evaluated by structural recursion. Leaves hold a primitive rule
//! implementing [`Predicate`]; composition moves its operands into a new
//! tree and never mutates them.
//!
//! ## Submodules
//! - `date`: Calendar-date rules (`DateRule`) and the `DateSpecification` alias

pub mod date;

pub use date::{DateRule, DateSpecification};

use std::ops::{BitAnd, BitOr, Not};

/// A primitive boolean rule over values of `T`.
///
/// Implementations must be pure: the answer depends on `value` alone.
pub trait Predicate<T: ?Sized> {
    fn test(&self, value: &T) -> bool;
}

impl<T: ?Sized> Predicate<T> for fn(&T) -> bool {
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// A composable predicate built from primitive rules of type `P`.
///
/// # Examples
///
/// ```
/// use units_core::spec::Specification;
///
/// type IntSpec = Specification<fn(&i32) -> bool>;
///
/// let even: IntSpec = Specification::leaf(|x| x % 2 == 0);
/// let positive: IntSpec = Specification::leaf(|x| *x > 0);
///
/// let spec = even & !positive;
/// assert!(spec.is_satisfied_by(&-4));
/// assert!(!spec.is_satisfied_by(&4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Specification<P> {
    /// A primitive rule
    Leaf(P),
    /// Both operands hold
    And(Box<Specification<P>>, Box<Specification<P>>),
    /// Either operand holds
    Or(Box<Specification<P>>, Box<Specification<P>>),
    /// The operand does not hold
    Not(Box<Specification<P>>),
}

impl<P> Specification<P> {
    pub fn leaf(rule: P) -> Self {
        Specification::Leaf(rule)
    }

    /// Satisfied when both `self` and `other` are.
    pub fn and(self, other: Self) -> Self {
        Specification::And(Box::new(self), Box::new(other))
    }

    /// Satisfied when either `self` or `other` is.
    pub fn or(self, other: Self) -> Self {
        Specification::Or(Box::new(self), Box::new(other))
    }

    /// Satisfied when `self` is not.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Specification::Not(Box::new(self))
    }

    /// Evaluate the predicate for `value`.
    pub fn is_satisfied_by<T: ?Sized>(&self, value: &T) -> bool
    where
        P: Predicate<T>,
    {
        match self {
            Specification::Leaf(rule) => rule.test(value),
            Specification::And(a, b) => a.is_satisfied_by(value) && b.is_satisfied_by(value),
            Specification::Or(a, b) => a.is_satisfied_by(value) || b.is_satisfied_by(value),
            Specification::Not(a) => !a.is_satisfied_by(value),
        }
    }

    /// Lazily keep the values that satisfy the predicate.
    pub fn satisfying<'a, T, I>(&'a self, values: I) -> impl Iterator<Item = T> + 'a
    where
        P: Predicate<T>,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
        T: 'a,
    {
        values
            .into_iter()
            .filter(move |value| self.is_satisfied_by(value))
    }

    /// The first value that satisfies the predicate, if any.
    ///
    /// Does not terminate on an unbounded input with no satisfying value.
    pub fn first_satisfying<T, I>(&self, values: I) -> Option<T>
    where
        P: Predicate<T>,
        I: IntoIterator<Item = T>,
    {
        values.into_iter().find(|value| self.is_satisfied_by(value))
    }
}

impl<P> BitAnd for Specification<P> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<P> BitOr for Specification<P> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl<P> Not for Specification<P> {
    type Output = Self;

    fn not(self) -> Self {
        Specification::not(self)
    }
}
