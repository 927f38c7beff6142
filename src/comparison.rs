//! Comparison primitives shared by every check
//!
//! Checks are written once against a comparer, a function returning
//! `Option<Ordering>` for a value and a bound. The default comparer is
//! [`PartialOrd::partial_cmp`], so values are ordered by their own ordering
//! definition and never by identity. `None` (an incomparable pair such as a
//! NaN) satisfies no ordering.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use stipulate::comparison::{in_range, not_in_range, Bound, natural};
//!
//! assert!(Bound::GreaterThan.holds(natural(&6, &5)));
//! assert!(!Bound::GreaterThan.holds(natural(&f64::NAN, &5.0)));
//!
//! assert!(in_range(&5, &1, &5, natural));
//! // The excluded region of `not_in_range` is the same closed interval.
//! assert!(!not_in_range(&5, &1, &5, natural));
//!
//! // A custom comparer: order strings by length.
//! let by_len = |a: &&str, b: &&str| Some(a.len().cmp(&b.len()));
//! assert!(in_range(&"abc", &"xy", &"wxyz", by_len));
//! ```
//!
//! # Nullable values
//!
//! The built-in checks compare through [`Comparable`] and [`Equatable`]
//! rather than `PartialOrd`/`PartialEq` directly, so a held `Option<T>` can
//! be checked against a plain operand as well as against another option.
//! The marker parameter ([`Direct`] or [`Lifted`]) is inferred and never
//! written by callers.
//!
//! ```rust
//! use stipulate::comparison::{Comparable, Equatable};
//!
//! assert_eq!(Some(5).compare_to(&3), Some(std::cmp::Ordering::Greater));
//! assert!(Some(5).equals(&5));
//! assert!(!None::<i32>.equals(&5));
//! assert_eq!(None::<i32>.compare_to(&3), None);
//! ```

use std::cmp::Ordering;

/// Compare with the value's own [`PartialOrd`] definition.
pub fn natural<T, U>(value: &T, bound: &U) -> Option<Ordering>
where
    T: PartialOrd<U> + ?Sized,
    U: ?Sized,
{
    value.partial_cmp(bound)
}

/// Equality with the value's own [`PartialEq`] definition.
pub fn equal_to<T, U>(value: &T, other: &U) -> bool
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    value == other
}

/// Negation of [`equal_to`].
pub fn not_equal_to<T, U>(value: &T, other: &U) -> bool
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    value != other
}

/// Selects comparison of the held value itself.
#[derive(Debug, Clone, Copy)]
pub enum Direct {}

/// Selects comparison of the contents of a nullable held value.
#[derive(Debug, Clone, Copy)]
pub enum Lifted {}

/// Ordering of a held value against an operand of type `U`.
///
/// Implemented for every `T: PartialOrd<U>` through [`Direct`], and for
/// `Option<T>` against a plain `U` through [`Lifted`]. An absent option is
/// incomparable.
pub trait Comparable<U: ?Sized, M> {
    /// Order `self` against `operand`.
    fn compare_to(&self, operand: &U) -> Option<Ordering>;
}

impl<T, U> Comparable<U, Direct> for T
where
    T: PartialOrd<U> + ?Sized,
    U: ?Sized,
{
    fn compare_to(&self, operand: &U) -> Option<Ordering> {
        self.partial_cmp(operand)
    }
}

impl<T, U> Comparable<U, Lifted> for Option<T>
where
    T: PartialOrd<U>,
    U: ?Sized,
{
    fn compare_to(&self, operand: &U) -> Option<Ordering> {
        self.as_ref().and_then(|value| value.partial_cmp(operand))
    }
}

/// Equality of a held value with an operand of type `U`.
///
/// The equality counterpart of [`Comparable`]. An absent option equals no
/// plain operand.
pub trait Equatable<U: ?Sized, M> {
    /// Whether `self` equals `operand`.
    fn equals(&self, operand: &U) -> bool;
}

impl<T, U> Equatable<U, Direct> for T
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    fn equals(&self, operand: &U) -> bool {
        self == operand
    }
}

impl<T, U> Equatable<U, Lifted> for Option<T>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    fn equals(&self, operand: &U) -> bool {
        self.as_ref().is_some_and(|value| value == operand)
    }
}

/// A one-sided bound a value is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Strictly greater than the bound.
    GreaterThan,
    /// Greater than or equal to the bound.
    GreaterOrEqual,
    /// Strictly less than the bound.
    LessThan,
    /// Less than or equal to the bound.
    LessOrEqual,
}

impl Bound {
    /// Whether the result of comparing value to bound satisfies this bound.
    pub fn holds(self, ordering: Option<Ordering>) -> bool {
        matches!(
            (self, ordering),
            (Bound::GreaterThan, Some(Ordering::Greater))
                | (Bound::GreaterOrEqual, Some(Ordering::Greater | Ordering::Equal))
                | (Bound::LessThan, Some(Ordering::Less))
                | (Bound::LessOrEqual, Some(Ordering::Less | Ordering::Equal))
        )
    }

    /// Phrase used in failure messages, e.g. `"should be greater than"`.
    pub fn phrase(self) -> &'static str {
        match self {
            Bound::GreaterThan => "should be greater than",
            Bound::GreaterOrEqual => "should be greater than or equal to",
            Bound::LessThan => "should be less than",
            Bound::LessOrEqual => "should be less than or equal to",
        }
    }

    /// Check `value` against `bound` with the given comparer.
    pub fn check<T, U, F>(self, value: &T, bound: &U, compare: F) -> bool
    where
        T: ?Sized,
        U: ?Sized,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.holds(compare(value, bound))
    }
}

/// Whether `min <= value <= max`.
pub fn in_range<T, U, F>(value: &T, min: &U, max: &U, compare: F) -> bool
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T, &U) -> Option<Ordering>,
{
    Bound::GreaterOrEqual.check(value, min, &compare) && Bound::LessOrEqual.check(value, max, &compare)
}

/// Whether `value` lies outside the closed interval `[min, max]`.
///
/// Boundary values count as inside, exactly as [`in_range`] treats them.
pub fn not_in_range<T, U, F>(value: &T, min: &U, max: &U, compare: F) -> bool
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T, &U) -> Option<Ordering>,
{
    !in_range(value, min, max, compare)
}
