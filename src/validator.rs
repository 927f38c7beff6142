//! The chainable validator
//!
//! A [`Validator`] pairs a [`ValueHolder`] with the [`FailureStrategy`]
//! chosen when the chain started. Every check consumes the validator and
//! hands it back on success, so checks chain with `?`:
//!
//! ```rust
//! use stipulate::{requires_named, ArgumentError};
//!
//! fn set_port(port: u16) -> Result<u16, ArgumentError> {
//!     let port = requires_named(port, "port")
//!         .is_greater_or_equal(1024)?
//!         .is_not_equal_to(8080)?
//!         .into_inner();
//!     Ok(port)
//! }
//!
//! assert_eq!(set_port(3000), Ok(3000));
//! assert_eq!(
//!     set_port(80).unwrap_err().message(),
//!     "port should be greater than or equal to 1024."
//! );
//! ```
//!
//! # Writing new checks
//!
//! Checks are ordinary methods. New ones are added with an extension trait
//! built on [`Validator::verify`] (or [`Validator::fail`] for full control):
//!
//! ```rust
//! use stipulate::strategy::FailureStrategy;
//! use stipulate::{ensures, Validator, ViolationKind};
//!
//! trait EvenCheck: Sized {
//!     type Error;
//!     fn is_even(self) -> Result<Self, Self::Error>;
//! }
//!
//! impl<S: FailureStrategy> EvenCheck for Validator<i32, S> {
//!     type Error = S::Error;
//!
//!     fn is_even(self) -> Result<Self, S::Error> {
//!         let passed = self.value() % 2 == 0;
//!         self.verify(passed, None, ViolationKind::Generic, |name| {
//!             format!("{name} should be even")
//!         })
//!     }
//! }
//!
//! assert!(ensures(4).is_even().is_ok());
//! assert_eq!(ensures(3).is_even().unwrap_err().message(), "value should be even.");
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::comparison::{self, Bound, Comparable, Equatable};
use crate::holder::ValueHolder;
use crate::message;
use crate::predicate::Predicate;
use crate::strategy::{FailureStrategy, Suppressed, Violation, ViolationKind};
use crate::value::ArgumentValue;

/// A value bound to a failure strategy, exposing chainable checks.
#[derive(Clone)]
pub struct Validator<T, S> {
    holder: ValueHolder<T>,
    strategy: S,
}

impl<T: fmt::Debug, S: FailureStrategy> fmt::Debug for Validator<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("holder", &self.holder)
            .field("strategy", &self.strategy.label())
            .finish()
    }
}

impl<T, S> Validator<T, S> {
    /// Start a chain checking `value` under `argument_name`.
    ///
    /// Most callers use [`requires`](crate::requires),
    /// [`ensures`](crate::ensures) or a custom error entry point instead.
    pub fn new(value: T, argument_name: impl Into<String>, strategy: S) -> Self {
        Self::from_holder(ValueHolder::new(argument_name, value), strategy)
    }

    /// Start a chain from an existing holder.
    pub fn from_holder(holder: ValueHolder<T>, strategy: S) -> Self {
        Self { holder, strategy }
    }

    /// The held value.
    pub fn value(&self) -> &T {
        self.holder.value()
    }

    /// The argument name used in failure messages.
    pub fn argument_name(&self) -> &str {
        self.holder.argument_name()
    }

    /// The value holder.
    pub fn holder(&self) -> &ValueHolder<T> {
        &self.holder
    }

    /// The strategy this chain reports failures through.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// End the chain, returning the checked value.
    pub fn into_inner(self) -> T {
        self.holder.into_value()
    }

    /// Use a different argument name for the remaining checks.
    pub fn named(self, argument_name: impl Into<String>) -> Self {
        Self {
            holder: self.holder.rename(argument_name),
            strategy: self.strategy,
        }
    }

    /// Let every remaining check in this chain pass.
    ///
    /// Intended for tests that exercise code paths behind a failing check.
    /// Only this chain is affected.
    pub fn suppress(self) -> Validator<T, Suppressed<S>> {
        Validator {
            holder: self.holder,
            strategy: Suppressed::new(self.strategy),
        }
    }
}

impl<T, S> Validator<T, S>
where
    T: ArgumentValue,
    S: FailureStrategy,
{
    /// Report a violation of `condition` through the chain's strategy.
    ///
    /// `condition` is the complete condition text, without the trailing
    /// period. Returns the validator only when the strategy swallows the
    /// violation.
    pub fn fail(self, condition: impl Into<String>, kind: ViolationKind) -> Result<Self, S::Error> {
        let violation = Violation::new(
            self.holder.argument_name(),
            self.holder.value().is_null(),
            condition,
            kind,
        );
        self.strategy.raise_failure(violation)?;
        Ok(self)
    }

    /// Like [`fail`](Self::fail), with an elaboration appended to the
    /// message.
    pub fn fail_with_message(
        self,
        condition: impl Into<String>,
        additional_message: impl Into<String>,
        kind: ViolationKind,
    ) -> Result<Self, S::Error> {
        let violation = Violation::new(
            self.holder.argument_name(),
            self.holder.value().is_null(),
            condition,
            kind,
        )
        .with_additional_message(additional_message);
        self.strategy.raise_failure(violation)?;
        Ok(self)
    }

    /// Pass the chain on when `passed`, otherwise fail.
    ///
    /// The condition text is the caller's `description` template with `{0}`
    /// replaced by the argument name, or `default_phrase` applied to the
    /// argument name when no description is given.
    pub fn verify<F>(
        self,
        passed: bool,
        description: Option<&str>,
        kind: ViolationKind,
        default_phrase: F,
    ) -> Result<Self, S::Error>
    where
        F: FnOnce(&str) -> String,
    {
        if passed {
            return Ok(self);
        }
        let condition = message::condition(description, self.argument_name(), default_phrase);
        self.fail(condition, kind)
    }

    fn order_kind(&self) -> ViolationKind {
        if self.value().is_null() {
            ViolationKind::Generic
        } else if T::ENUMERATION {
            ViolationKind::InvalidEnum
        } else {
            ViolationKind::OutOfRange
        }
    }

    fn bounded<U, F>(
        self,
        bound: Bound,
        limit: U,
        compare: F,
        description: Option<&str>,
    ) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        let passed = !self.value().is_null() && bound.check(self.value(), &limit, compare);
        let kind = self.order_kind();
        self.verify(passed, description, kind, |name| {
            format!("{name} {} {}", bound.phrase(), limit.describe())
        })
    }

    fn ranged<U, F>(
        self,
        inside: bool,
        min: U,
        max: U,
        compare: F,
        description: Option<&str>,
    ) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        let passed = !self.value().is_null()
            && comparison::in_range(self.value(), &min, &max, compare) == inside;
        let kind = self.order_kind();
        let phrase = if inside {
            "should be between"
        } else {
            "should not be between"
        };
        self.verify(passed, description, kind, |name| {
            format!("{name} {phrase} {} and {}", min.describe(), max.describe())
        })
    }

    fn equality<U, M>(self, expect_equal: bool, other: U, description: Option<&str>) -> Result<Self, S::Error>
    where
        T: Equatable<U, M>,
        U: ArgumentValue,
    {
        let passed = Equatable::<U, M>::equals(self.value(), &other) == expect_equal;
        let kind = self.order_kind();
        let phrase = if expect_equal {
            "should be equal to"
        } else {
            "should not be equal to"
        };
        self.verify(passed, description, kind, |name| {
            format!("{name} {phrase} {}", other.describe())
        })
    }

    /// Check that the value is null.
    pub fn is_null(self) -> Result<Self, S::Error> {
        self.is_null_described(None)
    }

    /// [`is_null`](Self::is_null) with a description template.
    pub fn is_null_with(self, description: &str) -> Result<Self, S::Error> {
        self.is_null_described(Some(description))
    }

    fn is_null_described(self, description: Option<&str>) -> Result<Self, S::Error> {
        let passed = self.value().is_null();
        self.verify(passed, description, ViolationKind::Generic, |name| {
            format!("{name} should be null")
        })
    }

    /// Check that the value is not null.
    ///
    /// ```rust
    /// use stipulate::{requires, ArgumentError};
    ///
    /// let err = requires(None::<String>).is_not_null().unwrap_err();
    /// assert!(matches!(err, ArgumentError::Null { .. }));
    /// ```
    pub fn is_not_null(self) -> Result<Self, S::Error> {
        self.is_not_null_described(None)
    }

    /// [`is_not_null`](Self::is_not_null) with a description template.
    pub fn is_not_null_with(self, description: &str) -> Result<Self, S::Error> {
        self.is_not_null_described(Some(description))
    }

    fn is_not_null_described(self, description: Option<&str>) -> Result<Self, S::Error> {
        let passed = !self.value().is_null();
        self.verify(passed, description, ViolationKind::Generic, |name| {
            format!("{name} should not be null")
        })
    }

    /// Check that the value equals `other`.
    ///
    /// Null values compare like any other value, so checking a null against
    /// a null passes. A nullable value can be compared against a plain
    /// operand, which a null never equals.
    pub fn is_equal_to<U, M>(self, other: U) -> Result<Self, S::Error>
    where
        T: Equatable<U, M>,
        U: ArgumentValue,
    {
        self.equality(true, other, None)
    }

    /// [`is_equal_to`](Self::is_equal_to) with a description template.
    pub fn is_equal_to_with<U, M>(self, other: U, description: &str) -> Result<Self, S::Error>
    where
        T: Equatable<U, M>,
        U: ArgumentValue,
    {
        self.equality(true, other, Some(description))
    }

    /// Check that the value does not equal `other`.
    pub fn is_not_equal_to<U, M>(self, other: U) -> Result<Self, S::Error>
    where
        T: Equatable<U, M>,
        U: ArgumentValue,
    {
        self.equality(false, other, None)
    }

    /// [`is_not_equal_to`](Self::is_not_equal_to) with a description
    /// template.
    pub fn is_not_equal_to_with<U, M>(self, other: U, description: &str) -> Result<Self, S::Error>
    where
        T: Equatable<U, M>,
        U: ArgumentValue,
    {
        self.equality(false, other, Some(description))
    }

    /// Check that the value is strictly greater than `min`.
    ///
    /// A null value fails without being compared. A nullable value is
    /// compared against either a plain or a nullable operand:
    ///
    /// ```rust
    /// use stipulate::requires;
    ///
    /// assert!(requires(Some(5)).is_greater_than(3).is_ok());
    /// assert!(requires(None::<i32>).is_greater_than(3).unwrap_err().is_null());
    /// ```
    pub fn is_greater_than<U, M>(self, min: U) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.bounded(Bound::GreaterThan, min, <T as Comparable<U, M>>::compare_to, None)
    }

    /// [`is_greater_than`](Self::is_greater_than) with a description
    /// template.
    pub fn is_greater_than_with<U, M>(self, min: U, description: &str) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.bounded(Bound::GreaterThan, min, <T as Comparable<U, M>>::compare_to, Some(description))
    }

    /// [`is_greater_than`](Self::is_greater_than) ordered by `compare`.
    pub fn is_greater_than_by<U, F>(self, min: U, compare: F) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.bounded(Bound::GreaterThan, min, compare, None)
    }

    /// [`is_greater_than_by`](Self::is_greater_than_by) with a description
    /// template.
    pub fn is_greater_than_by_with<U, F>(self, min: U, compare: F, description: &str) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.bounded(Bound::GreaterThan, min, compare, Some(description))
    }

    /// Check that the value is greater than or equal to `min`.
    pub fn is_greater_or_equal<U, M>(self, min: U) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.bounded(Bound::GreaterOrEqual, min, <T as Comparable<U, M>>::compare_to, None)
    }

    /// [`is_greater_or_equal`](Self::is_greater_or_equal) with a
    /// description template.
    pub fn is_greater_or_equal_with<U, M>(self, min: U, description: &str) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.bounded(Bound::GreaterOrEqual, min, <T as Comparable<U, M>>::compare_to, Some(description))
    }

    /// [`is_greater_or_equal`](Self::is_greater_or_equal) ordered by
    /// `compare`.
    pub fn is_greater_or_equal_by<U, F>(self, min: U, compare: F) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.bounded(Bound::GreaterOrEqual, min, compare, None)
    }

    /// [`is_greater_or_equal_by`](Self::is_greater_or_equal_by) with a
    /// description template.
    pub fn is_greater_or_equal_by_with<U, F>(self, min: U, compare: F, description: &str) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.bounded(Bound::GreaterOrEqual, min, compare, Some(description))
    }

    /// Check that the value is strictly less than `max`.
    pub fn is_less_than<U, M>(self, max: U) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.bounded(Bound::LessThan, max, <T as Comparable<U, M>>::compare_to, None)
    }

    /// [`is_less_than`](Self::is_less_than) with a description template.
    pub fn is_less_than_with<U, M>(self, max: U, description: &str) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.bounded(Bound::LessThan, max, <T as Comparable<U, M>>::compare_to, Some(description))
    }

    /// [`is_less_than`](Self::is_less_than) ordered by `compare`.
    pub fn is_less_than_by<U, F>(self, max: U, compare: F) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.bounded(Bound::LessThan, max, compare, None)
    }

    /// [`is_less_than_by`](Self::is_less_than_by) with a description
    /// template.
    pub fn is_less_than_by_with<U, F>(self, max: U, compare: F, description: &str) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.bounded(Bound::LessThan, max, compare, Some(description))
    }

    /// Check that the value is less than or equal to `max`.
    pub fn is_less_or_equal<U, M>(self, max: U) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.bounded(Bound::LessOrEqual, max, <T as Comparable<U, M>>::compare_to, None)
    }

    /// [`is_less_or_equal`](Self::is_less_or_equal) with a description
    /// template.
    pub fn is_less_or_equal_with<U, M>(self, max: U, description: &str) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.bounded(Bound::LessOrEqual, max, <T as Comparable<U, M>>::compare_to, Some(description))
    }

    /// [`is_less_or_equal`](Self::is_less_or_equal) ordered by `compare`.
    pub fn is_less_or_equal_by<U, F>(self, max: U, compare: F) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.bounded(Bound::LessOrEqual, max, compare, None)
    }

    /// [`is_less_or_equal_by`](Self::is_less_or_equal_by) with a
    /// description template.
    pub fn is_less_or_equal_by_with<U, F>(self, max: U, compare: F, description: &str) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.bounded(Bound::LessOrEqual, max, compare, Some(description))
    }

    /// Check that `min <= value <= max`.
    ///
    /// ```rust
    /// use stipulate::requires;
    ///
    /// assert!(requires(10).is_in_range(1, 10).is_ok());
    /// assert_eq!(
    ///     requires(11).is_in_range(1, 10).unwrap_err().message(),
    ///     "value should be between 1 and 10."
    /// );
    /// ```
    pub fn is_in_range<U, M>(self, min: U, max: U) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.ranged(true, min, max, <T as Comparable<U, M>>::compare_to, None)
    }

    /// [`is_in_range`](Self::is_in_range) with a description template.
    pub fn is_in_range_with<U, M>(self, min: U, max: U, description: &str) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.ranged(true, min, max, <T as Comparable<U, M>>::compare_to, Some(description))
    }

    /// [`is_in_range`](Self::is_in_range) ordered by `compare`.
    pub fn is_in_range_by<U, F>(self, min: U, max: U, compare: F) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.ranged(true, min, max, compare, None)
    }

    /// [`is_in_range_by`](Self::is_in_range_by) with a description template.
    pub fn is_in_range_by_with<U, F>(self, min: U, max: U, compare: F, description: &str) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.ranged(true, min, max, compare, Some(description))
    }

    /// Check that the value lies outside the closed interval `[min, max]`.
    ///
    /// The bounds themselves count as inside the interval, so a value equal
    /// to `min` or `max` fails.
    ///
    /// ```rust
    /// use stipulate::requires;
    ///
    /// assert!(requires(0).is_not_in_range(1, 10).is_ok());
    /// assert!(requires(1).is_not_in_range(1, 10).is_err());
    /// assert!(requires(10).is_not_in_range(1, 10).is_err());
    /// ```
    pub fn is_not_in_range<U, M>(self, min: U, max: U) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.ranged(false, min, max, <T as Comparable<U, M>>::compare_to, None)
    }

    /// [`is_not_in_range`](Self::is_not_in_range) with a description
    /// template.
    pub fn is_not_in_range_with<U, M>(self, min: U, max: U, description: &str) -> Result<Self, S::Error>
    where
        T: Comparable<U, M>,
        U: ArgumentValue,
    {
        self.ranged(false, min, max, <T as Comparable<U, M>>::compare_to, Some(description))
    }

    /// [`is_not_in_range`](Self::is_not_in_range) ordered by `compare`.
    pub fn is_not_in_range_by<U, F>(self, min: U, max: U, compare: F) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.ranged(false, min, max, compare, None)
    }

    /// [`is_not_in_range_by`](Self::is_not_in_range_by) with a description
    /// template.
    pub fn is_not_in_range_by_with<U, F>(
        self,
        min: U,
        max: U,
        compare: F,
        description: &str,
    ) -> Result<Self, S::Error>
    where
        U: ArgumentValue,
        F: Fn(&T, &U) -> Option<Ordering>,
    {
        self.ranged(false, min, max, compare, Some(description))
    }

    /// Check an arbitrary condition computed by the caller.
    pub fn evaluate(self, condition: bool) -> Result<Self, S::Error> {
        self.evaluate_described(condition, None)
    }

    /// [`evaluate`](Self::evaluate) with a description template.
    ///
    /// ```rust
    /// use stipulate::requires_named;
    ///
    /// let items = vec![3, 1, 2];
    /// let err = requires_named(&items, "items")
    ///     .evaluate_with(items.windows(2).all(|w| w[0] <= w[1]), "{0} should be sorted")
    ///     .unwrap_err();
    /// assert_eq!(err.message(), "items should be sorted.");
    /// ```
    pub fn evaluate_with(self, condition: bool, description: &str) -> Result<Self, S::Error> {
        self.evaluate_described(condition, Some(description))
    }

    fn evaluate_described(self, condition: bool, description: Option<&str>) -> Result<Self, S::Error> {
        self.verify(condition, description, ViolationKind::Generic, |name| {
            format!("{name} should be valid")
        })
    }

    /// Check the value against a [`Predicate`].
    ///
    /// The failure message uses the predicate's description when it has one.
    pub fn satisfies<P: Predicate<T>>(self, predicate: P) -> Result<Self, S::Error> {
        self.satisfies_described(predicate, None)
    }

    /// [`satisfies`](Self::satisfies) with a description template.
    pub fn satisfies_with<P: Predicate<T>>(self, predicate: P, description: &str) -> Result<Self, S::Error> {
        self.satisfies_described(predicate, Some(description))
    }

    fn satisfies_described<P: Predicate<T>>(
        self,
        predicate: P,
        description: Option<&str>,
    ) -> Result<Self, S::Error> {
        let passed = predicate.accepts(self.value());
        let phrase = predicate.description();
        self.verify(passed, description, ViolationKind::Generic, |name| match phrase {
            Some(phrase) => format!("{name} should {phrase}"),
            None => format!("{name} should satisfy the predicate"),
        })
    }
}

impl<S: FailureStrategy> Validator<bool, S> {
    /// Check that the value is `true`.
    pub fn is_true(self) -> Result<Self, S::Error> {
        self.is_bool(true, None)
    }

    /// [`is_true`](Self::is_true) with a description template.
    pub fn is_true_with(self, description: &str) -> Result<Self, S::Error> {
        self.is_bool(true, Some(description))
    }

    /// Check that the value is `false`.
    pub fn is_false(self) -> Result<Self, S::Error> {
        self.is_bool(false, None)
    }

    /// [`is_false`](Self::is_false) with a description template.
    pub fn is_false_with(self, description: &str) -> Result<Self, S::Error> {
        self.is_bool(false, Some(description))
    }

    fn is_bool(self, expected: bool, description: Option<&str>) -> Result<Self, S::Error> {
        let passed = *self.value() == expected;
        self.verify(passed, description, ViolationKind::Generic, |name| {
            format!("{name} should be {expected}")
        })
    }
}
