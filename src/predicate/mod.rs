//! Described predicates for [`Validator::satisfies`](crate::Validator::satisfies)
//!
//! A [`Predicate`] accepts or rejects a value and may describe what an
//! accepted value does, as a verb phrase such as `"be even"`. `satisfies`
//! turns the phrase into the failure message `"{name} should {phrase}"`.
//!
//! Any `Fn(&T) -> bool` closure is a predicate without a phrase, reported as
//! `"{name} should satisfy the predicate"`. Attach one with
//! [`PredicateExt::described`]. Combining predicates combines their phrases
//! when every part has one.
//!
//! # Example
//!
//! ```rust
//! use stipulate::predicate::{Predicate, PredicateExt};
//! use stipulate::requires_named;
//!
//! let printable = (|s: &String| s.chars().all(|c| !c.is_control())).described("be printable");
//! let short = (|s: &String| s.len() <= 16).described("fit in 16 bytes");
//! let label = printable.and(short);
//!
//! assert!(label.accepts(&"release".to_string()));
//! assert_eq!(label.description().as_deref(), Some("be printable and fit in 16 bytes"));
//!
//! let err = requires_named("a\u{7}".to_string(), "label").satisfies(label).unwrap_err();
//! assert_eq!(err.message(), "label should be printable and fit in 16 bytes.");
//! ```

/// A reusable, optionally described, check over values of type `T`.
pub trait Predicate<T: ?Sized> {
    /// Whether `value` passes.
    fn accepts(&self, value: &T) -> bool;

    /// What a passing value does, e.g. `"be even"`.
    fn description(&self) -> Option<String> {
        None
    }
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn accepts(&self, value: &T) -> bool {
        self(value)
    }
}

/// Combinators available on every predicate.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Attach the phrase used in failure messages.
    fn described(self, description: impl Into<String>) -> Described<Self> {
        Described {
            predicate: self,
            description: description.into(),
        }
    }

    /// Passes when both predicates pass.
    fn and<P: Predicate<T>>(self, other: P) -> Both<Self, P> {
        Both {
            left: self,
            right: other,
        }
    }

    /// Passes when either predicate passes.
    fn or<P: Predicate<T>>(self, other: P) -> Either<Self, P> {
        Either {
            left: self,
            right: other,
        }
    }

    /// Passes when this predicate fails.
    fn not(self) -> Negated<Self> {
        Negated { inner: self }
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// A predicate with a failure phrase. See [`PredicateExt::described`].
#[derive(Debug, Clone)]
pub struct Described<P> {
    predicate: P,
    description: String,
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Described<P> {
    fn accepts(&self, value: &T) -> bool {
        self.predicate.accepts(value)
    }

    fn description(&self) -> Option<String> {
        Some(self.description.clone())
    }
}

/// See [`PredicateExt::and`].
#[derive(Debug, Clone, Copy)]
pub struct Both<L, R> {
    left: L,
    right: R,
}

impl<T: ?Sized, L: Predicate<T>, R: Predicate<T>> Predicate<T> for Both<L, R> {
    fn accepts(&self, value: &T) -> bool {
        self.left.accepts(value) && self.right.accepts(value)
    }

    fn description(&self) -> Option<String> {
        join(self.left.description(), "and", self.right.description())
    }
}

/// See [`PredicateExt::or`].
#[derive(Debug, Clone, Copy)]
pub struct Either<L, R> {
    left: L,
    right: R,
}

impl<T: ?Sized, L: Predicate<T>, R: Predicate<T>> Predicate<T> for Either<L, R> {
    fn accepts(&self, value: &T) -> bool {
        self.left.accepts(value) || self.right.accepts(value)
    }

    fn description(&self) -> Option<String> {
        join(self.left.description(), "or", self.right.description())
    }
}

/// See [`PredicateExt::not`].
#[derive(Debug, Clone, Copy)]
pub struct Negated<P> {
    inner: P,
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Negated<P> {
    fn accepts(&self, value: &T) -> bool {
        !self.inner.accepts(value)
    }

    fn description(&self) -> Option<String> {
        self.inner.description().map(|phrase| format!("not {phrase}"))
    }
}

fn join(left: Option<String>, word: &str, right: Option<String>) -> Option<String> {
    Some(format!("{} {word} {}", left?, right?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(v: &i32) -> bool {
        *v > 0
    }

    fn even(v: &i32) -> bool {
        v % 2 == 0
    }

    #[test]
    fn test_closure_has_no_description() {
        let p = |v: &i32| *v > 3;
        assert!(p.accepts(&4));
        assert!(!p.accepts(&3));
        assert_eq!(p.description(), None);
    }

    #[test]
    fn test_described() {
        let p = even.described("be even");
        assert!(p.accepts(&2));
        assert_eq!(p.description().as_deref(), Some("be even"));
    }

    #[test]
    fn test_and_joins_descriptions() {
        let p = positive.described("be positive").and(even.described("be even"));
        assert!(p.accepts(&2));
        assert!(!p.accepts(&3));
        assert!(!p.accepts(&-2));
        assert_eq!(p.description().as_deref(), Some("be positive and be even"));
    }

    #[test]
    fn test_or_joins_descriptions() {
        let p = positive.described("be positive").or(even.described("be even"));
        assert!(p.accepts(&-2));
        assert!(p.accepts(&3));
        assert!(!p.accepts(&-3));
        assert_eq!(p.description().as_deref(), Some("be positive or be even"));
    }

    #[test]
    fn test_partial_descriptions_collapse() {
        assert_eq!(positive.and(even.described("be even")).description(), None);
        assert_eq!(positive.described("be positive").or(even).description(), None);
    }

    #[test]
    fn test_not() {
        let p = positive.described("be positive").not();
        assert!(p.accepts(&0));
        assert!(!p.accepts(&1));
        assert_eq!(p.description().as_deref(), Some("not be positive"));
        assert_eq!(even.not().description(), None);
    }

    #[test]
    fn test_unsized_target() {
        let blank = (|s: &str| s.trim().is_empty()).described("be blank");
        assert!(Predicate::<str>::accepts(&blank.not(), "x"));
    }
}
