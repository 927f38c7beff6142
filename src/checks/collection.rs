//! Checks on sequences
//!
//! Available on validators holding any [`CollectionValue`]: vectors, arrays,
//! slices, and `Option`s of those. Import [`CollectionChecks`] (or the
//! [prelude](crate::prelude)) to use them.
//!
//! ```rust
//! use stipulate::prelude::*;
//!
//! let ports = requires_named(vec![80, 443], "ports")
//!     .is_not_empty()
//!     .and_then(|v| v.contains(443))
//!     .and_then(|v| v.does_not_contain(22));
//! assert!(ports.is_ok());
//!
//! let err = requires_named([1, 2], "ids").contains_all(&[2, 3]).unwrap_err();
//! assert_eq!(err.message(), "ids should contain all of [2, 3].");
//! ```

use crate::strategy::{FailureStrategy, ViolationKind};
use crate::value::{describe_all, ArgumentValue};
use crate::Validator;

/// A value that may hold a sequence of elements.
pub trait CollectionValue: ArgumentValue {
    /// Element type.
    type Item: ArgumentValue;

    /// The elements; `None` when the value is null.
    fn elements(&self) -> Option<&[Self::Item]>;
}

impl<T: ArgumentValue> CollectionValue for [T] {
    type Item = T;

    fn elements(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T: ArgumentValue, const N: usize> CollectionValue for [T; N] {
    type Item = T;

    fn elements(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T: ArgumentValue> CollectionValue for Vec<T> {
    type Item = T;

    fn elements(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<C: CollectionValue + ?Sized> CollectionValue for &C {
    type Item = C::Item;

    fn elements(&self) -> Option<&[C::Item]> {
        (**self).elements()
    }
}

impl<C: CollectionValue> CollectionValue for Option<C> {
    type Item = C::Item;

    fn elements(&self) -> Option<&[C::Item]> {
        self.as_ref().and_then(CollectionValue::elements)
    }
}

/// Sequence checks for validators holding a [`CollectionValue`].
///
/// A null collection fails every check except
/// [`is_null_or_empty`](Self::is_null_or_empty). Each check has a `_with`
/// form taking a description template.
pub trait CollectionChecks: Sized {
    /// Error produced when a check fails.
    type Error;
    /// Element type of the held collection.
    type Item;

    /// Check that the collection has no elements.
    fn is_empty(self) -> Result<Self, Self::Error>;
    /// [`is_empty`](Self::is_empty) with a description template.
    fn is_empty_with(self, description: &str) -> Result<Self, Self::Error>;

    /// Check that the collection has at least one element.
    fn is_not_empty(self) -> Result<Self, Self::Error>;
    /// [`is_not_empty`](Self::is_not_empty) with a description template.
    fn is_not_empty_with(self, description: &str) -> Result<Self, Self::Error>;

    /// Check that the value is null or an empty collection.
    fn is_null_or_empty(self) -> Result<Self, Self::Error>;
    /// [`is_null_or_empty`](Self::is_null_or_empty) with a description
    /// template.
    fn is_null_or_empty_with(self, description: &str) -> Result<Self, Self::Error>;

    /// Check that the value is a non-empty collection.
    fn is_not_null_or_empty(self) -> Result<Self, Self::Error>;
    /// [`is_not_null_or_empty`](Self::is_not_null_or_empty) with a
    /// description template.
    fn is_not_null_or_empty_with(self, description: &str) -> Result<Self, Self::Error>;

    /// Check that the collection holds exactly `length` elements.
    ///
    /// Fails with [`ViolationKind::OutOfRange`] for a present collection.
    fn has_length(self, length: usize) -> Result<Self, Self::Error>;
    /// [`has_length`](Self::has_length) with a description template.
    fn has_length_with(self, length: usize, description: &str) -> Result<Self, Self::Error>;

    /// Check that `element` is in the collection.
    fn contains<U>(self, element: U) -> Result<Self, Self::Error>
    where
        Self::Item: PartialEq<U>,
        U: ArgumentValue;
    /// [`contains`](Self::contains) with a description template.
    fn contains_with<U>(self, element: U, description: &str) -> Result<Self, Self::Error>
    where
        Self::Item: PartialEq<U>,
        U: ArgumentValue;

    /// Check that `element` is not in the collection.
    fn does_not_contain<U>(self, element: U) -> Result<Self, Self::Error>
    where
        Self::Item: PartialEq<U>,
        U: ArgumentValue;
    /// [`does_not_contain`](Self::does_not_contain) with a description
    /// template.
    fn does_not_contain_with<U>(self, element: U, description: &str) -> Result<Self, Self::Error>
    where
        Self::Item: PartialEq<U>,
        U: ArgumentValue;

    /// Check that at least one of `elements` is in the collection.
    ///
    /// An empty `elements` never passes.
    fn contains_any<U>(self, elements: &[U]) -> Result<Self, Self::Error>
    where
        Self::Item: PartialEq<U>,
        U: ArgumentValue;
    /// [`contains_any`](Self::contains_any) with a description template.
    fn contains_any_with<U>(self, elements: &[U], description: &str) -> Result<Self, Self::Error>
    where
        Self::Item: PartialEq<U>,
        U: ArgumentValue;

    /// Check that every one of `elements` is in the collection.
    fn contains_all<U>(self, elements: &[U]) -> Result<Self, Self::Error>
    where
        Self::Item: PartialEq<U>,
        U: ArgumentValue;
    /// [`contains_all`](Self::contains_all) with a description template.
    fn contains_all_with<U>(self, elements: &[U], description: &str) -> Result<Self, Self::Error>
    where
        Self::Item: PartialEq<U>,
        U: ArgumentValue;
}

impl<T, S> Validator<T, S>
where
    T: CollectionValue,
    S: FailureStrategy,
{
    fn collection_check<P, F>(
        self,
        passes: P,
        description: Option<&str>,
        default_phrase: F,
    ) -> Result<Self, S::Error>
    where
        P: FnOnce(&[T::Item]) -> bool,
        F: FnOnce(&str) -> String,
    {
        let passed = self.value().elements().is_some_and(passes);
        self.verify(passed, description, ViolationKind::Generic, default_phrase)
    }

    fn null_or_empty(self, description: Option<&str>) -> Result<Self, S::Error> {
        let passed = self.value().elements().is_none_or(<[T::Item]>::is_empty);
        self.verify(passed, description, ViolationKind::Generic, |name| {
            format!("{name} should be null or empty")
        })
    }

    fn exact_length(self, length: usize, description: Option<&str>) -> Result<Self, S::Error> {
        let passed = self.value().elements().is_some_and(|elements| elements.len() == length);
        let kind = if self.value().is_null() {
            ViolationKind::Generic
        } else {
            ViolationKind::OutOfRange
        };
        self.verify(passed, description, kind, |name| {
            format!("{name} should have a length of {length}")
        })
    }
}

fn holds<T, U>(elements: &[T], element: &U) -> bool
where
    T: PartialEq<U>,
{
    elements.iter().any(|candidate| candidate == element)
}

macro_rules! emptiness_pair {
    ($name:ident, $name_with:ident, |$elements:ident| $test:expr, $phrase:literal) => {
        fn $name(self) -> Result<Self, S::Error> {
            self.collection_check(|$elements| $test, None, |name| {
                format!(concat!("{} ", $phrase), name)
            })
        }

        fn $name_with(self, description: &str) -> Result<Self, S::Error> {
            self.collection_check(
                |$elements| $test,
                Some(description),
                |name| format!(concat!("{} ", $phrase), name),
            )
        }
    };
}

macro_rules! element_pair {
    ($name:ident, $name_with:ident, |$elements:ident, $element:ident| $test:expr, $phrase:literal) => {
        fn $name<U>(self, $element: U) -> Result<Self, S::Error>
        where
            T::Item: PartialEq<U>,
            U: ArgumentValue,
        {
            self.collection_check(
                |$elements| $test,
                None,
                |name| format!(concat!("{} ", $phrase, " {}"), name, $element.describe()),
            )
        }

        fn $name_with<U>(self, $element: U, description: &str) -> Result<Self, S::Error>
        where
            T::Item: PartialEq<U>,
            U: ArgumentValue,
        {
            self.collection_check(
                |$elements| $test,
                Some(description),
                |name| format!(concat!("{} ", $phrase, " {}"), name, $element.describe()),
            )
        }
    };
}

macro_rules! membership_pair {
    ($name:ident, $name_with:ident, $quantifier:ident, $phrase:literal) => {
        fn $name<U>(self, wanted: &[U]) -> Result<Self, S::Error>
        where
            T::Item: PartialEq<U>,
            U: ArgumentValue,
        {
            self.collection_check(
                |elements| wanted.iter().$quantifier(|element| holds(elements, element)),
                None,
                |name| format!(concat!("{} ", $phrase, " {}"), name, describe_all(wanted)),
            )
        }

        fn $name_with<U>(self, wanted: &[U], description: &str) -> Result<Self, S::Error>
        where
            T::Item: PartialEq<U>,
            U: ArgumentValue,
        {
            self.collection_check(
                |elements| wanted.iter().$quantifier(|element| holds(elements, element)),
                Some(description),
                |name| format!(concat!("{} ", $phrase, " {}"), name, describe_all(wanted)),
            )
        }
    };
}

impl<T, S> CollectionChecks for Validator<T, S>
where
    T: CollectionValue,
    S: FailureStrategy,
{
    type Error = S::Error;
    type Item = T::Item;

    emptiness_pair!(is_empty, is_empty_with, |elements| elements.is_empty(), "should be empty");
    emptiness_pair!(is_not_empty, is_not_empty_with, |elements| !elements.is_empty(), "should not be empty");
    emptiness_pair!(
        is_not_null_or_empty,
        is_not_null_or_empty_with,
        |elements| !elements.is_empty(),
        "should not be null or empty"
    );

    fn is_null_or_empty(self) -> Result<Self, S::Error> {
        self.null_or_empty(None)
    }

    fn is_null_or_empty_with(self, description: &str) -> Result<Self, S::Error> {
        self.null_or_empty(Some(description))
    }

    fn has_length(self, length: usize) -> Result<Self, S::Error> {
        self.exact_length(length, None)
    }

    fn has_length_with(self, length: usize, description: &str) -> Result<Self, S::Error> {
        self.exact_length(length, Some(description))
    }

    element_pair!(contains, contains_with, |elements, element| holds(elements, &element), "should contain");
    element_pair!(
        does_not_contain,
        does_not_contain_with,
        |elements, element| !holds(elements, &element),
        "should not contain"
    );

    membership_pair!(contains_any, contains_any_with, any, "should contain any of");
    membership_pair!(contains_all, contains_all_with, all, "should contain all of");
}
