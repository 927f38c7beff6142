//! Checks on text values
//!
//! Available on validators holding any [`TextValue`]: `String`, `&str`,
//! `Cow<str>`, boxed and shared strings, and `Option`s of those. Import
//! [`StringChecks`] (or the [prelude](crate::prelude)) to use them.
//!
//! A null string fails every check except [`is_null_or_empty`](StringChecks::is_null_or_empty).
//! Lengths are counted in `char`s. Length failures on present text report
//! [`ViolationKind::OutOfRange`]; everything else reports
//! [`ViolationKind::Generic`].
//!
//! ```rust
//! use stipulate::prelude::*;
//!
//! let name = requires_named("ferris", "name")
//!     .is_not_empty()
//!     .and_then(|v| v.starts_with("fer"))
//!     .and_then(|v| v.is_shorter_than(10));
//! assert!(name.is_ok());
//!
//! let err = requires_named(None::<String>, "name").is_not_null_or_empty().unwrap_err();
//! assert_eq!(err.message(), "name should not be null or empty.");
//! ```

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::strategy::{FailureStrategy, ViolationKind};
use crate::value::ArgumentValue;
use crate::Validator;

/// A value that may hold text.
pub trait TextValue: ArgumentValue {
    /// The text; `None` when the value is null.
    fn as_text(&self) -> Option<&str>;
}

impl TextValue for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextValue for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextValue for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: TextValue + ?Sized> TextValue for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: TextValue + ?Sized> TextValue for Box<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: TextValue + ?Sized> TextValue for Rc<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: TextValue + ?Sized> TextValue for Arc<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: TextValue> TextValue for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(TextValue::as_text)
    }
}

/// Text checks for validators holding a [`TextValue`].
pub trait StringChecks: Sized {
    /// Error produced when a check fails.
    type Error;

    /// Check that the text is empty.
    fn is_empty(self) -> Result<Self, Self::Error>;
    /// [`is_empty`](Self::is_empty) with a description template.
    fn is_empty_with(self, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text is not empty.
    fn is_not_empty(self) -> Result<Self, Self::Error>;
    /// [`is_not_empty`](Self::is_not_empty) with a description template.
    fn is_not_empty_with(self, description: &str) -> Result<Self, Self::Error>;

    /// Check that the value is null or empty text.
    fn is_null_or_empty(self) -> Result<Self, Self::Error>;
    /// [`is_null_or_empty`](Self::is_null_or_empty) with a description
    /// template.
    fn is_null_or_empty_with(self, description: &str) -> Result<Self, Self::Error>;

    /// Check that the value is non-empty text.
    fn is_not_null_or_empty(self) -> Result<Self, Self::Error>;
    /// [`is_not_null_or_empty`](Self::is_not_null_or_empty) with a
    /// description template.
    fn is_not_null_or_empty_with(self, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text starts with `prefix`.
    fn starts_with(self, prefix: &str) -> Result<Self, Self::Error>;
    /// [`starts_with`](Self::starts_with) with a description template.
    fn starts_with_with(self, prefix: &str, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text does not start with `prefix`.
    fn does_not_start_with(self, prefix: &str) -> Result<Self, Self::Error>;
    /// [`does_not_start_with`](Self::does_not_start_with) with a description
    /// template.
    fn does_not_start_with_with(self, prefix: &str, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text ends with `suffix`.
    fn ends_with(self, suffix: &str) -> Result<Self, Self::Error>;
    /// [`ends_with`](Self::ends_with) with a description template.
    fn ends_with_with(self, suffix: &str, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text does not end with `suffix`.
    fn does_not_end_with(self, suffix: &str) -> Result<Self, Self::Error>;
    /// [`does_not_end_with`](Self::does_not_end_with) with a description
    /// template.
    fn does_not_end_with_with(self, suffix: &str, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text contains `needle`.
    fn contains(self, needle: &str) -> Result<Self, Self::Error>;
    /// [`contains`](Self::contains) with a description template.
    fn contains_with(self, needle: &str, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text does not contain `needle`.
    fn does_not_contain(self, needle: &str) -> Result<Self, Self::Error>;
    /// [`does_not_contain`](Self::does_not_contain) with a description
    /// template.
    fn does_not_contain_with(self, needle: &str, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text is exactly `length` characters long.
    fn has_length(self, length: usize) -> Result<Self, Self::Error>;
    /// [`has_length`](Self::has_length) with a description template.
    fn has_length_with(self, length: usize, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text is shorter than `length` characters.
    fn is_shorter_than(self, length: usize) -> Result<Self, Self::Error>;
    /// [`is_shorter_than`](Self::is_shorter_than) with a description
    /// template.
    fn is_shorter_than_with(self, length: usize, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text is at most `length` characters long.
    fn is_shorter_or_equal(self, length: usize) -> Result<Self, Self::Error>;
    /// [`is_shorter_or_equal`](Self::is_shorter_or_equal) with a
    /// description template.
    fn is_shorter_or_equal_with(self, length: usize, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text is longer than `length` characters.
    fn is_longer_than(self, length: usize) -> Result<Self, Self::Error>;
    /// [`is_longer_than`](Self::is_longer_than) with a description template.
    fn is_longer_than_with(self, length: usize, description: &str) -> Result<Self, Self::Error>;

    /// Check that the text is at least `length` characters long.
    fn is_longer_or_equal(self, length: usize) -> Result<Self, Self::Error>;
    /// [`is_longer_or_equal`](Self::is_longer_or_equal) with a description
    /// template.
    fn is_longer_or_equal_with(self, length: usize, description: &str) -> Result<Self, Self::Error>;
}

impl<T, S> Validator<T, S>
where
    T: TextValue,
    S: FailureStrategy,
{
    fn text_check<P, F>(
        self,
        passes: P,
        description: Option<&str>,
        kind: ViolationKind,
        default_phrase: F,
    ) -> Result<Self, S::Error>
    where
        P: FnOnce(&str) -> bool,
        F: FnOnce(&str) -> String,
    {
        let passed = self.value().as_text().is_some_and(passes);
        self.verify(passed, description, kind, default_phrase)
    }

    fn length_check(
        self,
        passes: impl FnOnce(usize) -> bool,
        description: Option<&str>,
        relation: &str,
        length: usize,
    ) -> Result<Self, S::Error> {
        let kind = if self.value().is_null() {
            ViolationKind::Generic
        } else {
            ViolationKind::OutOfRange
        };
        self.text_check(
            |text| passes(text.chars().count()),
            description,
            kind,
            |name| format!("{name} {relation} {length} characters"),
        )
    }
}

macro_rules! text_pair {
    ($name:ident, $name_with:ident, |$text:ident| $test:expr, $phrase:literal) => {
        fn $name(self) -> Result<Self, S::Error> {
            self.text_check(|$text| $test, None, ViolationKind::Generic, |name| {
                format!(concat!("{} ", $phrase), name)
            })
        }

        fn $name_with(self, description: &str) -> Result<Self, S::Error> {
            self.text_check(|$text| $test, Some(description), ViolationKind::Generic, |name| {
                format!(concat!("{} ", $phrase), name)
            })
        }
    };
}

macro_rules! affix_pair {
    ($name:ident, $name_with:ident, $expect:literal, $method:ident, $phrase:literal) => {
        fn $name(self, affix: &str) -> Result<Self, S::Error> {
            self.text_check(|text| text.$method(affix) == $expect, None, ViolationKind::Generic, |name| {
                format!(concat!("{} ", $phrase, " '{}'"), name, affix)
            })
        }

        fn $name_with(self, affix: &str, description: &str) -> Result<Self, S::Error> {
            self.text_check(
                |text| text.$method(affix) == $expect,
                Some(description),
                ViolationKind::Generic,
                |name| format!(concat!("{} ", $phrase, " '{}'"), name, affix),
            )
        }
    };
}

macro_rules! length_pair {
    ($name:ident, $name_with:ident, |$len:ident, $limit:ident| $test:expr, $relation:literal) => {
        fn $name(self, $limit: usize) -> Result<Self, S::Error> {
            self.length_check(|$len| $test, None, $relation, $limit)
        }

        fn $name_with(self, $limit: usize, description: &str) -> Result<Self, S::Error> {
            self.length_check(|$len| $test, Some(description), $relation, $limit)
        }
    };
}

impl<T, S> StringChecks for Validator<T, S>
where
    T: TextValue,
    S: FailureStrategy,
{
    type Error = S::Error;

    text_pair!(is_empty, is_empty_with, |text| text.is_empty(), "should be empty");
    text_pair!(is_not_empty, is_not_empty_with, |text| !text.is_empty(), "should not be empty");

    fn is_null_or_empty(self) -> Result<Self, S::Error> {
        let passed = self.value().as_text().is_none_or(str::is_empty);
        self.verify(passed, None, ViolationKind::Generic, |name| {
            format!("{name} should be null or empty")
        })
    }

    fn is_null_or_empty_with(self, description: &str) -> Result<Self, S::Error> {
        let passed = self.value().as_text().is_none_or(str::is_empty);
        self.verify(passed, Some(description), ViolationKind::Generic, |name| {
            format!("{name} should be null or empty")
        })
    }

    text_pair!(
        is_not_null_or_empty,
        is_not_null_or_empty_with,
        |text| !text.is_empty(),
        "should not be null or empty"
    );

    affix_pair!(starts_with, starts_with_with, true, starts_with, "should start with");
    affix_pair!(does_not_start_with, does_not_start_with_with, false, starts_with, "should not start with");
    affix_pair!(ends_with, ends_with_with, true, ends_with, "should end with");
    affix_pair!(does_not_end_with, does_not_end_with_with, false, ends_with, "should not end with");
    affix_pair!(contains, contains_with, true, contains, "should contain");
    affix_pair!(does_not_contain, does_not_contain_with, false, contains, "should not contain");

    length_pair!(has_length, has_length_with, |len, length| len == length, "should have a length of");
    length_pair!(is_shorter_than, is_shorter_than_with, |len, length| len < length, "should be shorter than");
    length_pair!(
        is_shorter_or_equal,
        is_shorter_or_equal_with,
        |len, length| len <= length,
        "should be shorter or equal to"
    );
    length_pair!(is_longer_than, is_longer_than_with, |len, length| len > length, "should be longer than");
    length_pair!(
        is_longer_or_equal,
        is_longer_or_equal_with,
        |len, length| len >= length,
        "should be longer or equal to"
    );
}
