//! Capabilities checks need from a held value
//!
//! Every value wrapped in a [`Validator`](crate::Validator) implements
//! [`ArgumentValue`], which answers three questions:
//!
//! - Is the value null? Only `Option::None` is null among the built-in
//!   implementations.
//! - Is the value an enumeration? Range failures on enumerations are reported
//!   as [`ViolationKind::InvalidEnum`](crate::ViolationKind::InvalidEnum)
//!   instead of `OutOfRange`.
//! - How is the value rendered inside a failure message?
//!
//! Implementing it for your own types is usually a one-liner:
//!
//! ```rust
//! use stipulate::{requires, ArgumentError, ArgumentValue};
//!
//! #[derive(Debug, PartialEq, PartialOrd)]
//! enum Level {
//!     Low,
//!     Mid,
//!     High,
//! }
//!
//! impl ArgumentValue for Level {
//!     const ENUMERATION: bool = true;
//! }
//!
//! let err = requires(Level::Low).is_greater_than(Level::Mid).unwrap_err();
//! assert!(matches!(err, ArgumentError::InvalidEnum { .. }));
//! assert_eq!(
//!     err.message(),
//!     "value should be greater than Mid. (Parameter 'value')"
//! );
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// A value that can be held and checked by a validator.
pub trait ArgumentValue: fmt::Debug {
    /// Whether values of this type are enumerations.
    const ENUMERATION: bool = false;

    /// Whether this value is null.
    fn is_null(&self) -> bool {
        false
    }

    /// Text used for this value inside failure messages.
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

macro_rules! impl_display_argument_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ArgumentValue for $ty {
                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_display_argument_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String
);

impl ArgumentValue for Cow<'_, str> {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl ArgumentValue for () {}
impl ArgumentValue for Duration {}

impl ArgumentValue for Ordering {
    const ENUMERATION: bool = true;
}

impl<T: ArgumentValue> ArgumentValue for Option<T> {
    const ENUMERATION: bool = T::ENUMERATION;

    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn describe(&self) -> String {
        match self {
            Some(value) => value.describe(),
            None => "null".to_string(),
        }
    }
}

impl<T: ArgumentValue + ?Sized> ArgumentValue for &T {
    const ENUMERATION: bool = T::ENUMERATION;

    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

macro_rules! impl_pointer_argument_value {
    ($($ptr:ident),+ $(,)?) => {
        $(
            impl<T: ArgumentValue + ?Sized> ArgumentValue for $ptr<T> {
                const ENUMERATION: bool = T::ENUMERATION;

                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                fn describe(&self) -> String {
                    (**self).describe()
                }
            }
        )+
    };
}

impl_pointer_argument_value!(Box, Rc, Arc);

impl<T: ArgumentValue> ArgumentValue for [T] {
    fn describe(&self) -> String {
        describe_all(self)
    }
}

impl<T: ArgumentValue, const N: usize> ArgumentValue for [T; N] {
    fn describe(&self) -> String {
        describe_all(self)
    }
}

impl<T: ArgumentValue> ArgumentValue for Vec<T> {
    fn describe(&self) -> String {
        describe_all(self)
    }
}

/// Render a sequence of values as `[a, b, c]`.
pub(crate) fn describe_all<T: ArgumentValue>(values: &[T]) -> String {
    let parts: Vec<String> = values.iter().map(ArgumentValue::describe).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Color {
        Red,
    }

    impl ArgumentValue for Color {
        const ENUMERATION: bool = true;
    }

    #[test]
    fn test_primitives_are_never_null() {
        assert!(!5_i32.is_null());
        assert!(!"".is_null());
        assert!(!String::new().is_null());
    }

    #[test]
    fn test_option_null_ness() {
        assert!(None::<i32>.is_null());
        assert!(!Some(1_i32).is_null());
    }

    #[test]
    fn test_describe() {
        assert_eq!(5_i32.describe(), "5");
        assert_eq!(2.5_f64.describe(), "2.5");
        assert_eq!("abc".describe(), "abc");
        assert_eq!(Some(7_u8).describe(), "7");
        assert_eq!(None::<i32>.describe(), "null");
        assert_eq!(vec![1_i64, 2, 3].describe(), "[1, 2, 3]");
        assert_eq!(Color::Red.describe(), "Red");
    }

    #[test]
    fn test_enumeration_propagates() {
        assert!(<Color as ArgumentValue>::ENUMERATION);
        assert!(<Option<Color> as ArgumentValue>::ENUMERATION);
        assert!(<&Color as ArgumentValue>::ENUMERATION);
        assert!(!<i32 as ArgumentValue>::ENUMERATION);
    }

    #[test]
    fn test_references_and_pointers_delegate() {
        let missing: Option<i32> = None;
        assert!((&missing).is_null());
        assert!(Box::new(missing).is_null());
        assert_eq!(Arc::new(4_u32).describe(), "4");
    }
}
