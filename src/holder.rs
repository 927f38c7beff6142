//! The value and argument name a chain checks.

use crate::message;

/// Immutable pairing of an argument name and the value being checked.
///
/// No validation happens on construction: null or otherwise invalid values
/// are accepted, since checking them is the point.
///
/// # Example
///
/// ```rust
/// use stipulate::ValueHolder;
///
/// let holder = ValueHolder::new("port", 8080);
/// assert_eq!(holder.argument_name(), "port");
/// assert_eq!(*holder.value(), 8080);
///
/// let unnamed = ValueHolder::new("", 1);
/// assert_eq!(unnamed.argument_name(), "value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueHolder<T> {
    argument_name: String,
    value: T,
}

impl<T> ValueHolder<T> {
    /// Hold `value` under `argument_name`.
    pub fn new(argument_name: impl Into<String>, value: T) -> Self {
        Self {
            argument_name: argument_name.into(),
            value,
        }
    }

    /// The argument name, or `"value"` if it was created without one.
    pub fn argument_name(&self) -> &str {
        message::display_name(&self.argument_name)
    }

    /// The held value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the holder, returning the value.
    pub fn into_value(self) -> T {
        self.value
    }

    pub(crate) fn rename(self, argument_name: impl Into<String>) -> Self {
        Self {
            argument_name: argument_name.into(),
            value: self.value,
        }
    }
}
