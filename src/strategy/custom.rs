//! Custom error strategy: every violation becomes one caller-chosen error.

use std::fmt;

use super::{trace_failure, FailureStrategy, Violation};

/// Reports violations as the caller's own error type `E`.
///
/// Instances are created and cached by the
/// [`ExceptionTypeRegistry`](crate::registry::ExceptionTypeRegistry); obtain
/// one through [`resolve`](crate::registry::ExceptionTypeRegistry::resolve)
/// or [`with_custom_exception`](crate::with_custom_exception).
///
/// `E` is built from the composed message alone. The violation kind and the
/// argument name are dropped since the message constructor has no place for
/// them.
pub struct CustomException<E> {
    constructor: fn(String) -> E,
}

impl<E> CustomException<E> {
    pub(crate) fn new(constructor: fn(String) -> E) -> Self {
        Self { constructor }
    }
}

impl<E> fmt::Debug for CustomException<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomException")
            .field("error", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E> FailureStrategy for CustomException<E> {
    type Error = E;

    fn label(&self) -> &'static str {
        "custom"
    }

    fn raise_failure(&self, violation: Violation<'_>) -> Result<(), Self::Error> {
        trace_failure(self.label(), &violation);
        Err((self.constructor)(violation.message()))
    }
}
