//! Error types produced by failed checks
//!
//! Which error a failed check produces depends on the strategy bound to the
//! chain:
//!
//! - [`requires`](crate::requires) chains produce an [`ArgumentError`], whose
//!   variant tells the caller *how* the argument was wrong.
//! - [`ensures`](crate::ensures) chains produce a single
//!   [`PostconditionError`]; a broken postcondition is a bug in the callee,
//!   not something callers branch on.
//! - Custom error chains produce the caller's own error type.
//!
//! Resolving a custom error type that cannot be built from a message fails
//! with [`InvalidExtensionType`].
//!
//! # Example
//!
//! ```rust
//! use stipulate::{requires, ArgumentError};
//!
//! let err = requires(3).is_greater_than(5).unwrap_err();
//! assert!(matches!(err, ArgumentError::OutOfRange { .. }));
//! assert_eq!(err.message(), "value should be greater than 5.");
//! assert_eq!(err.argument_name(), "value");
//! ```

use thiserror::Error;

use crate::strategy::ViolationKind;

/// Failure of a precondition (`requires`) check.
///
/// Every variant carries the offending argument's name and the composed
/// message. The message always ends in a period, optionally followed by an
/// elaboration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgumentError {
    /// The argument was null where a value was required.
    #[error("{message}")]
    Null {
        /// Name of the offending argument.
        argument_name: String,
        /// Composed failure message.
        message: String,
    },
    /// The argument was present but outside the permitted bounds.
    #[error("{message}")]
    OutOfRange {
        /// Name of the offending argument.
        argument_name: String,
        /// Composed failure message.
        message: String,
    },
    /// The argument is an enumerated value outside its permitted bounds.
    ///
    /// The message is already rendered with the argument name appended as
    /// `(Parameter 'name')`.
    #[error("{message}")]
    InvalidEnum {
        /// Name of the offending argument.
        argument_name: String,
        /// Composed failure message, including the parameter suffix.
        message: String,
    },
    /// The argument violated a condition that is neither a range nor a null
    /// check.
    #[error("{message}")]
    Invalid {
        /// Name of the offending argument.
        argument_name: String,
        /// Composed failure message.
        message: String,
    },
}

impl ArgumentError {
    /// Name of the argument that failed the check.
    pub fn argument_name(&self) -> &str {
        match self {
            ArgumentError::Null { argument_name, .. }
            | ArgumentError::OutOfRange { argument_name, .. }
            | ArgumentError::InvalidEnum { argument_name, .. }
            | ArgumentError::Invalid { argument_name, .. } => argument_name,
        }
    }

    /// Human-readable failure message.
    pub fn message(&self) -> &str {
        match self {
            ArgumentError::Null { message, .. }
            | ArgumentError::OutOfRange { message, .. }
            | ArgumentError::InvalidEnum { message, .. }
            | ArgumentError::Invalid { message, .. } => message,
        }
    }

    /// The violation classification this error was built from.
    ///
    /// Both [`ArgumentError::Null`] and [`ArgumentError::Invalid`] map to
    /// [`ViolationKind::Generic`]; they differ only in whether the held value
    /// was null.
    pub fn kind(&self) -> ViolationKind {
        match self {
            ArgumentError::OutOfRange { .. } => ViolationKind::OutOfRange,
            ArgumentError::InvalidEnum { .. } => ViolationKind::InvalidEnum,
            ArgumentError::Null { .. } | ArgumentError::Invalid { .. } => ViolationKind::Generic,
        }
    }

    /// Returns true for the null-argument variant.
    pub fn is_null(&self) -> bool {
        matches!(self, ArgumentError::Null { .. })
    }
}

/// Failure of a postcondition (`ensures`) check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct PostconditionError {
    message: String,
}

impl PostconditionError {
    /// Create a postcondition error from a composed message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A type handed to the registry cannot serve as a custom failure error.
///
/// Raised when the type is abstract, or when it does not expose exactly one
/// constructor taking the failure message alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message} (Parameter '{param_name}')")]
pub struct InvalidExtensionType {
    /// Name of the rejected type.
    pub type_name: String,
    /// Name of the generic parameter that was rejected.
    pub param_name: String,
    /// Reason for the rejection.
    pub message: String,
}

impl InvalidExtensionType {
    pub(crate) const PARAM_NAME: &'static str = "TException";
    pub(crate) const MESSAGE: &'static str =
        "The type must be concrete and have a public constructor with a single string argument";

    pub(crate) fn for_type(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            param_name: Self::PARAM_NAME.to_string(),
            message: Self::MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out_of_range() -> ArgumentError {
        ArgumentError::OutOfRange {
            argument_name: "age".to_string(),
            message: "age should be greater than 0.".to_string(),
        }
    }

    #[test]
    fn test_accessors() {
        let err = out_of_range();
        assert_eq!(err.argument_name(), "age");
        assert_eq!(err.message(), "age should be greater than 0.");
        assert_eq!(err.kind(), ViolationKind::OutOfRange);
        assert!(!err.is_null());
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(out_of_range().to_string(), "age should be greater than 0.");
    }

    #[test]
    fn test_null_and_invalid_share_generic_kind() {
        let null = ArgumentError::Null {
            argument_name: "x".to_string(),
            message: "x should not be null.".to_string(),
        };
        let invalid = ArgumentError::Invalid {
            argument_name: "x".to_string(),
            message: "x should be valid.".to_string(),
        };
        assert_eq!(null.kind(), ViolationKind::Generic);
        assert_eq!(invalid.kind(), ViolationKind::Generic);
        assert!(null.is_null());
    }

    #[test]
    fn test_postcondition_error() {
        let err = PostconditionError::new("value should not be null.");
        assert_eq!(err.message(), "value should not be null.");
        assert_eq!(err.to_string(), "value should not be null.");
    }

    #[test]
    fn test_invalid_extension_type() {
        let err = InvalidExtensionType::for_type("MyError");
        assert_eq!(err.param_name, "TException");
        assert_eq!(err.type_name, "MyError");
        assert!(err
            .to_string()
            .contains("must be concrete and have a public constructor with a single string argument"));
        assert!(err.to_string().ends_with("(Parameter 'TException')"));
    }

    #[test]
    fn test_error_trait() {
        let err: &dyn std::error::Error = &out_of_range();
        assert!(err.source().is_none());
    }
}
