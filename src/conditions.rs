//! Entry points that start a chain of checks
//!
//! [`requires`] checks arguments supplied by a caller and reports failures as
//! [`ArgumentError`](crate::ArgumentError). [`ensures`] checks values the
//! current routine produced and reports failures as
//! [`PostconditionError`](crate::PostconditionError). Both take an optional
//! argument name through their `_named` forms; without one, messages use
//! `"value"`.
//!
//! Failures can also be reported as an error type of your own, through
//! [`with_custom_exception`] or a [`Conditions`] object with its own
//! registry.
//!
//! # Example
//!
//! ```rust
//! use stipulate::{ensures, requires_named, ArgumentError, PostconditionError};
//!
//! fn halve(n: i64) -> Result<i64, Box<dyn std::error::Error>> {
//!     let n = requires_named(n, "n").is_greater_or_equal(0)?.into_inner();
//!     let half = ensures(n / 2).is_less_or_equal(n)?.into_inner();
//!     Ok(half)
//! }
//!
//! assert_eq!(halve(10).unwrap(), 5);
//! let err = halve(-4).unwrap_err();
//! assert_eq!(err.to_string(), "n should be greater than or equal to 0.");
//! assert!(err.downcast_ref::<ArgumentError>().is_some());
//! assert!(err.downcast_ref::<PostconditionError>().is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::InvalidExtensionType;
use crate::registry::{ExceptionType, ExceptionTypeRegistry};
use crate::strategy::{CustomException, Postcondition, Precondition};
use crate::Validator;

/// Check a caller-supplied argument named `"value"`.
pub fn requires<T>(value: T) -> Validator<T, Precondition> {
    Validator::new(value, "", Precondition)
}

/// Check a caller-supplied argument under the given name.
pub fn requires_named<T>(value: T, argument_name: impl Into<String>) -> Validator<T, Precondition> {
    Validator::new(value, argument_name, Precondition)
}

/// Check a value produced by the current routine.
pub fn ensures<T>(value: T) -> Validator<T, Postcondition> {
    Validator::new(value, "", Postcondition)
}

/// Check a value produced by the current routine under the given name.
pub fn ensures_named<T>(value: T, argument_name: impl Into<String>) -> Validator<T, Postcondition> {
    Validator::new(value, argument_name, Postcondition)
}

/// Start chains that report failures as `E`, using the global registry.
///
/// # Errors
///
/// [`InvalidExtensionType`] if `E` cannot be built from a message alone.
///
/// # Example
///
/// ```rust
/// use stipulate::{message_exception, with_custom_exception};
///
/// #[derive(Debug, PartialEq)]
/// struct BadRequest(String);
///
/// impl From<String> for BadRequest {
///     fn from(message: String) -> Self {
///         BadRequest(message)
///     }
/// }
///
/// message_exception!(BadRequest);
///
/// let checks = with_custom_exception::<BadRequest>().unwrap();
/// let err = checks.requires_named(None::<&str>, "user").is_not_null().unwrap_err();
/// assert_eq!(err, BadRequest("user should not be null.".to_string()));
/// ```
pub fn with_custom_exception<E: ExceptionType>() -> Result<CustomEntry<E>, InvalidExtensionType> {
    Conditions::global().with_error::<E>()
}

/// Chains that report every failure as the error type `E`.
///
/// Both [`requires`](Self::requires) and [`ensures`](Self::ensures) use the
/// same cached strategy.
pub struct CustomEntry<E> {
    strategy: Arc<CustomException<E>>,
}

impl<E> CustomEntry<E> {
    /// Check a caller-supplied argument named `"value"`.
    pub fn requires<T>(&self, value: T) -> Validator<T, Arc<CustomException<E>>> {
        Validator::new(value, "", Arc::clone(&self.strategy))
    }

    /// Check a caller-supplied argument under the given name.
    pub fn requires_named<T>(
        &self,
        value: T,
        argument_name: impl Into<String>,
    ) -> Validator<T, Arc<CustomException<E>>> {
        Validator::new(value, argument_name, Arc::clone(&self.strategy))
    }

    /// Check a value produced by the current routine.
    pub fn ensures<T>(&self, value: T) -> Validator<T, Arc<CustomException<E>>> {
        Validator::new(value, "", Arc::clone(&self.strategy))
    }

    /// Check a value produced by the current routine under the given name.
    pub fn ensures_named<T>(
        &self,
        value: T,
        argument_name: impl Into<String>,
    ) -> Validator<T, Arc<CustomException<E>>> {
        Validator::new(value, argument_name, Arc::clone(&self.strategy))
    }

    /// The shared strategy behind these chains.
    pub fn strategy(&self) -> &Arc<CustomException<E>> {
        &self.strategy
    }
}

impl<E> Clone for CustomEntry<E> {
    fn clone(&self) -> Self {
        Self {
            strategy: Arc::clone(&self.strategy),
        }
    }
}

impl<E> fmt::Debug for CustomEntry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomEntry")
            .field("strategy", &self.strategy)
            .finish()
    }
}

/// Entry points bound to a particular [`ExceptionTypeRegistry`].
///
/// Use [`Conditions::with_registry`] to keep custom error types resolved by
/// one component (or one test) apart from the process-wide cache.
///
/// ```rust
/// use std::sync::Arc;
/// use stipulate::registry::ExceptionTypeRegistry;
/// use stipulate::Conditions;
///
/// let registry = Arc::new(ExceptionTypeRegistry::new());
/// let conditions = Conditions::with_registry(Arc::clone(&registry));
///
/// let checks = conditions.with_error::<String>().unwrap();
/// let err = checks.ensures(0).is_greater_than(0).unwrap_err();
/// assert_eq!(err, "value should be greater than 0.");
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Conditions {
    registry: Arc<ExceptionTypeRegistry>,
}

impl Conditions {
    /// Entry points backed by the process-wide registry.
    pub fn global() -> Self {
        Self::with_registry(ExceptionTypeRegistry::global())
    }

    /// Entry points backed by `registry`.
    pub fn with_registry(registry: Arc<ExceptionTypeRegistry>) -> Self {
        Self { registry }
    }

    /// The registry custom error types are resolved through.
    pub fn registry(&self) -> &Arc<ExceptionTypeRegistry> {
        &self.registry
    }

    /// Chains reporting failures as `E`.
    ///
    /// # Errors
    ///
    /// [`InvalidExtensionType`] if `E` cannot be built from a message alone.
    pub fn with_error<E: ExceptionType>(&self) -> Result<CustomEntry<E>, InvalidExtensionType> {
        let strategy = self.registry.resolve::<E>()?;
        Ok(CustomEntry { strategy })
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self::global()
    }
}
