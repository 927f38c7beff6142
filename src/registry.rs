//! Registry of custom failure error types
//!
//! A chain can report failures as any error type that can be built from the
//! failure message alone. The [`ExceptionTypeRegistry`] checks that contract
//! once per type and caches the resulting [`CustomException`] strategy, so
//! every chain using the same error type shares one strategy instance.
//!
//! A type declares how it can be built by implementing [`ExceptionType`].
//! Most error types only need the [`message_exception!`](crate::message_exception)
//! macro, which uses their `From<String>` implementation.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use stipulate::message_exception;
//! use stipulate::registry::ExceptionTypeRegistry;
//!
//! #[derive(Debug)]
//! struct ConfigError(String);
//!
//! impl From<String> for ConfigError {
//!     fn from(message: String) -> Self {
//!         ConfigError(message)
//!     }
//! }
//!
//! message_exception!(ConfigError);
//!
//! let registry = ExceptionTypeRegistry::new();
//! let first = registry.resolve::<ConfigError>().unwrap();
//! let second = registry.resolve::<ConfigError>().unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//! ```

use std::any::{type_name, Any, TypeId};
use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::error::InvalidExtensionType;
use crate::strategy::CustomException;

/// A public way of constructing an error type.
pub enum Constructor<E> {
    /// Builds the error from the failure message and nothing else.
    Message(fn(String) -> E),
    /// Any other constructor, described by its signature.
    Other(&'static str),
}

impl<E> fmt::Debug for Constructor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constructor::Message(_) => f.write_str("Message(fn(String))"),
            Constructor::Other(signature) => f.debug_tuple("Other").field(signature).finish(),
        }
    }
}

/// An error type that may be raised by custom error chains.
///
/// The registry accepts a type only if it is concrete and lists exactly one
/// [`Constructor::Message`].
///
/// # Example
///
/// ```rust
/// use stipulate::registry::{Constructor, ExceptionType};
///
/// #[derive(Debug)]
/// struct QuotaError {
///     message: String,
///     limit: Option<u64>,
/// }
///
/// impl ExceptionType for QuotaError {
///     fn constructors() -> Vec<Constructor<Self>> {
///         vec![
///             Constructor::Message(|message| QuotaError { message, limit: None }),
///             Constructor::Other("(message: String, limit: u64)"),
///         ]
///     }
/// }
/// ```
pub trait ExceptionType: Sized + Send + Sync + 'static {
    /// Whether this type names a family of errors rather than one concrete
    /// error, such as a boxed trait object.
    const ABSTRACT: bool = false;

    /// The public constructors of this type.
    fn constructors() -> Vec<Constructor<Self>>;
}

/// Implement [`ExceptionType`] for types that convert `From<String>`.
///
/// ```rust
/// use stipulate::message_exception;
///
/// #[derive(Debug)]
/// struct ParseFailure(String);
///
/// impl From<String> for ParseFailure {
///     fn from(message: String) -> Self {
///         ParseFailure(message)
///     }
/// }
///
/// message_exception!(ParseFailure);
/// ```
#[macro_export]
macro_rules! message_exception {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::registry::ExceptionType for $ty {
                fn constructors() -> ::std::vec::Vec<$crate::registry::Constructor<Self>> {
                    ::std::vec![$crate::registry::Constructor::Message(
                        <$ty as ::std::convert::From<::std::string::String>>::from,
                    )]
                }
            }
        )+
    };
}

message_exception!(String);

impl ExceptionType for Box<dyn StdError + Send + Sync> {
    const ABSTRACT: bool = true;

    fn constructors() -> Vec<Constructor<Self>> {
        Vec::new()
    }
}

/// Concurrent cache of validated custom error strategies, keyed by type.
///
/// Validation failures are never cached: resolving a rejected type validates
/// and fails again on every call.
pub struct ExceptionTypeRegistry {
    strategies: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

static GLOBAL: OnceLock<Arc<ExceptionTypeRegistry>> = OnceLock::new();

impl ExceptionTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            strategies: DashMap::new(),
        }
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Get the strategy raising `E`, validating and caching it on first use.
    ///
    /// Concurrent first resolutions of the same type all receive the same
    /// instance.
    ///
    /// # Errors
    ///
    /// [`InvalidExtensionType`] if `E` is abstract or does not have exactly
    /// one message constructor.
    pub fn resolve<E: ExceptionType>(&self) -> Result<Arc<CustomException<E>>, InvalidExtensionType> {
        let key = TypeId::of::<E>();

        if let Some(cached) = self.strategies.get(&key) {
            if let Ok(strategy) = Arc::clone(cached.value()).downcast::<CustomException<E>>() {
                return Ok(strategy);
            }
        }

        let constructor = Self::message_constructor::<E>()?;

        let winner = {
            let entry = self.strategies.entry(key).or_insert_with(|| {
                #[cfg(feature = "tracing")]
                tracing::debug!(error_type = type_name::<E>(), "cached custom error strategy");
                let strategy: Arc<dyn Any + Send + Sync> = Arc::new(CustomException::new(constructor));
                strategy
            });
            Arc::clone(entry.value())
        };

        winner
            .downcast::<CustomException<E>>()
            .map_err(|_| InvalidExtensionType::for_type(type_name::<E>()))
    }

    /// Whether a strategy for `E` has been cached.
    pub fn contains<E: ExceptionType>(&self) -> bool {
        self.strategies.contains_key(&TypeId::of::<E>())
    }

    /// Number of cached strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    fn message_constructor<E: ExceptionType>() -> Result<fn(String) -> E, InvalidExtensionType> {
        let reject = || {
            #[cfg(feature = "tracing")]
            tracing::warn!(error_type = type_name::<E>(), "rejected custom error type");
            InvalidExtensionType::for_type(type_name::<E>())
        };

        if E::ABSTRACT {
            return Err(reject());
        }

        let mut message_constructors = E::constructors()
            .into_iter()
            .filter_map(|constructor| match constructor {
                Constructor::Message(build) => Some(build),
                Constructor::Other(_) => None,
            });

        match (message_constructors.next(), message_constructors.next()) {
            (Some(build), None) => Ok(build),
            _ => Err(reject()),
        }
    }
}

impl Default for ExceptionTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExceptionTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionTypeRegistry")
            .field("cached", &self.strategies.len())
            .finish()
    }
}
