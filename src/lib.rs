//! # Stipulate
//!
//! > *"State what you expect, and fail loudly when it isn't so"*
//!
//! Fluent precondition and postcondition checks for Rust.
//!
//! ## Philosophy
//!
//! A check names the value, states a condition, and either hands the value
//! back or reports who broke the contract:
//! - **Requires** = the caller passed a bad argument ([`ArgumentError`])
//! - **Ensures** = this routine produced a bad result ([`PostconditionError`])
//!
//! Checks are plain methods returning `Result`, so a chain stops at the first
//! failure with `?`.
//!
//! ## Quick Example
//!
//! ```rust
//! use stipulate::prelude::*;
//!
//! fn create_user(name: &str, age: u8) -> Result<String, ArgumentError> {
//!     let name = requires_named(name, "name")
//!         .is_not_empty()?
//!         .is_shorter_than(32)?
//!         .into_inner();
//!     requires_named(age, "age").is_in_range(18, 130)?;
//!     Ok(format!("{name} ({age})"))
//! }
//!
//! assert_eq!(create_user("ferris", 30).unwrap(), "ferris (30)");
//!
//! let err = create_user("ferris", 7).unwrap_err();
//! assert!(matches!(err, ArgumentError::OutOfRange { .. }));
//! assert_eq!(err.message(), "age should be between 18 and 130.");
//! ```
//!
//! ## Custom errors
//!
//! Any error type that can be built from a message can be raised instead:
//!
//! ```rust
//! use stipulate::{message_exception, with_custom_exception};
//!
//! #[derive(Debug, PartialEq)]
//! struct ApiError(String);
//!
//! impl From<String> for ApiError {
//!     fn from(message: String) -> Self {
//!         ApiError(message)
//!     }
//! }
//!
//! message_exception!(ApiError);
//!
//! let api = with_custom_exception::<ApiError>().unwrap();
//! let err = api.requires_named(-1, "limit").is_greater_than(0).unwrap_err();
//! assert_eq!(err, ApiError("limit should be greater than 0.".to_string()));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when checks fail and when custom error
//!   types are registered.
//! - `serde`: `Serialize`/`Deserialize` for errors and [`ViolationKind`].
//! - `proptest`: `Arbitrary` for [`ViolationKind`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod checks;
pub mod comparison;
mod conditions;
pub mod error;
mod holder;
pub mod message;
pub mod predicate;
pub mod registry;
pub mod strategy;
pub mod testing;
pub mod value;
mod validator;

// Re-exports
pub use checks::{CollectionChecks, CollectionValue, FloatValue, StringChecks, TextValue};
pub use conditions::{
    ensures, ensures_named, requires, requires_named, with_custom_exception, Conditions,
    CustomEntry,
};
pub use error::{ArgumentError, InvalidExtensionType, PostconditionError};
pub use holder::ValueHolder;
pub use message::DEFAULT_ARGUMENT_NAME;
pub use predicate::{Predicate, PredicateExt};
pub use registry::{ExceptionType, ExceptionTypeRegistry};
pub use strategy::{FailureStrategy, ViolationKind};
pub use validator::Validator;
pub use value::ArgumentValue;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checks::{CollectionChecks, StringChecks};
    pub use crate::conditions::{
        ensures, ensures_named, requires, requires_named, with_custom_exception, Conditions,
    };
    pub use crate::error::{ArgumentError, PostconditionError};
    pub use crate::predicate::PredicateExt;
    pub use crate::strategy::{FailureStrategy, ViolationKind};
    pub use crate::validator::Validator;
    pub use crate::value::ArgumentValue;
}
