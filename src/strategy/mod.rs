//! Failure strategies
//!
//! A [`FailureStrategy`] decides what a failed check turns into. The strategy
//! is fixed when a chain starts and every check in that chain reports its
//! violations through it.
//!
//! | Strategy | Error | Uses [`ViolationKind`] | Uses argument name |
//! |---|---|---|---|
//! | [`Precondition`] | [`ArgumentError`](crate::ArgumentError) | yes | yes |
//! | [`Postcondition`] | [`PostconditionError`](crate::PostconditionError) | no | no |
//! | [`CustomException<E>`] | `E` | no | no |
//! | [`Suppressed<S>`] | `S::Error`, never produced | no | no |
//!
//! # Example
//!
//! ```rust
//! use stipulate::strategy::{FailureStrategy, Postcondition, Precondition, Violation, ViolationKind};
//!
//! let violation = Violation::new("age", false, "age should be positive", ViolationKind::OutOfRange);
//!
//! let pre = Precondition.raise_failure(violation.clone()).unwrap_err();
//! assert_eq!(pre.argument_name(), "age");
//!
//! let post = Postcondition.raise_failure(violation).unwrap_err();
//! assert_eq!(post.message(), "age should be positive.");
//! ```

mod custom;
mod postcondition;
mod precondition;
mod suppressed;

use std::sync::Arc;

pub use custom::CustomException;
pub use postcondition::Postcondition;
pub use precondition::Precondition;
pub use suppressed::Suppressed;

use crate::message;

/// Classification of a violation, used to pick the precondition error shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViolationKind {
    /// A present value fell outside its permitted bounds.
    OutOfRange,
    /// An enumerated value fell outside its permitted bounds.
    InvalidEnum,
    /// Any other violation, including null checks.
    Generic,
}

/// Everything a strategy needs to know about a failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation<'a> {
    argument_name: &'a str,
    value_is_null: bool,
    condition: String,
    additional_message: Option<String>,
    kind: ViolationKind,
}

impl<'a> Violation<'a> {
    /// Describe a violation of `condition` by the argument `argument_name`.
    pub fn new(
        argument_name: &'a str,
        value_is_null: bool,
        condition: impl Into<String>,
        kind: ViolationKind,
    ) -> Self {
        Self {
            argument_name,
            value_is_null,
            condition: condition.into(),
            additional_message: None,
            kind,
        }
    }

    /// Attach an elaboration appended after the condition.
    pub fn with_additional_message(mut self, additional: impl Into<String>) -> Self {
        self.additional_message = Some(additional.into());
        self
    }

    /// Name of the argument that failed.
    pub fn argument_name(&self) -> &str {
        self.argument_name
    }

    /// Whether the held value was null when the check failed.
    pub fn value_is_null(&self) -> bool {
        self.value_is_null
    }

    /// The condition phrase, without the trailing period.
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// The optional elaboration.
    pub fn additional_message(&self) -> Option<&str> {
        self.additional_message.as_deref()
    }

    /// The violation classification.
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// The composed message: condition, period, optional elaboration.
    pub fn message(&self) -> String {
        message::compose(&self.condition, self.additional_message.as_deref())
    }
}

/// Turns a violation into the error a chain reports.
///
/// Implementations return `Err` with the error for the violation. Only the
/// test-only [`Suppressed`] strategy returns `Ok(())`, which lets the failed
/// check pass.
///
/// # Example
///
/// A strategy that reports violations as plain strings:
///
/// ```rust
/// use stipulate::strategy::{FailureStrategy, Violation};
/// use stipulate::Validator;
///
/// struct AsString;
///
/// impl FailureStrategy for AsString {
///     type Error = String;
///
///     fn label(&self) -> &'static str {
///         "string"
///     }
///
///     fn raise_failure(&self, violation: Violation<'_>) -> Result<(), String> {
///         Err(violation.message())
///     }
/// }
///
/// let err = Validator::new(3, "count", AsString).is_greater_than(5).unwrap_err();
/// assert_eq!(err, "count should be greater than 5.");
/// ```
pub trait FailureStrategy {
    /// Error produced for a violation.
    type Error;

    /// Short name of the strategy, used in log events.
    fn label(&self) -> &'static str;

    /// Report a violation.
    fn raise_failure(&self, violation: Violation<'_>) -> Result<(), Self::Error>;
}

impl<S: FailureStrategy + ?Sized> FailureStrategy for &S {
    type Error = S::Error;

    fn label(&self) -> &'static str {
        (**self).label()
    }

    fn raise_failure(&self, violation: Violation<'_>) -> Result<(), Self::Error> {
        (**self).raise_failure(violation)
    }
}

impl<S: FailureStrategy + ?Sized> FailureStrategy for Arc<S> {
    type Error = S::Error;

    fn label(&self) -> &'static str {
        (**self).label()
    }

    fn raise_failure(&self, violation: Violation<'_>) -> Result<(), Self::Error> {
        (**self).raise_failure(violation)
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn trace_failure(strategy: &'static str, violation: &Violation<'_>) {
    tracing::debug!(
        strategy,
        argument = violation.argument_name(),
        kind = ?violation.kind(),
        "check failed: {}",
        violation.condition()
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn trace_failure(_strategy: &'static str, _violation: &Violation<'_>) {}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for ViolationKind {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        prop_oneof![
            Just(ViolationKind::OutOfRange),
            Just(ViolationKind::InvalidEnum),
            Just(ViolationKind::Generic),
        ]
        .boxed()
    }
}
