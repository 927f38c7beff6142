//! Postcondition strategy: every violation becomes a [`PostconditionError`].

use super::{trace_failure, FailureStrategy, Violation};
use crate::error::PostconditionError;

/// Reports violations as bugs in the routine that produced the value.
///
/// The violation kind and argument name do not shape the error: callers are
/// not expected to recover from individual postcondition kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Postcondition;

impl FailureStrategy for Postcondition {
    type Error = PostconditionError;

    fn label(&self) -> &'static str {
        "postcondition"
    }

    fn raise_failure(&self, violation: Violation<'_>) -> Result<(), Self::Error> {
        trace_failure(self.label(), &violation);
        Err(PostconditionError::new(violation.message()))
    }
}
