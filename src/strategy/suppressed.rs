//! Test-only strategy that lets every check pass.

use super::{FailureStrategy, Violation};

/// Wraps a chain's strategy and swallows its violations.
///
/// Created by [`Validator::suppress`](crate::Validator::suppress). It only
/// affects the chain it was created for: the wrapped strategy is untouched
/// and other chains sharing it keep failing normally.
///
/// # Example
///
/// ```rust
/// use stipulate::requires;
///
/// assert!(requires(3).suppress().evaluate(false).is_ok());
/// assert!(requires(3).evaluate(false).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Suppressed<S> {
    inner: S,
}

impl<S> Suppressed<S> {
    /// Suppress failures of `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The strategy whose failures are suppressed.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Stop suppressing, returning the original strategy.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: FailureStrategy> FailureStrategy for Suppressed<S> {
    type Error = S::Error;

    fn label(&self) -> &'static str {
        "suppressed"
    }

    fn raise_failure(&self, violation: Violation<'_>) -> Result<(), Self::Error> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            strategy = self.inner.label(),
            argument = violation.argument_name(),
            "suppressed failure: {}",
            violation.condition()
        );
        #[cfg(not(feature = "tracing"))]
        let _ = violation;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{Precondition, ViolationKind};

    #[test]
    fn test_swallows_violation() {
        let strategy = Suppressed::new(Precondition);
        let v = Violation::new("x", true, "x should not be null", ViolationKind::Generic);
        assert!(strategy.raise_failure(v).is_ok());
    }

    #[test]
    fn test_inner_strategy_still_fails() {
        let strategy = Suppressed::new(Precondition);
        let v = Violation::new("x", true, "x should not be null", ViolationKind::Generic);
        assert!(strategy.inner().raise_failure(v).is_err());
        assert_eq!(strategy.into_inner(), Precondition);
    }
}
