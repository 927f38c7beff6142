//! Precondition strategy: violations become [`ArgumentError`]s.

use super::{trace_failure, FailureStrategy, Violation, ViolationKind};
use crate::error::ArgumentError;

/// Reports violations as caller misuse.
///
/// The error variant is chosen from the violation:
///
/// - [`ViolationKind::OutOfRange`] → [`ArgumentError::OutOfRange`]
/// - [`ViolationKind::InvalidEnum`] → [`ArgumentError::InvalidEnum`], with
///   the message suffixed by `(Parameter 'name')`
/// - [`ViolationKind::Generic`] → [`ArgumentError::Null`] if the held value
///   was null, otherwise [`ArgumentError::Invalid`]
///
/// # Example
///
/// ```rust
/// use stipulate::strategy::{FailureStrategy, Precondition, Violation, ViolationKind};
/// use stipulate::ArgumentError;
///
/// let v = Violation::new("name", true, "name should not be null", ViolationKind::Generic);
/// let err = Precondition.raise_failure(v).unwrap_err();
/// assert!(matches!(err, ArgumentError::Null { .. }));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Precondition;

impl Precondition {
    fn build(violation: &Violation<'_>) -> ArgumentError {
        let argument_name = violation.argument_name().to_string();
        let message = violation.message();

        match violation.kind() {
            ViolationKind::OutOfRange => ArgumentError::OutOfRange {
                argument_name,
                message,
            },
            ViolationKind::InvalidEnum => {
                let message = format!("{message} (Parameter '{argument_name}')");
                ArgumentError::InvalidEnum {
                    argument_name,
                    message,
                }
            }
            ViolationKind::Generic if violation.value_is_null() => ArgumentError::Null {
                argument_name,
                message,
            },
            ViolationKind::Generic => ArgumentError::Invalid {
                argument_name,
                message,
            },
        }
    }
}

impl FailureStrategy for Precondition {
    type Error = ArgumentError;

    fn label(&self) -> &'static str {
        "precondition"
    }

    fn raise_failure(&self, violation: Violation<'_>) -> Result<(), Self::Error> {
        trace_failure(self.label(), &violation);
        Err(Self::build(&violation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raise(null: bool, kind: ViolationKind) -> ArgumentError {
        let v = Violation::new("count", null, "count should be valid", kind);
        Precondition.raise_failure(v).unwrap_err()
    }

    #[test]
    fn test_out_of_range() {
        let err = raise(false, ViolationKind::OutOfRange);
        assert_eq!(
            err,
            ArgumentError::OutOfRange {
                argument_name: "count".to_string(),
                message: "count should be valid.".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_enum_appends_parameter() {
        let err = raise(false, ViolationKind::InvalidEnum);
        assert_eq!(
            err,
            ArgumentError::InvalidEnum {
                argument_name: "count".to_string(),
                message: "count should be valid. (Parameter 'count')".to_string(),
            }
        );
    }

    #[test]
    fn test_generic_non_null_is_invalid() {
        let err = raise(false, ViolationKind::Generic);
        assert!(matches!(err, ArgumentError::Invalid { .. }));
    }

    #[test]
    fn test_generic_null_is_null() {
        let err = raise(true, ViolationKind::Generic);
        assert!(matches!(err, ArgumentError::Null { .. }));
    }

    #[test]
    fn test_null_out_of_range_stays_out_of_range() {
        // Only the generic kind consults null-ness.
        let err = raise(true, ViolationKind::OutOfRange);
        assert!(matches!(err, ArgumentError::OutOfRange { .. }));
    }

    #[test]
    fn test_additional_message() {
        let v = Violation::new("count", false, "count should be even", ViolationKind::Generic)
            .with_additional_message("The actual value is 3.");
        let err = Precondition.raise_failure(v).unwrap_err();
        assert_eq!(err.message(), "count should be even. The actual value is 3.");
    }
}
