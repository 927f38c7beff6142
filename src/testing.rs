//! Assertion helpers for testing code built on checks
//!
//! Both macros accept the `Result` returned by any check, whatever the
//! strategy behind the chain.
//!
//! # Examples
//!
//! ```rust
//! use stipulate::{assert_passes, assert_violation, requires, ArgumentError};
//!
//! assert_passes!(requires(5).is_greater_than(1));
//!
//! assert_violation!(requires(0).is_greater_than(1));
//! assert_violation!(
//!     requires(0).is_greater_than(1),
//!     ArgumentError::OutOfRange {
//!         argument_name: "value".to_string(),
//!         message: "value should be greater than 1.".to_string(),
//!     }
//! );
//! ```

/// Assert that a check passed.
///
/// Panics with the reported error if the check failed. Evaluates to the
/// validator, so the chain can continue.
///
/// # Example
///
/// ```rust
/// use stipulate::{assert_passes, requires_named};
///
/// let port = assert_passes!(requires_named(8080, "port").is_in_range(1, 65535));
/// assert_eq!(port.into_inner(), 8080);
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($check:expr) => {
        match $check {
            ::std::result::Result::Ok(validator) => validator,
            ::std::result::Result::Err(e) => {
                panic!("Expected check to pass, got violation: {:?}", e);
            }
        }
    };
}

/// Assert that a check failed, optionally with a specific error.
///
/// Panics if the check passed, or if the error differs from `expected`.
/// Evaluates to the error.
///
/// # Example
///
/// ```rust
/// use stipulate::{assert_violation, ensures, PostconditionError};
///
/// let err = assert_violation!(ensures(None::<u8>).is_not_null());
/// assert_eq!(err.message(), "value should not be null.");
///
/// assert_violation!(
///     ensures(2).is_equal_to(3),
///     PostconditionError::new("value should be equal to 3.")
/// );
/// ```
#[macro_export]
macro_rules! assert_violation {
    ($check:expr) => {
        match $check {
            ::std::result::Result::Err(e) => e,
            ::std::result::Result::Ok(validator) => {
                panic!("Expected violation, got passing check: {:?}", validator);
            }
        }
    };
    ($check:expr, $expected:expr) => {
        match $check {
            ::std::result::Result::Err(e) => {
                assert_eq!(e, $expected);
                e
            }
            ::std::result::Result::Ok(validator) => {
                panic!(
                    "Expected violation {:?}, got passing check: {:?}",
                    $expected, validator
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::error::ArgumentError;
    use crate::{requires, requires_named};

    #[test]
    fn assert_passes_returns_validator() {
        let v = assert_passes!(requires_named(3, "n").is_less_than(4));
        assert_eq!(v.argument_name(), "n");
    }

    #[test]
    fn assert_violation_returns_error() {
        let err = assert_violation!(requires(None::<i32>).is_not_null());
        assert!(err.is_null());
    }

    #[test]
    fn assert_violation_matches_expected() {
        assert_violation!(
            requires_named(7, "n").is_less_than(4),
            ArgumentError::OutOfRange {
                argument_name: "n".to_string(),
                message: "n should be less than 4.".to_string(),
            }
        );
    }

    #[test]
    #[should_panic(expected = "Expected check to pass, got violation")]
    fn assert_passes_panics_on_violation() {
        assert_passes!(requires(1).is_greater_than(2));
    }

    #[test]
    #[should_panic(expected = "Expected violation, got passing check")]
    fn assert_violation_panics_on_pass() {
        assert_violation!(requires(3).is_greater_than(2));
    }

    #[test]
    #[should_panic]
    fn assert_violation_panics_on_different_error() {
        assert_violation!(
            requires(1).is_greater_than(2),
            ArgumentError::Null {
                argument_name: "value".to_string(),
                message: "value should not be null.".to_string(),
            }
        );
    }
}
