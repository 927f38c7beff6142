//! IEEE-754 checks for floating point values
//!
//! These are direct predicates on the value and report
//! [`ViolationKind::Generic`]. A null optional float fails every one of them.
//!
//! ```rust
//! use stipulate::requires;
//!
//! assert!(requires(1.5_f64).is_not_nan().is_ok());
//! assert!(requires(f32::NEG_INFINITY).is_infinity().is_ok());
//! assert_eq!(
//!     requires(f64::NAN).is_not_nan().unwrap_err().message(),
//!     "value should not be NaN."
//! );
//! ```

use crate::strategy::{FailureStrategy, ViolationKind};
use crate::value::ArgumentValue;
use crate::Validator;

/// A value that may hold an IEEE-754 float.
pub trait FloatValue: ArgumentValue {
    /// The float, widened to `f64`; `None` when the value is null.
    fn as_f64(&self) -> Option<f64>;
}

impl FloatValue for f64 {
    fn as_f64(&self) -> Option<f64> {
        Some(*self)
    }
}

impl FloatValue for f32 {
    fn as_f64(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl<F: FloatValue> FloatValue for Option<F> {
    fn as_f64(&self) -> Option<f64> {
        self.as_ref().and_then(FloatValue::as_f64)
    }
}

impl<F: FloatValue + ?Sized> FloatValue for &F {
    fn as_f64(&self) -> Option<f64> {
        (**self).as_f64()
    }
}

macro_rules! float_checks {
    ($($name:ident, $name_with:ident, $phrase:literal, $test:expr;)+) => {
        impl<T, S> Validator<T, S>
        where
            T: FloatValue,
            S: FailureStrategy,
        {
            $(
                #[doc = concat!("Check that the value ", $phrase, ".")]
                pub fn $name(self) -> Result<Self, S::Error> {
                    self.float_check($test, None, $phrase)
                }

                #[doc = concat!("[`", stringify!($name), "`](Self::", stringify!($name), ") with a description template.")]
                pub fn $name_with(self, description: &str) -> Result<Self, S::Error> {
                    self.float_check($test, Some(description), $phrase)
                }
            )+

            fn float_check(
                self,
                test: fn(f64) -> bool,
                description: Option<&str>,
                phrase: &'static str,
            ) -> Result<Self, S::Error> {
                let passed = self.value().as_f64().is_some_and(test);
                self.verify(passed, description, ViolationKind::Generic, |name| {
                    format!("{name} {phrase}")
                })
            }
        }
    };
}

float_checks! {
    is_nan, is_nan_with, "should be NaN", |x| x.is_nan();
    is_not_nan, is_not_nan_with, "should not be NaN", |x| !x.is_nan();
    is_infinity, is_infinity_with, "should be infinity", |x| x.is_infinite();
    is_not_infinity, is_not_infinity_with, "should not be infinity", |x| !x.is_infinite();
    is_positive_infinity, is_positive_infinity_with, "should be positive infinity",
        |x| x == f64::INFINITY;
    is_not_positive_infinity, is_not_positive_infinity_with, "should not be positive infinity",
        |x| x != f64::INFINITY;
    is_negative_infinity, is_negative_infinity_with, "should be negative infinity",
        |x| x == f64::NEG_INFINITY;
    is_not_negative_infinity, is_not_negative_infinity_with, "should not be negative infinity",
        |x| x != f64::NEG_INFINITY;
}
