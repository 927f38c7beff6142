//! Postcondition chains report a single error type regardless of kind

use stipulate::prelude::*;
use stipulate::{assert_passes, assert_violation};

fn checked_average(values: &[f64]) -> Result<f64, Box<dyn std::error::Error>> {
    let values = requires_named(values, "values").is_not_empty()?.into_inner();
    let sum: f64 = values.iter().sum();
    let average = ensures_named(sum / values.len() as f64, "average")
        .is_not_nan()?
        .is_not_infinity()?
        .into_inner();
    Ok(average)
}

#[test]
fn test_routine_with_both_conditions() {
    assert_eq!(checked_average(&[1.0, 2.0, 3.0]).unwrap(), 2.0);

    let err = checked_average(&[]).unwrap_err();
    assert!(err.downcast_ref::<ArgumentError>().is_some());

    let err = checked_average(&[f64::INFINITY, f64::NEG_INFINITY]).unwrap_err();
    let err = err.downcast_ref::<PostconditionError>().unwrap();
    assert_eq!(err.message(), "average should not be NaN.");
}

#[test]
fn test_null_is_postcondition_failure() {
    assert_violation!(
        ensures(None::<Vec<u8>>).is_not_null(),
        PostconditionError::new("value should not be null.")
    );
}

#[test]
fn test_every_kind_maps_to_the_same_error() {
    let range = ensures(10).is_less_than(5).unwrap_err();
    let generic = ensures(10).evaluate(false).unwrap_err();
    let enumeration = ensures(std::cmp::Ordering::Less)
        .is_equal_to(std::cmp::Ordering::Greater)
        .unwrap_err();

    assert_eq!(range.message(), "value should be less than 5.");
    assert_eq!(generic.message(), "value should be valid.");
    assert_eq!(enumeration.message(), "value should be equal to Greater.");
}

#[test]
fn test_elaboration_is_appended() {
    let err = ensures_named(0_usize, "written")
        .fail_with_message(
            "written should be positive",
            "The sink accepted no bytes.",
            ViolationKind::OutOfRange,
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "written should be positive. The sink accepted no bytes."
    );
}

#[test]
fn test_equality_is_repeatable() {
    for _ in 0..3 {
        assert_passes!(ensures("ok").is_equal_to("ok"));
        assert_violation!(ensures("ok").is_equal_to("no"));
    }
}

#[test]
fn test_suppressed_postcondition() {
    let v = assert_passes!(ensures(None::<i32>).suppress().is_not_null());
    assert_eq!(v.into_inner(), None);
}
