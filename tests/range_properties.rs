//! Property-based tests for ordering and range checks

use proptest::prelude::*;
use stipulate::comparison::{in_range, natural, not_in_range};
use stipulate::{ensures, requires, ArgumentError, PostconditionError};

proptest! {
    #[test]
    fn prop_in_range_iff_within_closed_interval(v in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let inside = lo <= v && v <= hi;

        prop_assert_eq!(requires(v).is_in_range(lo, hi).is_ok(), inside);
        prop_assert_eq!(in_range(&v, &lo, &hi, natural), inside);
    }

    #[test]
    fn prop_not_in_range_is_exact_complement(v in any::<i32>(), lo in any::<i32>(), hi in any::<i32>()) {
        let inside = lo <= v && v <= hi;

        prop_assert_eq!(requires(v).is_not_in_range(lo, hi).is_ok(), !inside);
        prop_assert_eq!(not_in_range(&v, &lo, &hi, natural), !inside);
    }

    #[test]
    fn prop_boundaries_are_inside(lo in -1000_i32..1000, width in 0_i32..1000) {
        let hi = lo + width;
        prop_assert!(requires(lo).is_in_range(lo, hi).is_ok());
        prop_assert!(requires(hi).is_in_range(lo, hi).is_ok());
        prop_assert!(requires(lo).is_not_in_range(lo, hi).is_err());
        prop_assert!(requires(hi).is_not_in_range(lo, hi).is_err());
    }

    #[test]
    fn prop_range_failure_is_out_of_range(v in 101_u32..10_000) {
        let err = requires(v).is_in_range(0, 100).unwrap_err();
        prop_assert!(matches!(err, ArgumentError::OutOfRange { .. }), "unexpected error: {:?}", err);
    }

    #[test]
    fn prop_equality_is_repeatable(x in any::<i16>(), y in any::<i16>()) {
        let first = ensures(x).is_equal_to(y).map(|v| v.into_inner());
        let second = ensures(x).is_equal_to(y).map(|v| v.into_inner());
        prop_assert_eq!(first.clone(), second);
        prop_assert_eq!(first.is_ok(), x == y);
    }

    #[test]
    fn prop_equality_is_idempotent_within_a_chain(x in any::<i16>(), repeats in 1_usize..5) {
        let mut chain = ensures(x);
        for _ in 0..repeats {
            chain = chain.is_equal_to(x).unwrap();
        }
        prop_assert_eq!(chain.into_inner(), x);

        let once = requires(x).is_equal_to(x).map(|v| v.into_inner());
        let twice = requires(x)
            .is_equal_to(x)
            .and_then(|v| v.is_equal_to(x))
            .map(|v| v.into_inner());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_nullable_matches_plain_ordering(v in any::<i32>(), bound in any::<i32>()) {
        prop_assert_eq!(
            requires(Some(v)).is_greater_than(bound).is_ok(),
            requires(v).is_greater_than(bound).is_ok()
        );
        prop_assert_eq!(requires(Some(v)).is_equal_to(bound).is_ok(), v == bound);
    }

    #[test]
    fn prop_nan_never_in_range(lo in any::<f64>(), hi in any::<f64>()) {
        prop_assert!(requires(f64::NAN).is_in_range(lo, hi).is_err());
        prop_assert!(requires(f64::NAN).is_not_in_range(lo, hi).is_ok());
    }

    #[test]
    fn prop_null_fails_ordering_as_null(bound in any::<i32>()) {
        prop_assert!(requires(None::<i32>).is_greater_than(Some(bound)).unwrap_err().is_null());
        prop_assert_eq!(
            ensures(None::<i32>).is_less_than(Some(bound)).unwrap_err(),
            PostconditionError::new(format!("value should be less than {bound}."))
        );
    }
}
