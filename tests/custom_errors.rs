//! Chains reporting failures as the caller's own error type

use std::sync::Arc;

use stipulate::registry::{Constructor, ExceptionType, ExceptionTypeRegistry};
use stipulate::{message_exception, with_custom_exception, Conditions, StringChecks};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("validation failed: {0}")]
struct MyError(String);

impl From<String> for MyError {
    fn from(message: String) -> Self {
        MyError(message)
    }
}

message_exception!(MyError);

#[derive(Debug)]
struct Unbuildable {
    _code: u16,
}

impl ExceptionType for Unbuildable {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::Other("(code: u16)")]
    }
}

#[test]
fn test_null_string_raises_exactly_one_custom_error() {
    let checks = with_custom_exception::<MyError>().unwrap();
    let result = checks
        .requires_named(None::<String>, "name")
        .is_not_null()
        .and_then(|v| v.is_not_empty());

    assert_eq!(result.unwrap_err(), MyError("name should not be null.".to_string()));
}

#[test]
fn test_custom_error_keeps_its_own_display() {
    let checks = with_custom_exception::<MyError>().unwrap();
    let err = checks.ensures(5).is_in_range(10, 20).unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation failed: value should be between 10 and 20."
    );
}

#[test]
fn test_abstract_type_is_rejected() {
    let err = with_custom_exception::<Box<dyn std::error::Error + Send + Sync>>().unwrap_err();
    assert_eq!(err.param_name, "TException");
    assert_eq!(
        err.to_string(),
        "The type must be concrete and have a public constructor with a single string argument (Parameter 'TException')"
    );
}

#[test]
fn test_type_without_message_constructor_is_rejected_every_time() {
    let registry = Arc::new(ExceptionTypeRegistry::new());
    let conditions = Conditions::with_registry(Arc::clone(&registry));

    assert!(conditions.with_error::<Unbuildable>().is_err());
    assert!(conditions.with_error::<Unbuildable>().is_err());
    assert!(registry.is_empty());
}

#[test]
fn test_private_registries_do_not_share_cache() {
    let first = Conditions::with_registry(Arc::new(ExceptionTypeRegistry::new()));
    let second = Conditions::with_registry(Arc::new(ExceptionTypeRegistry::new()));

    let a = first.with_error::<MyError>().unwrap();
    let b = second.with_error::<MyError>().unwrap();
    assert!(!Arc::ptr_eq(a.strategy(), b.strategy()));

    let again = first.with_error::<MyError>().unwrap();
    assert!(Arc::ptr_eq(a.strategy(), again.strategy()));
}

#[test]
fn test_concurrent_chains_share_one_strategy() {
    let conditions = Conditions::with_registry(Arc::new(ExceptionTypeRegistry::new()));

    let errors: Vec<MyError> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let conditions = conditions.clone();
                scope.spawn(move || {
                    let checks = conditions.with_error::<MyError>().unwrap();
                    checks.requires_named(i, "worker").is_greater_than(10).unwrap_err()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(errors.len(), 4);
    assert_eq!(conditions.registry().len(), 1);
    assert_eq!(errors[0], MyError("worker should be greater than 10.".to_string()));
}
