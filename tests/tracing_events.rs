//! Log events emitted with the `tracing` feature

#![cfg(feature = "tracing")]

use std::sync::Arc;

use stipulate::registry::{Constructor, ExceptionType, ExceptionTypeRegistry};
use stipulate::{requires_named, Conditions};
use tracing_test::traced_test;

#[derive(Debug)]
struct Opaque;

impl ExceptionType for Opaque {
    fn constructors() -> Vec<Constructor<Self>> {
        Vec::new()
    }
}

#[traced_test]
#[test]
fn test_failed_check_is_logged() {
    let _ = requires_named(2, "replicas").is_greater_than(3);

    assert!(logs_contain("check failed: replicas should be greater than 3"));
    assert!(logs_contain("precondition"));
    assert!(logs_contain("OutOfRange"));
}

#[traced_test]
#[test]
fn test_passing_check_is_silent() {
    let _ = requires_named(5, "quiet_arg").is_greater_than(3);

    assert!(!logs_contain("quiet_arg"));
}

#[traced_test]
#[test]
fn test_suppressed_failure_is_logged() {
    let _ = requires_named(2, "muted").suppress().is_greater_than(3);

    assert!(logs_contain("suppressed failure: muted should be greater than 3"));
}

#[traced_test]
#[test]
fn test_registry_logs_cache_and_rejection() {
    let conditions = Conditions::with_registry(Arc::new(ExceptionTypeRegistry::new()));

    let _ = conditions.with_error::<String>();
    assert!(logs_contain("cached custom error strategy"));

    let _ = conditions.with_error::<Opaque>();
    assert!(logs_contain("rejected custom error type"));
}
