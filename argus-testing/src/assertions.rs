// Assertions for guard outcomes

use argus_core::{FailureKind, Result};
use std::fmt::Debug;

/// Assert that a guarded call was rejected with a specific kind
pub fn assert_rejected<T: Debug>(result: &Result<T>, expected: FailureKind) {
    match result {
        Ok(value) => panic!("Expected rejection '{}', got Ok({:?})", expected, value),
        Err(err) => assert_eq!(
            err.kind(),
            Some(expected),
            "Expected rejection '{}', got: {}",
            expected,
            err
        ),
    }
}

/// Assert that a guarded call was rejected with a specific kind and message
pub fn assert_rejected_with<T: Debug>(result: &Result<T>, expected: FailureKind, message: &str) {
    assert_rejected(result, expected);
    if let Err(err) = result {
        assert_eq!(err.to_string(), message, "Rejection message does not match");
    }
}

/// Assert that a guarded call was rejected on a specific argument
pub fn assert_rejected_on<T: Debug>(result: &Result<T>, expected: FailureKind, field: &str) {
    assert_rejected(result, expected);
    let actual = result
        .as_ref()
        .err()
        .and_then(|err| err.as_invalid())
        .map(|invalid| invalid.field.as_str());
    assert_eq!(actual, Some(field), "Rejected argument does not match");
}

/// Assert that a guarded call passed validation
pub fn assert_accepted<T>(result: &Result<T>) {
    if let Err(err) = result {
        panic!("Expected call to be accepted, got: {}", err);
    }
}
