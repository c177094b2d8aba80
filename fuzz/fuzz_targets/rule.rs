//! Fuzz target for rule construction and validation.
//!
//! Compiles arbitrary patterns and validates arbitrary strings against them.

#![no_main]

use arbitrary::Arbitrary;
use argus_core::{Error, FailureKind, Rule};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

#[derive(Debug, Arbitrary)]
struct FuzzRule {
    pattern: String,
    length: Option<u8>,
    inputs: Vec<String>,
}

fuzz_target!(|data: FuzzRule| {
    let mut rule = match Rule::new().pattern(&data.pattern) {
        Ok(rule) => rule,
        Err(err) => {
            assert!(matches!(err, Error::Pattern(_)));
            return;
        }
    };
    if let Some(length) = data.length {
        rule = rule.length(length as usize);
    }

    for input in data.inputs.iter().take(8) {
        let value = Value::from(input.as_str());
        if let Err(err) = rule.validate(&value, "arg at index 0") {
            assert!(matches!(
                err.kind(),
                Some(FailureKind::Regex | FailureKind::Length)
            ));
        }
    }

    // Non-string values never satisfy a pattern
    let err = rule.validate(&Value::from(1), "arg at index 0");
    assert!(err.is_err());
});
