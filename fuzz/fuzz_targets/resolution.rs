//! Fuzz target for call-time selector resolution.
//!
//! Builds guards from arbitrary selector tables and checks arbitrary calls
//! against them.

#![no_main]

use arbitrary::Arbitrary;
use argus_core::{ArgGuard, Arguments, FailureKind, Rule, Selector, ValueType};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

#[derive(Debug, Arbitrary)]
enum FuzzSelector {
    Index(i8),
    Name(u8),
    Args,
    Kwargs,
}

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct FuzzCall {
    table: Vec<(Vec<FuzzSelector>, u8)>,
    positional: Vec<FuzzValue>,
    keyword: Vec<(u8, FuzzValue)>,
}

fn selector(raw: &FuzzSelector) -> Selector {
    match raw {
        FuzzSelector::Index(index) => Selector::Index(*index as isize),
        FuzzSelector::Name(name) => Selector::Name(format!("k{}", name % 8)),
        FuzzSelector::Args => Selector::AllRemainingPositional,
        FuzzSelector::Kwargs => Selector::AllRemainingKeyword,
    }
}

fn value(raw: &FuzzValue) -> Value {
    match raw {
        FuzzValue::Null => Value::Null,
        FuzzValue::Bool(b) => Value::from(*b),
        FuzzValue::Int(n) => Value::from(*n),
        FuzzValue::Float(f) => Value::from(*f),
        FuzzValue::Text(s) => Value::from(s.as_str()),
        FuzzValue::List(items) => Value::from(items.clone()),
    }
}

fn rule(choice: u8) -> Rule {
    match choice % 5 {
        0 => Rule::new(),
        1 => Rule::new().types([ValueType::Integer, ValueType::Null]),
        2 => Rule::new().lengths([0, 1, 2]),
        3 => Rule::new().choices([Value::Null, Value::from(true)]),
        _ => Rule::new().predicate("truthy", |v| !v.is_null()),
    }
}

fuzz_target!(|data: FuzzCall| {
    let mut builder = ArgGuard::builder();
    for (selectors, choice) in data.table.iter().take(8) {
        let group: Vec<Selector> = selectors.iter().take(4).map(selector).collect();
        builder = builder.rule(group, rule(*choice));
    }
    let guard = match builder.build() {
        Ok(guard) => guard,
        Err(err) => {
            assert!(matches!(
                err.kind(),
                Some(FailureKind::DuplicateSelector | FailureKind::DuplicateWildcard)
            ));
            return;
        }
    };

    let mut call = Arguments::new();
    for raw in data.positional.iter().take(16) {
        call.push_arg(value(raw));
    }
    for (name, raw) in data.keyword.iter().take(16) {
        call.insert_kwarg(format!("k{}", name % 8), value(raw));
    }

    // Resolution keeps no state between calls
    let first = guard.check(&call).map_err(|err| err.to_string());
    let second = guard.check(&call).map_err(|err| err.to_string());
    assert_eq!(first, second);

    if first.is_ok() {
        for selector in guard.selectors() {
            if let Selector::Name(name) = selector {
                assert!(call.keyword(name).is_some());
            }
        }
    }
});
