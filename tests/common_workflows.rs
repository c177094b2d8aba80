//! Integration tests for common Argus workflows.
//!
//! These tests exercise guards end to end through the facade crate.

use argus::prelude::*;
use argus_testing::*;
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Positional Arguments
// =============================================================================

#[test]
fn test_positional_rule_blocks_the_call() {
    let spy = CallSpy::new();
    let f = guard![(1, Rule::new().length(2))]
        .unwrap()
        .wrap(spy.returning("ok"));

    assert_accepted(&f.invoke(args![0, json!(["A", "B"])]));
    assert_rejected_on(
        &f.invoke(args![0, json!(["A", "B", "C"])]),
        FailureKind::Length,
        "arg at index 1",
    );
    assert_eq!(spy.call_count(), 1);
    assert_eq!(spy.last_call(), Some(args![0, json!(["A", "B"])]));
}

#[test]
fn test_length_sets() {
    let f = guard![(0, Rule::new().lengths([1, 3]))]
        .unwrap()
        .wrap(|_: Arguments| ());

    assert_accepted(&f.invoke(args!["a"]));
    assert_accepted(&f.invoke(args!["abc"]));
    assert_rejected(&f.invoke(args!["ab"]), FailureKind::Length);
    assert_rejected(&f.invoke(args![12]), FailureKind::NoLength);
}

// =============================================================================
// Keyword Arguments
// =============================================================================

#[test]
fn test_keyword_types_and_choices() {
    let spy = CallSpy::new();
    let f = guard![
        ("pid", Rule::new().types([ValueType::Integer])),
        ("mode", Rule::new().choices(["r", "w"])),
    ]
    .unwrap()
    .wrap(spy.returning(()));

    assert_accepted(&f.invoke(args![; pid = 1, mode = "r", two = 2]));
    assert_rejected(&f.invoke(args![; pid = 1.1, mode = "r"]), FailureKind::Types);
    assert_rejected(&f.invoke(args![; pid = 1, mode = "x"]), FailureKind::Choices);
    assert_rejected_with(
        &f.invoke(args![; mode = "r"]),
        FailureKind::Missing,
        "Specified kwarg 'pid' was not supplied.",
    );
    assert_eq!(spy.call_count(), 1);
}

#[test]
fn test_grouped_pattern() {
    let f = guard![(("first", "second"), Rule::new().pattern("[a-z]+").unwrap())]
        .unwrap()
        .wrap(|_: Arguments| ());

    assert_rejected_on(
        &f.invoke(args![; first = "first", second = "SECOND"]),
        FailureKind::Regex,
        "kwarg 'second'",
    );
    assert_accepted(&f.invoke(args![; first = "first", second = "second"]));
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn test_custom_messages() {
    let rule = Rule::new()
        .types([ValueType::String])
        .length(2)
        .message_for(FailureKind::Types, "bad type!");
    let f = guard![(0, rule)].unwrap().wrap(|_: Arguments| ());

    assert_rejected_with(&f.invoke(args![5]), FailureKind::Types, "bad type!");
    let err = f.invoke(args!["abc"]).unwrap_err();
    assert!(err.is(FailureKind::Length));
    assert_ne!(err.to_string(), "bad type!");

    let uniform = guard![(0, Rule::new().choices([1, 2]).message("pick 1 or 2"))].unwrap();
    assert_rejected_with(&uniform.check(&args![3]), FailureKind::Choices, "pick 1 or 2");

    let table: HashMap<FailureKind, String> =
        HashMap::from([(FailureKind::Length, "two chars".to_string())]);
    let per_kind = guard![(0, Rule::new().length(2).messages(table))].unwrap();
    assert_rejected_with(&per_kind.check(&args!["abc"]), FailureKind::Length, "two chars");
}

// =============================================================================
// Wildcards and Tables
// =============================================================================

#[test]
fn test_wildcards_with_explicit_overrides() {
    let f = guard![
        (0, Rule::new().types([ValueType::String])),
        (ARGS, Rule::new().types([ValueType::Number])),
        (KWARGS, Rule::new().types([ValueType::Bool])),
    ]
    .unwrap()
    .wrap(|args: Arguments| args.positional_len() + args.keyword_len());

    assert_eq!(f.invoke(args!["name", 1, 2.5; verbose = true]).unwrap(), 4);
    assert_rejected_on(
        &f.invoke(args!["name", 1, "2"]),
        FailureKind::Types,
        "arg at index 2",
    );
    assert_rejected_on(
        &f.invoke(args!["name"; verbose = "yes"]),
        FailureKind::Types,
        "kwarg 'verbose'",
    );
}

#[test]
fn test_bind_shares_validators() {
    let positive: Arc<dyn Validator> = Arc::new(
        Rule::new()
            .types([ValueType::Number])
            .predicate("positive", |v| v.as_f64().is_some_and(|n| n > 0.0)),
    );
    let guard = bind([
        (vec![Selector::Index(0), Selector::Index(-1)], Arc::clone(&positive)),
        (vec![Selector::from("limit")], positive),
    ])
    .unwrap();

    assert_accepted(&guard.check(&args![1, 0, 2; limit = 5]));
    assert_rejected_on(&guard.check(&args![1, 0, -2; limit = 5]), FailureKind::Func, "arg at index 2");
    // With a single argument both selectors resolve to index 0
    assert_rejected(&guard.check(&args![1; limit = 5]), FailureKind::DuplicateSelector);
}

#[test]
fn test_invalid_tables_fail_at_build() {
    assert_rejected(
        &guard![(ARGS, Rule::new()), ((0, ARGS), Rule::new())],
        FailureKind::DuplicateWildcard,
    );
    assert_rejected(
        &guard![(2, Rule::new()), ((1, 2), Rule::new())],
        FailureKind::DuplicateSelector,
    );
    assert!(matches!(Rule::new().pattern("(unclosed"), Err(Error::Pattern(_))));
}

// =============================================================================
// Async Callables
// =============================================================================

#[tokio::test]
async fn test_async_handler() {
    let spy = CallSpy::new();
    let recorder = spy.clone();
    let handler = guard![("user", Rule::new().types([ValueType::String]).length(3))]
        .unwrap()
        .wrap(move |args: Arguments| {
            recorder.record(&args);
            async move {
                tokio::task::yield_now().await;
                args.keyword("user").cloned()
            }
        });

    assert_eq!(handler.invoke(args![; user = "bob"]).unwrap().await, Some(json!("bob")));
    assert_rejected_on(&handler.invoke(args![; user = "alice"]).map(|_| ()), FailureKind::Length, "kwarg 'user'");
    assert_eq!(spy.call_count(), 1);
}
