use argus_core::*;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[test]
fn test_positional_length() {
    let f = guard![(1, Rule::new().length(2))]
        .unwrap()
        .wrap(|args: Arguments| args.get(1).cloned());

    assert_eq!(
        f.invoke(args![0, json!(["A", "B"])]).unwrap(),
        Some(json!(["A", "B"]))
    );

    let err = f.invoke(args![0, json!(["A", "B", "C"])]).unwrap_err();
    assert_eq!(err.kind(), Some(FailureKind::Length));
    assert_eq!(err.as_invalid().unwrap().field, "arg at index 1");
}

#[test]
fn test_keyword_type() {
    let f = guard![("pid", Rule::new().types([ValueType::Integer]))]
        .unwrap()
        .wrap(|args: Arguments| args.keyword_len());

    assert_eq!(f.invoke(args![; pid = 1, two = 2]).unwrap(), 2);

    let err = f.invoke(args![; pid = 1.1]).unwrap_err();
    assert_eq!(err.kind(), Some(FailureKind::Types));
    assert_eq!(err.as_invalid().unwrap().field, "kwarg 'pid'");
}

#[test]
fn test_grouped_keywords_share_pattern() {
    let f = guard![(("first", "second"), Rule::new().pattern("[a-z]+").unwrap())]
        .unwrap()
        .wrap(|_: Arguments| ());

    let err = f.invoke(args![; first = "first", second = "SECOND"]).unwrap_err();
    assert_eq!(err.kind(), Some(FailureKind::Regex));
    assert_eq!(err.as_invalid().unwrap().field, "kwarg 'second'");

    assert!(f.invoke(args![; first = "first", second = "second"]).is_ok());
}

#[test]
fn test_custom_message_and_default_fallback() {
    let rule = Rule::new()
        .types([ValueType::String])
        .length(3)
        .message_for(FailureKind::Types, "bad type!");
    let f = guard![("code", rule)].unwrap().wrap(|_: Arguments| ());

    let err = f.invoke(args![; code = 7]).unwrap_err();
    assert_eq!(err.to_string(), "bad type!");

    let err = f.invoke(args![; code = "toolong"]).unwrap_err();
    assert!(err.is(FailureKind::Length));
    assert_ne!(err.to_string(), "bad type!");
    assert!(err.to_string().contains("kwarg 'code'"));
}

#[test]
fn test_negative_index_re_resolves_per_call() {
    let last = guard![(-1, Rule::new().types([ValueType::Bool]))].unwrap();

    for arity in 1..6 {
        let mut call = Arguments::new();
        for _ in 1..arity {
            call.push_arg(0);
        }
        call.push_arg(true);
        assert!(last.check(&call).is_ok(), "arity {arity}");

        call.push_arg(0);
        let err = last.check(&call).unwrap_err();
        assert_eq!(
            err.as_invalid().unwrap().field,
            format!("arg at index {}", arity)
        );
    }
}

#[test]
fn test_duplicate_index_detected_before_call() {
    let ran = Arc::new(Mutex::new(false));
    let err = ArgGuard::builder()
        .rule(2, Rule::new())
        .rule((0, 2), Rule::new())
        .build()
        .unwrap_err();
    assert!(err.is(FailureKind::DuplicateSelector));

    // Aliases through a negative index are caught on the call itself
    let flag = Arc::clone(&ran);
    let f = guard![(2, Rule::new()), ((0, -1), Rule::new())]
        .unwrap()
        .wrap(move |_: Arguments| *flag.lock().unwrap() = true);
    let err = f.invoke(args![0, 1, 2]).unwrap_err();
    assert!(err.is(FailureKind::DuplicateSelector));
    assert!(!*ran.lock().unwrap());
}

#[test]
fn test_wildcard_covers_remaining_in_ascending_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&order);
    let recorder = from_fn("recorder", move |_: &Value, field: &str| {
        seen.lock().unwrap().push(field.to_string());
        Ok(())
    });

    let specific = Rule::new().choices([json!("head")]);
    let guard = ArgGuard::builder()
        .rule(ARGS, recorder)
        .rule(0, specific)
        .build()
        .unwrap();

    guard.check(&args!["head", "x", "y"]).unwrap();
    assert_eq!(
        *order.lock().unwrap(),
        vec!["arg at index 1".to_string(), "arg at index 2".to_string()]
    );

    assert!(guard.check(&args!["tail", "x"]).unwrap_err().is(FailureKind::Choices));
}

#[test]
fn test_keyword_wildcard_follows_supplied_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&order);
    let guard = ArgGuard::builder()
        .rule(KWARGS, from_fn("recorder", move |_: &Value, field: &str| {
            seen.lock().unwrap().push(field.to_string());
            Ok(())
        }))
        .rule("b", Rule::new())
        .build()
        .unwrap();

    guard.check(&args![; c = 1, b = 2, a = 3]).unwrap();
    assert_eq!(*order.lock().unwrap(), vec!["kwarg 'c'", "kwarg 'a'"]);
}

#[test]
fn test_first_failure_wins() {
    let guard = guard![
        ("pid", Rule::new().types([ValueType::Integer])),
        (0, Rule::new().length(1)),
    ]
    .unwrap();
    let err = guard.check(&args!["too long"]).unwrap_err();
    assert!(err.is(FailureKind::Missing));
}

#[test]
fn test_predicate_errors_propagate_unclassified() {
    #[derive(Debug)]
    struct Offline;
    impl std::fmt::Display for Offline {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("registry offline")
        }
    }
    impl std::error::Error for Offline {}

    let guard = guard![(
        0,
        Rule::new().try_predicate("registered", |_| Err(Box::new(Offline)))
    )]
    .unwrap();

    let err = guard.check(&args![1]).unwrap_err();
    assert_eq!(err.kind(), None);
    assert!(matches!(err, Error::Predicate(_)));
    assert_eq!(err.to_string(), "registry offline");
}

#[test]
fn test_concurrent_calls_do_not_share_state() {
    let f = guard![
        (-1, Rule::new().types([ValueType::Integer])),
        (ARGS, Rule::new().types([ValueType::String])),
    ]
    .unwrap()
    .wrap(|args: Arguments| args.positional_len());

    std::thread::scope(|scope| {
        for worker in 0..8_usize {
            let f = &f;
            scope.spawn(move || {
                for round in 0..100_usize {
                    let arity = (worker + round) % 5 + 1;
                    let mut call = Arguments::new();
                    for _ in 1..arity {
                        call.push_arg("s");
                    }
                    call.push_arg(round);
                    assert_eq!(f.invoke(call).unwrap(), arity);
                }
            });
        }
    });
}

#[tokio::test]
async fn test_async_callable() {
    let fetch = guard![("id", Rule::new().types([ValueType::Integer]))]
        .unwrap()
        .wrap(|args: Arguments| async move {
            tokio::task::yield_now().await;
            args.keyword("id").and_then(Value::as_i64)
        });

    assert_eq!(fetch.invoke(args![; id = 9]).unwrap().await, Some(9));
    assert!(fetch.invoke(args![; id = "9"]).is_err());
}
