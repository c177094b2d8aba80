// Composite constraint rule

use crate::{
    Error, ErrorMessages, FailureKind, Measure, PredicateError, Result, ValidationError, ValueType,
};
use crate::value::same_value;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Accepted length(s) of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    Exact(usize),
    OneOf(BTreeSet<usize>),
}

impl LengthConstraint {
    pub fn accepts(&self, length: usize) -> bool {
        match self {
            LengthConstraint::Exact(expected) => length == *expected,
            LengthConstraint::OneOf(allowed) => allowed.contains(&length),
        }
    }
}

impl fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthConstraint::Exact(expected) => write!(f, "{}", expected),
            LengthConstraint::OneOf(allowed) => {
                let allowed: Vec<String> = allowed.iter().map(usize::to_string).collect();
                write!(f, "one of [{}]", allowed.join(", "))
            }
        }
    }
}

type PredicateFn =
    Arc<dyn Fn(&Value) -> std::result::Result<bool, PredicateError> + Send + Sync>;

/// A named check over a value.
///
/// Returning `Ok(false)` rejects the value; returning `Err` aborts
/// validation with the predicate's own error.
#[derive(Clone)]
pub struct Predicate {
    name: String,
    test: PredicateFn,
}

impl Predicate {
    pub fn new<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            test: Arc::new(move |value| Ok(test(value))),
        }
    }

    pub fn fallible<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> std::result::Result<bool, PredicateError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            test: Arc::new(test),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, value: &Value) -> std::result::Result<bool, PredicateError> {
        (self.test)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Match starting at the first character; the leftmost match starts at
    /// 0 whenever any match does.
    fn matches_start(&self, text: &str) -> bool {
        self.regex.find(text).is_some_and(|m| m.start() == 0)
    }

    fn source(&self) -> &str {
        self.regex.as_str()
    }
}

/// A set of constraints checked against a single value.
///
/// Checks run in a fixed order and stop at the first failure: type,
/// membership, length, pattern, then predicates in insertion order.
/// A rule is immutable once built and can be shared between any number of
/// selectors, guards and threads.
///
/// ```
/// use argus_validation::{FailureKind, Rule, ValueType};
/// use serde_json::json;
///
/// let rule = Rule::new()
///     .types([ValueType::String])
///     .lengths([2, 3])
///     .pattern("[A-Z]+")?;
///
/// assert!(rule.validate(&json!("AB"), "arg at index 0").is_ok());
///
/// let err = rule.validate(&json!("ABCD"), "arg at index 0").unwrap_err();
/// assert!(err.is(FailureKind::Length));
/// # Ok::<(), argus_validation::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rule {
    types: Option<Vec<ValueType>>,
    choices: Option<Vec<Value>>,
    length: Option<LengthConstraint>,
    pattern: Option<Pattern>,
    predicates: Vec<Predicate>,
    messages: ErrorMessages,
}

impl Rule {
    /// A rule without constraints; accepts every value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept values whose type matches any of `types`.
    pub fn types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = ValueType>,
    {
        self.types = Some(types.into_iter().collect());
        self
    }

    /// Accept only values equal to one of `choices`.
    pub fn choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Require exactly `length` characters, elements or entries.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(LengthConstraint::Exact(length));
        self
    }

    /// Require one of several lengths.
    pub fn lengths<I>(mut self, lengths: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.length = Some(LengthConstraint::OneOf(lengths.into_iter().collect()));
        self
    }

    /// Require string values matching `pattern` from their first character.
    pub fn pattern(mut self, pattern: &str) -> Result<Self> {
        self.pattern = Some(Pattern {
            regex: Regex::new(pattern)?,
        });
        Ok(self)
    }

    /// Append an infallible predicate.
    pub fn predicate<F>(mut self, name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Predicate::new(name, test));
        self
    }

    /// Append a predicate that may fail with its own error.
    pub fn try_predicate<F>(mut self, name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> std::result::Result<bool, PredicateError> + Send + Sync + 'static,
    {
        self.predicates.push(Predicate::fallible(name, test));
        self
    }

    /// Use `message` for every kind of failure.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages = ErrorMessages::Uniform(message.into());
        self
    }

    /// Use `message` for failures of `kind`.
    pub fn message_for(mut self, kind: FailureKind, message: impl Into<String>) -> Self {
        self.messages = self.messages.set(kind, message);
        self
    }

    /// Replace the message configuration.
    pub fn messages(mut self, messages: impl Into<ErrorMessages>) -> Self {
        self.messages = messages.into();
        self
    }

    /// Get the configured length constraint
    pub fn length_constraint(&self) -> Option<&LengthConstraint> {
        self.length.as_ref()
    }

    /// Get the pattern as written
    pub fn pattern_source(&self) -> Option<&str> {
        self.pattern.as_ref().map(Pattern::source)
    }

    /// Get the predicates in check order
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Validate `value`, labelling failures with `field`.
    pub fn validate(&self, value: &Value, field: &str) -> Result<()> {
        if let Some(types) = &self.types {
            if !types.iter().any(|t| t.matches(value)) {
                return Err(self.reject(FailureKind::Types, field, value, || {
                    let names: Vec<&str> = types.iter().map(ValueType::as_str).collect();
                    format!(
                        "Specified {} is not an instance of the type(s): {}.",
                        field,
                        names.join(", ")
                    )
                }));
            }
        }

        if let Some(choices) = &self.choices {
            if !choices.iter().any(|choice| same_value(choice, value)) {
                return Err(self.reject(FailureKind::Choices, field, value, || {
                    let rendered: Vec<String> = choices.iter().map(Value::to_string).collect();
                    format!(
                        "Specified {} is not a valid choice. Choices: [{}]",
                        field,
                        rendered.join(", ")
                    )
                }));
            }
        }

        if let Some(length) = &self.length {
            let Some(actual) = value.measure() else {
                return Err(self.reject(FailureKind::NoLength, field, value, || {
                    format!("Specified {} is required to have a length.", field)
                }));
            };
            if !length.accepts(actual) {
                return Err(self.reject(FailureKind::Length, field, value, || {
                    format!(
                        "Specified {} with length {} is required to have length of {}.",
                        field, actual, length
                    )
                }));
            }
        }

        if let Some(pattern) = &self.pattern {
            let matched = value.as_str().is_some_and(|s| pattern.matches_start(s));
            if !matched {
                return Err(self.reject(FailureKind::Regex, field, value, || {
                    format!(
                        "Specified {} did not match the following regex: {}",
                        field,
                        pattern.source()
                    )
                }));
            }
        }

        for predicate in &self.predicates {
            if !predicate.test(value).map_err(Error::Predicate)? {
                return Err(self.reject(FailureKind::Func, field, value, || {
                    format!(
                        "Specified {} did not meet requirements of function {}.",
                        field,
                        predicate.name()
                    )
                }));
            }
        }

        Ok(())
    }

    fn reject<F>(&self, kind: FailureKind, field: &str, value: &Value, default: F) -> Error
    where
        F: FnOnce() -> String,
    {
        let message = match self.messages.resolve(kind) {
            Some(message) => message.to_string(),
            None => default(),
        };
        ValidationError::new(field, kind, message)
            .with_value(value.to_string())
            .into()
    }
}
