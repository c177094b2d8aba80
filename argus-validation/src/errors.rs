// Validation errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error raised by a predicate itself, passed through unchanged.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a rejected argument or guard definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Value type not among the accepted types
    Types,
    /// Value not a member of the allowed choices
    Choices,
    /// Value length not an accepted length
    Length,
    /// Length constraint configured but the value has no length
    NoLength,
    /// Value did not match the pattern
    Regex,
    /// A predicate returned `false`
    Func,
    /// A named keyword argument was not supplied
    Missing,
    /// The same argument was claimed by two selectors
    DuplicateSelector,
    /// A wildcard marker was supplied more than once
    DuplicateWildcard,
    /// A positional index outside the supplied arguments
    IndexOutOfRange,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Types => "types",
            FailureKind::Choices => "choices",
            FailureKind::Length => "length",
            FailureKind::NoLength => "no_length",
            FailureKind::Regex => "regex",
            FailureKind::Func => "func",
            FailureKind::Missing => "missing",
            FailureKind::DuplicateSelector => "duplicate_selector",
            FailureKind::DuplicateWildcard => "duplicate_wildcard",
            FailureKind::IndexOutOfRange => "index_out_of_range",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure for a single argument or selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Display label of the offending target, e.g. `kwarg 'pid'`
    pub field: String,

    /// Human readable message, custom or synthesized
    pub message: String,

    pub kind: FailureKind,

    /// Rendered value that failed validation (optional)
    pub value: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
            value: None,
        }
    }

    /// Set the offending value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "field": self.field,
            "message": self.message,
            "kind": self.kind,
            "value": self.value,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Error returned by rules and guards.
#[derive(Error, Debug)]
pub enum Error {
    /// An argument or selector was rejected.
    #[error("{0}")]
    Invalid(ValidationError),

    /// A predicate failed with its own error.
    #[error(transparent)]
    Predicate(PredicateError),

    /// A rule was configured with an invalid pattern.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Failure classification, `None` for errors that are not rejections.
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Error::Invalid(error) => Some(error.kind),
            Error::Predicate(_) | Error::Pattern(_) => None,
        }
    }

    pub fn as_invalid(&self) -> Option<&ValidationError> {
        match self {
            Error::Invalid(error) => Some(error),
            _ => None,
        }
    }

    /// Whether this is a rejection of the given kind.
    pub fn is(&self, kind: FailureKind) -> bool {
        self.kind() == Some(kind)
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::Invalid(error)
    }
}
