// Custom error messages

use crate::FailureKind;
use std::collections::HashMap;

/// Messages reported when a rule rejects a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorMessages {
    /// Synthesize a message naming the target and the constraint
    #[default]
    Default,
    /// One message for every failure kind
    Uniform(String),
    /// Per-kind messages; kinds without an entry use the synthesized message
    PerKind(HashMap<FailureKind, String>),
}

impl ErrorMessages {
    /// The configured message for `kind`, if any.
    pub fn resolve(&self, kind: FailureKind) -> Option<&str> {
        match self {
            ErrorMessages::Default => None,
            ErrorMessages::Uniform(message) => Some(message.as_str()),
            ErrorMessages::PerKind(messages) => messages.get(&kind).map(String::as_str),
        }
    }

    /// Add or replace the message for `kind`.
    ///
    /// A uniform message is discarded: the result only carries per-kind
    /// entries.
    pub fn set(self, kind: FailureKind, message: impl Into<String>) -> Self {
        let mut messages = match self {
            ErrorMessages::PerKind(messages) => messages,
            ErrorMessages::Default | ErrorMessages::Uniform(_) => HashMap::new(),
        };
        messages.insert(kind, message.into());
        ErrorMessages::PerKind(messages)
    }
}

impl From<&str> for ErrorMessages {
    fn from(message: &str) -> Self {
        ErrorMessages::Uniform(message.to_string())
    }
}

impl From<String> for ErrorMessages {
    fn from(message: String) -> Self {
        ErrorMessages::Uniform(message)
    }
}

impl From<HashMap<FailureKind, String>> for ErrorMessages {
    fn from(messages: HashMap<FailureKind, String>) -> Self {
        ErrorMessages::PerKind(messages)
    }
}

impl<S: Into<String>> FromIterator<(FailureKind, S)> for ErrorMessages {
    fn from_iter<I: IntoIterator<Item = (FailureKind, S)>>(iter: I) -> Self {
        ErrorMessages::PerKind(iter.into_iter().map(|(k, m)| (k, m.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_messages() {
        assert_eq!(ErrorMessages::default().resolve(FailureKind::Types), None);
    }

    #[test]
    fn test_uniform_applies_to_every_kind() {
        let messages = ErrorMessages::from("invalid");
        assert_eq!(messages.resolve(FailureKind::Types), Some("invalid"));
        assert_eq!(messages.resolve(FailureKind::Func), Some("invalid"));
    }

    #[test]
    fn test_per_kind_lookup_misses_fall_through() {
        let messages: ErrorMessages = [(FailureKind::Types, "bad type!")].into_iter().collect();
        assert_eq!(messages.resolve(FailureKind::Types), Some("bad type!"));
        assert_eq!(messages.resolve(FailureKind::Length), None);
    }

    #[test]
    fn test_set_replaces_uniform() {
        let messages = ErrorMessages::from("all").set(FailureKind::Regex, "pattern");
        assert_eq!(messages.resolve(FailureKind::Regex), Some("pattern"));
        assert_eq!(messages.resolve(FailureKind::Types), None);
    }
}
