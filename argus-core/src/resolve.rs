// Call-time selector resolution

use crate::selector::{keyword_label, positional_label};
use crate::{Arguments, Selector};
use argus_validation::{FailureKind, Result, ValidationError, Validator};
use serde_json::Value;
use std::collections::HashSet;

const TARGET: &str = "argus::guard";

/// Bookkeeping for one guarded call.
///
/// Created at the start of every check and dropped at its end, so
/// concurrent calls through the same guard never observe each other.
pub(crate) struct Resolution<'a> {
    args: &'a Arguments,
    visited_indices: HashSet<usize>,
    visited_names: HashSet<&'a str>,
    pending_positional: Option<&'a dyn Validator>,
    pending_keyword: Option<&'a dyn Validator>,
}

impl<'a> Resolution<'a> {
    pub(crate) fn new(args: &'a Arguments) -> Self {
        Self {
            args,
            visited_indices: HashSet::new(),
            visited_names: HashSet::new(),
            pending_positional: None,
            pending_keyword: None,
        }
    }

    /// Resolve one selector and validate the argument it names.
    ///
    /// Wildcards are only recorded here; they run in [`Resolution::finish`].
    pub(crate) fn apply(&mut self, selector: &'a Selector, validator: &'a dyn Validator) -> Result<()> {
        match selector {
            Selector::AllRemainingPositional => {
                if self.pending_positional.replace(validator).is_some() {
                    return Err(duplicate_wildcard(selector));
                }
                Ok(())
            }
            Selector::AllRemainingKeyword => {
                if self.pending_keyword.replace(validator).is_some() {
                    return Err(duplicate_wildcard(selector));
                }
                Ok(())
            }
            Selector::Name(name) => self.apply_keyword(name, validator),
            Selector::Index(index) => self.apply_positional(*index, validator),
        }
    }

    fn apply_keyword(&mut self, name: &'a str, validator: &'a dyn Validator) -> Result<()> {
        let label = keyword_label(name);
        if !self.visited_names.insert(name) {
            return Err(duplicate_selector(label));
        }
        let value = self.args.keyword(name).ok_or_else(|| {
            ValidationError::new(
                label.as_str(),
                FailureKind::Missing,
                format!("Specified {} was not supplied.", label),
            )
        })?;
        validate(validator, value, &label)
    }

    fn apply_positional(&mut self, index: isize, validator: &'a dyn Validator) -> Result<()> {
        let count = self.args.positional_len();
        let normalized = if index < 0 {
            index.checked_add_unsigned(count)
        } else {
            Some(index)
        };
        let resolved = normalized
            .and_then(|i| usize::try_from(i).ok())
            .filter(|i| *i < count);

        let Some(resolved) = resolved else {
            let label = positional_label(index);
            return Err(ValidationError::new(
                label.as_str(),
                FailureKind::IndexOutOfRange,
                format!(
                    "Specified {} is out of range for {} positional argument(s).",
                    label, count
                ),
            )
            .into());
        };

        let label = positional_label(resolved);
        if !self.visited_indices.insert(resolved) {
            return Err(duplicate_selector(label));
        }
        validate(validator, &self.args.positional()[resolved], &label)
    }

    /// Run the pending wildcards over every argument not claimed explicitly.
    pub(crate) fn finish(self) -> Result<()> {
        if let Some(validator) = self.pending_positional {
            for (index, value) in self.args.positional().iter().enumerate() {
                if !self.visited_indices.contains(&index) {
                    validate(validator, value, &positional_label(index))?;
                }
            }
        }
        if let Some(validator) = self.pending_keyword {
            for (name, value) in self.args.keywords() {
                if !self.visited_names.contains(name) {
                    validate(validator, value, &keyword_label(name))?;
                }
            }
        }
        Ok(())
    }
}

fn validate(validator: &dyn Validator, value: &Value, label: &str) -> Result<()> {
    argus_log::trace!(
        target: TARGET,
        { field = label, validator = validator.name() },
        "validating argument"
    );
    validator.validate(value, label)
}

pub(crate) fn duplicate_selector(label: String) -> argus_validation::Error {
    let message = format!("Specified {} was already handled by another rule.", label);
    ValidationError::new(label, FailureKind::DuplicateSelector, message).into()
}

pub(crate) fn duplicate_wildcard(selector: &Selector) -> argus_validation::Error {
    let label = selector.label();
    let message = format!("`{}` specified multiple times.", label);
    ValidationError::new(label, FailureKind::DuplicateWildcard, message).into()
}
