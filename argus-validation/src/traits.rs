// Validation traits

use crate::{Result, Rule};
use serde_json::Value;
use std::fmt;

/// Validator bound to an argument by a guard.
///
/// [`Rule`] is the built-in implementation; applications can bind their own
/// validators when a composite rule does not fit.
pub trait Validator: Send + Sync {
    /// Validate a value; `field` is the display label of the argument.
    fn validate(&self, value: &Value, field: &str) -> Result<()>;

    /// Get validator name
    fn name(&self) -> &str {
        "custom"
    }
}

impl Validator for Rule {
    fn validate(&self, value: &Value, field: &str) -> Result<()> {
        Rule::validate(self, value, field)
    }

    fn name(&self) -> &str {
        "rule"
    }
}

/// Validator backed by a closure.
pub struct FnValidator<F>
where
    F: Fn(&Value, &str) -> Result<()> + Send + Sync,
{
    name: String,
    validate: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&Value, &str) -> Result<()> + Send + Sync,
{
    pub fn new(name: impl Into<String>, validate: F) -> Self {
        Self {
            name: name.into(),
            validate,
        }
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&Value, &str) -> Result<()> + Send + Sync,
{
    fn validate(&self, value: &Value, field: &str) -> Result<()> {
        (self.validate)(value, field)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnValidator<F>
where
    F: Fn(&Value, &str) -> Result<()> + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Wrap a closure as a [`Validator`].
pub fn from_fn<F>(name: impl Into<String>, validate: F) -> FnValidator<F>
where
    F: Fn(&Value, &str) -> Result<()> + Send + Sync,
{
    FnValidator::new(name, validate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FailureKind, ValidationError};
    use serde_json::json;

    #[test]
    fn test_rule_as_trait_object() {
        let validator: Box<dyn Validator> = Box::new(Rule::new().length(1));
        assert_eq!(validator.name(), "rule");
        assert!(validator.validate(&json!("a"), "arg at index 0").is_ok());
        assert!(validator.validate(&json!("ab"), "arg at index 0").is_err());
    }

    #[test]
    fn test_fn_validator() {
        let even = from_fn("even", |value: &Value, field: &str| {
            if value.as_i64().is_some_and(|n| n % 2 == 0) {
                Ok(())
            } else {
                Err(ValidationError::new(field, FailureKind::Func, "odd").into())
            }
        });
        assert_eq!(Validator::name(&even), "even");
        assert!(even.validate(&json!(2), "x").is_ok());
        assert!(even.validate(&json!(3), "x").unwrap_err().is(FailureKind::Func));
    }
}
