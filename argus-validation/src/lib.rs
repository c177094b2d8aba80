//! Value constraints for Argus
//!
//! A [`Rule`] bundles optional constraints (accepted types, allowed choices,
//! lengths, an anchored pattern and predicates) and checks a single
//! argument value against all of them. Rules know nothing about call sites;
//! `argus-core` binds them to positional and keyword arguments.
//!
//! # Examples
//!
//! ## Type and length constraints
//!
//! ```
//! use argus_validation::{FailureKind, Rule, ValueType};
//! use serde_json::json;
//!
//! let rule = Rule::new().types([ValueType::Array]).length(2);
//!
//! assert!(rule.validate(&json!(["A", "B"]), "arg at index 1").is_ok());
//!
//! let err = rule.validate(&json!(["A", "B", "C"]), "arg at index 1").unwrap_err();
//! assert_eq!(err.kind(), Some(FailureKind::Length));
//! ```
//!
//! ## Custom messages
//!
//! ```
//! use argus_validation::{FailureKind, Rule, ValueType};
//! use serde_json::json;
//!
//! let rule = Rule::new()
//!     .types([ValueType::Integer])
//!     .message_for(FailureKind::Types, "bad type!");
//!
//! let err = rule.validate(&json!(1.1), "kwarg 'pid'").unwrap_err();
//! assert_eq!(err.to_string(), "bad type!");
//! ```
//!
//! ## Predicates
//!
//! ```
//! use argus_validation::{FailureKind, Rule};
//! use serde_json::json;
//!
//! let rule = Rule::new()
//!     .predicate("positive", |v| v.as_f64().is_some_and(|n| n > 0.0))
//!     .try_predicate("known", |v| match v.as_i64() {
//!         Some(n) => Ok(n < 1000),
//!         None => Err("registry lookup needs an integer".into()),
//!     });
//!
//! assert!(rule.validate(&json!(5), "arg at index 0").is_ok());
//! assert!(rule.validate(&json!(5000), "arg at index 0").unwrap_err().is(FailureKind::Func));
//! assert_eq!(rule.validate(&json!(0.5), "arg at index 0").unwrap_err().kind(), None);
//! ```

mod errors;
mod messages;
mod rule;
mod traits;
mod value;

pub use errors::*;
pub use messages::*;
pub use rule::*;
pub use traits::*;
pub use value::*;
