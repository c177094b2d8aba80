//! Declarative argument guards
//!
//! An [`ArgGuard`] binds validators to the arguments of a callable by
//! position, by keyword name, by negative index or through the `ARGS` and
//! `KWARGS` wildcards, and checks every call before the callable runs.
//!
//! ```
//! use argus_core::{ARGS, Arguments, FailureKind, Rule, ValueType, args, guard};
//!
//! let lookup = guard![
//!     ("pid", Rule::new().types([ValueType::Integer])),
//!     (ARGS, Rule::new().types([ValueType::String]).pattern("[a-z]+").unwrap()),
//! ]
//! .unwrap()
//! .wrap(|args: Arguments| args.positional_len());
//!
//! assert_eq!(lookup.invoke(args!["ab", "cd"; pid = 1]).unwrap(), 2);
//!
//! let err = lookup.invoke(args!["ab", "CD"; pid = 1]).unwrap_err();
//! assert_eq!(err.kind(), Some(FailureKind::Regex));
//! assert_eq!(err.as_invalid().unwrap().field, "arg at index 1");
//! ```
//!
//! Rejections are logged through `argus-log` under the `argus::guard`
//! target.

mod arguments;
mod guard;
mod guarded;
mod resolve;
mod selector;

pub use arguments::Arguments;
pub use guard::{ArgGuard, ArgGuardBuilder, bind};
pub use guarded::Guarded;
pub use selector::{ARGS, IntoSelectors, KWARGS, Selector};

// Re-export the constraint layer so one import covers both halves
pub use argus_validation::{
    Error, ErrorMessages, FailureKind, FnValidator, LengthConstraint, Measure, Predicate,
    PredicateError, Result, Rule, ValidationError, Validator, ValueType, from_fn,
};
