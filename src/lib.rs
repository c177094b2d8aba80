// Argus - Declarative argument guards for Rust
//
// This library binds composable value rules to the positional and keyword
// arguments of a callable and checks every call before the callable runs.

// Re-export core functionality
pub use argus_core::*;

// Re-export the supporting crates
pub use argus_log;
pub use argus_validation;

#[cfg(feature = "testing")]
pub use argus_testing;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ARGS,
        ArgGuard,
        Arguments,
        Error,
        ErrorMessages,
        FailureKind,
        Guarded,
        KWARGS,
        Rule,
        Selector,
        Validator,
        ValueType,
        args,
        bind,
        from_fn,
        guard,
    };
    pub use serde_json::{Value, json};
}
