//! Testing utilities for Argus guards.
//!
//! - **CallSpy** - Records which calls reached a guarded function
//! - **Assertions** - Checks for accepted and rejected calls
//!
//! ## Quick Start
//!
//! ```
//! use argus_core::{FailureKind, Rule, ValueType, args, guard};
//! use argus_testing::*;
//!
//! let spy = CallSpy::new();
//! let guarded = guard![(0, Rule::new().types([ValueType::Integer]))]
//!     .unwrap()
//!     .wrap(spy.returning("done"));
//!
//! assert_accepted(&guarded.invoke(args![1]));
//! assert_rejected(&guarded.invoke(args![1.5]), FailureKind::Types);
//! assert_eq!(spy.calls(), vec![args![1]]);
//! ```

mod assertions;
mod spy;

pub use assertions::{assert_accepted, assert_rejected, assert_rejected_on, assert_rejected_with};
pub use spy::CallSpy;
