// Guarded callables

use crate::{ArgGuard, Arguments};
use argus_validation::Result;

/// A callable whose arguments are checked by an [`ArgGuard`] before every
/// invocation.
///
/// The callable only runs when the check passes; its return value is handed
/// back unchanged. Async callables work as-is: the check completes before
/// the future is created.
///
/// ```
/// use argus_core::{ArgGuard, Arguments, FailureKind, Rule, ValueType, args};
///
/// let guard = ArgGuard::builder()
///     .rule(0, Rule::new().types([ValueType::Integer]))
///     .build()
///     .unwrap();
/// let double = guard.wrap(|args: Arguments| args.get(0).and_then(|v| v.as_i64()).map(|n| n * 2));
///
/// assert_eq!(double.invoke(args![21]).unwrap(), Some(42));
/// assert!(double.invoke(args!["21"]).unwrap_err().is(FailureKind::Types));
/// ```
#[derive(Debug, Clone)]
pub struct Guarded<F> {
    guard: ArgGuard,
    func: F,
}

impl<F> Guarded<F> {
    pub(crate) fn new(guard: ArgGuard, func: F) -> Self {
        Self { guard, func }
    }

    /// Check the arguments, then call the wrapped function with them.
    pub fn invoke<R>(&self, args: Arguments) -> Result<R>
    where
        F: Fn(Arguments) -> R,
    {
        self.guard.check(&args)?;
        Ok((self.func)(args))
    }

    /// Like [`Guarded::invoke`] for callables that need `&mut self`.
    pub fn invoke_mut<R>(&mut self, args: Arguments) -> Result<R>
    where
        F: FnMut(Arguments) -> R,
    {
        self.guard.check(&args)?;
        Ok((self.func)(args))
    }

    /// The guard checking each call.
    pub fn guard(&self) -> &ArgGuard {
        &self.guard
    }

    /// The wrapped callable, unchecked.
    pub fn inner(&self) -> &F {
        &self.func
    }

    /// Unwrap the callable.
    pub fn into_inner(self) -> F {
        self.func
    }
}
