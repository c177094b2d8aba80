// Call recording for guarded callables

use argus_core::Arguments;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Records the arguments of every call that reaches a wrapped function.
///
/// Clones share the same log, so a spy can be moved into a callable and
/// inspected from the test afterwards.
#[derive(Debug, Clone, Default)]
pub struct CallSpy {
    calls: Arc<Mutex<Vec<Arguments>>>,
}

impl CallSpy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call
    pub fn record(&self, args: &Arguments) {
        self.log().push(args.clone());
    }

    /// Get the number of calls
    pub fn call_count(&self) -> usize {
        self.log().len()
    }

    /// Get all recorded calls, oldest first
    pub fn calls(&self) -> Vec<Arguments> {
        self.log().clone()
    }

    pub fn last_call(&self) -> Option<Arguments> {
        self.log().last().cloned()
    }

    pub fn was_called(&self) -> bool {
        !self.log().is_empty()
    }

    /// Check if a call with exactly these arguments was recorded
    pub fn was_called_with(&self, args: &Arguments) -> bool {
        self.log().contains(args)
    }

    pub fn clear(&self) {
        self.log().clear();
    }

    /// A callable that records its arguments and returns `result`.
    ///
    /// ```
    /// use argus_core::{Rule, args, guard};
    /// use argus_testing::CallSpy;
    ///
    /// let spy = CallSpy::new();
    /// let guarded = guard![(0, Rule::new().length(1))]
    ///     .unwrap()
    ///     .wrap(spy.returning(()));
    ///
    /// let _ = guarded.invoke(args!["a"]);
    /// let _ = guarded.invoke(args!["ab"]);
    /// assert_eq!(spy.call_count(), 1);
    /// ```
    pub fn returning<R>(&self, result: R) -> impl Fn(Arguments) -> R + Send + Sync + 'static
    where
        R: Clone + Send + Sync + 'static,
    {
        self.wrap(move |_| result.clone())
    }

    /// Record every call before forwarding it to `func`.
    pub fn wrap<F, R>(&self, func: F) -> impl Fn(Arguments) -> R + Send + Sync + 'static
    where
        F: Fn(Arguments) -> R + Send + Sync + 'static,
        R: 'static,
    {
        let spy = self.clone();
        move |args: Arguments| {
            spy.record(&args);
            func(args)
        }
    }

    fn log(&self) -> MutexGuard<'_, Vec<Arguments>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
