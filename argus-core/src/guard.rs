// Argument guards

use crate::guarded::Guarded;
use crate::resolve::{Resolution, duplicate_selector, duplicate_wildcard};
use crate::{Arguments, IntoSelectors, Selector};
use argus_validation::{Result, Validator};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

const TARGET: &str = "argus::guard";

#[derive(Clone)]
struct Binding {
    selector: Selector,
    validator: Arc<dyn Validator>,
}

/// A frozen table of selector/validator bindings.
///
/// The table is validated once when the guard is built and shared between
/// clones, so one guard can wrap any number of callables. Every
/// [`ArgGuard::check`] resolves the selectors against the arguments of that
/// call only.
///
/// ```
/// use argus_core::{ArgGuard, ARGS, Rule, ValueType, args};
///
/// let guard = ArgGuard::builder()
///     .rule(0, Rule::new().types([ValueType::Integer]))
///     .rule(("pid", ARGS), Rule::new().types([ValueType::Number]))
///     .build()
///     .unwrap();
///
/// assert!(guard.check(&args![1, 2.5; pid = 3]).is_ok());
/// assert!(guard.check(&args!["x"; pid = 3]).is_err());
/// ```
#[derive(Clone)]
pub struct ArgGuard {
    bindings: Arc<[Binding]>,
}

impl ArgGuard {
    /// Start an empty binding table.
    pub fn builder() -> ArgGuardBuilder {
        ArgGuardBuilder::default()
    }

    /// Validate one call's arguments against every binding.
    ///
    /// Stops at the first failure; explicit selectors run in table order,
    /// then the positional wildcard, then the keyword wildcard.
    pub fn check(&self, args: &Arguments) -> Result<()> {
        let result = self.resolve(args);
        if let Err(err) = &result {
            let field = err.as_invalid().map_or("", |invalid| invalid.field.as_str());
            let kind = err.kind().map_or("predicate_error", |kind| kind.as_str());
            argus_log::debug!(
                target: TARGET,
                { kind = kind, field = field },
                "call rejected: {}",
                err
            );
        }
        result
    }

    fn resolve(&self, args: &Arguments) -> Result<()> {
        let mut resolution = Resolution::new(args);
        for binding in self.bindings.iter() {
            resolution.apply(&binding.selector, &*binding.validator)?;
        }
        resolution.finish()
    }

    /// Wrap a callable so every invocation is checked first.
    pub fn wrap<F>(&self, func: F) -> Guarded<F> {
        Guarded::new(self.clone(), func)
    }

    /// Number of bound selectors, after flattening groups.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no selector is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound selectors in table order.
    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.bindings.iter().map(|binding| &binding.selector)
    }
}

impl fmt::Debug for ArgGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.bindings
                    .iter()
                    .map(|binding| (&binding.selector, binding.validator.name())),
            )
            .finish()
    }
}

/// Builder for [`ArgGuard`].
#[derive(Default)]
pub struct ArgGuardBuilder {
    bindings: Vec<Binding>,
}

impl ArgGuardBuilder {
    /// Bind a validator to one selector or a group of selectors.
    pub fn rule<S, V>(self, selectors: S, validator: V) -> Self
    where
        S: IntoSelectors,
        V: Validator + 'static,
    {
        self.shared(selectors, Arc::new(validator))
    }

    /// Bind an already shared validator.
    pub fn shared<S: IntoSelectors>(mut self, selectors: S, validator: Arc<dyn Validator>) -> Self {
        for selector in selectors.into_selectors() {
            self.bindings.push(Binding {
                selector,
                validator: Arc::clone(&validator),
            });
        }
        self
    }

    /// Freeze the table.
    ///
    /// Fails with `duplicate_wildcard` when `ARGS` or `KWARGS` is bound more
    /// than once, and with `duplicate_selector` when the same index or name
    /// is bound twice. Indices are compared as written; `-1` and `2` only
    /// collide at call time, once the arity is known.
    pub fn build(self) -> Result<ArgGuard> {
        let mut seen = HashSet::new();
        for binding in &self.bindings {
            if seen.insert(&binding.selector) {
                continue;
            }
            let err = if binding.selector.is_wildcard() {
                duplicate_wildcard(&binding.selector)
            } else {
                duplicate_selector(binding.selector.label())
            };
            argus_log::debug!(
                target: TARGET,
                { selector = binding.selector },
                "guard rejected: {}",
                err
            );
            return Err(err);
        }

        argus_log::debug!(
            target: TARGET,
            { selectors = self.bindings.len() },
            "guard built"
        );
        Ok(ArgGuard {
            bindings: self.bindings.into(),
        })
    }
}

/// Build a guard from a table of selector groups and shared validators.
pub fn bind<I>(table: I) -> Result<ArgGuard>
where
    I: IntoIterator<Item = (Vec<Selector>, Arc<dyn Validator>)>,
{
    table
        .into_iter()
        .fold(ArgGuard::builder(), |builder, (selectors, validator)| {
            builder.shared(selectors, validator)
        })
        .build()
}

/// Build an [`ArgGuard`] from `(selectors, validator)` pairs.
///
/// ```
/// use argus_core::{KWARGS, Rule, ValueType, args, guard};
///
/// let guard = guard![
///     ((0, 1), Rule::new().types([ValueType::Integer])),
///     (KWARGS, Rule::new().types([ValueType::String])),
/// ]
/// .unwrap();
///
/// assert!(guard.check(&args![1, 2; name = "x"]).is_ok());
/// ```
#[macro_export]
macro_rules! guard {
    ($(($selectors:expr, $validator:expr)),* $(,)?) => {
        $crate::ArgGuard::builder()
            $(.rule($selectors, $validator))*
            .build()
    };
}
