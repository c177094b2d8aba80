// Call-site arguments

use serde_json::Value;

/// The positional and keyword arguments of a single call.
///
/// Keyword arguments keep the order in which they were supplied; supplying
/// a name twice replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    keyword: Vec<(String, Value)>,
}

impl Arguments {
    /// Create an empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.push_arg(value);
        self
    }

    /// Supply a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_kwarg(name, value);
        self
    }

    /// Append a positional argument in place.
    pub fn push_arg(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    /// Supply a keyword argument in place, replacing an earlier value for
    /// the same name without moving it.
    pub fn insert_kwarg(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.keyword.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.keyword.push((name, value)),
        }
    }

    /// Positional arguments in call order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Number of positional arguments.
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Positional argument at `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Keyword argument supplied as `name`.
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keyword
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Keyword arguments in supplied order.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keyword.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of keyword arguments.
    pub fn keyword_len(&self) -> usize {
        self.keyword.len()
    }

    /// Whether the call has no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Split into positional and keyword arguments.
    pub fn into_parts(self) -> (Vec<Value>, Vec<(String, Value)>) {
        (self.positional, self.keyword)
    }
}

impl FromIterator<Value> for Arguments {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().collect(),
            keyword: Vec::new(),
        }
    }
}

/// Build [`Arguments`]: positional values first, keyword values after `;`.
///
/// ```
/// use argus_core::args;
///
/// let call = args![0, vec!["A", "B"]; pid = 1, two = 2];
/// assert_eq!(call.positional_len(), 2);
/// assert_eq!(call.keyword("pid"), Some(&serde_json::json!(1)));
///
/// let keywords_only = args![; first = "first"];
/// assert_eq!(keywords_only.positional_len(), 0);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Arguments::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Arguments::new()$(.arg($arg))+
    };
    ($($arg:expr),* ; $($key:ident = $value:expr),* $(,)?) => {
        $crate::Arguments::new()$(.arg($arg))*$(.kwarg(stringify!($key), $value))*
    };
}
