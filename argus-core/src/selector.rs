// Argument selectors

use std::fmt;

/// Which call-site argument(s) a validator applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Positional argument; negative indices count from the end of the
    /// positional arguments supplied to each call.
    Index(isize),
    /// Keyword argument by name
    Name(String),
    /// Every positional argument not claimed by another selector
    AllRemainingPositional,
    /// Every keyword argument not claimed by another selector
    AllRemainingKeyword,
}

/// Marker for all remaining positional arguments.
pub const ARGS: Selector = Selector::AllRemainingPositional;

/// Marker for all remaining keyword arguments.
pub const KWARGS: Selector = Selector::AllRemainingKeyword;

impl Selector {
    pub fn is_wildcard(&self) -> bool {
        matches!(
            self,
            Selector::AllRemainingPositional | Selector::AllRemainingKeyword
        )
    }

    /// Label used in errors raised for this selector itself.
    pub(crate) fn label(&self) -> String {
        match self {
            Selector::Index(index) => positional_label(*index),
            Selector::Name(name) => keyword_label(name),
            Selector::AllRemainingPositional => "ARGS".to_string(),
            Selector::AllRemainingKeyword => "KWARGS".to_string(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(index) => write!(f, "{}", index),
            Selector::Name(name) => write!(f, "'{}'", name),
            Selector::AllRemainingPositional => f.write_str("ARGS"),
            Selector::AllRemainingKeyword => f.write_str("KWARGS"),
        }
    }
}

pub(crate) fn positional_label(index: impl fmt::Display) -> String {
    format!("arg at index {}", index)
}

pub(crate) fn keyword_label(name: &str) -> String {
    format!("kwarg '{}'", name)
}

impl From<isize> for Selector {
    fn from(index: isize) -> Self {
        Selector::Index(index)
    }
}

impl From<i32> for Selector {
    fn from(index: i32) -> Self {
        Selector::Index(index as isize)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Name(name.to_string())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Name(name)
    }
}

impl From<&String> for Selector {
    fn from(name: &String) -> Self {
        Selector::Name(name.clone())
    }
}

/// Conversion of a single selector or a group of selectors into the flat,
/// ordered list bound to one validator.
///
/// Groups may mix indices, names and wildcard markers:
///
/// ```
/// use argus_core::{ARGS, IntoSelectors, Selector};
///
/// let selectors = (2, "test", ARGS).into_selectors();
/// assert_eq!(
///     selectors,
///     vec![Selector::Index(2), Selector::Name("test".into()), ARGS]
/// );
/// ```
pub trait IntoSelectors {
    fn into_selectors(self) -> Vec<Selector>;
}

macro_rules! impl_single {
    ($($ty:ty),*) => {
        $(
            impl IntoSelectors for $ty {
                fn into_selectors(self) -> Vec<Selector> {
                    vec![Selector::from(self)]
                }
            }
        )*
    };
}

impl_single!(Selector, isize, i32, &str, String, &String);

impl<T: Into<Selector>, const N: usize> IntoSelectors for [T; N] {
    fn into_selectors(self) -> Vec<Selector> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Selector>> IntoSelectors for Vec<T> {
    fn into_selectors(self) -> Vec<Selector> {
        self.into_iter().map(Into::into).collect()
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Selector>),+> IntoSelectors for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_selectors(self) -> Vec<Selector> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);
