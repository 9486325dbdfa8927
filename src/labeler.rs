//! Cell titles for facet keys.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::level::FacetKey;

/// Closure form of a [`Labeler`].
pub type LabelFn = Arc<dyn Fn(&FacetKey) -> String + Send + Sync>;

/// How a [`FacetKey`] becomes a cell title.
#[derive(Clone, Default)]
pub enum Labeler {
    /// The key itself: `Male`, or `(Male, 3)` for two dimensions.
    #[default]
    Display,
    /// Column-qualified: `sex: Male, age: 3`.
    Columns(Vec<String>),
    /// Lookup table.
    Map(HashMap<FacetKey, String>),
    /// Indexed by a single non-negative integer level.
    Sequence(Vec<String>),
    /// Arbitrary function of the key.
    Func(LabelFn),
}

impl fmt::Debug for Labeler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Labeler::Display => f.write_str("Display"),
            Labeler::Columns(names) => f.debug_tuple("Columns").field(names).finish(),
            Labeler::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Labeler::Sequence(labels) => f.debug_tuple("Sequence").field(labels).finish(),
            Labeler::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl Labeler {
    /// Label with `"name: level"` pairs.
    #[must_use]
    pub fn columns<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Labeler::Columns(names.into_iter().map(Into::into).collect())
    }

    /// Label through a lookup table.
    #[must_use]
    pub fn map<K, S>(entries: impl IntoIterator<Item = (K, S)>) -> Self
    where
        K: Into<FacetKey>,
        S: Into<String>,
    {
        Labeler::Map(
            entries
                .into_iter()
                .map(|(k, s)| (k.into(), s.into()))
                .collect(),
        )
    }

    /// Label integer levels `0..n` by position.
    #[must_use]
    pub fn sequence<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Labeler::Sequence(labels.into_iter().map(Into::into).collect())
    }

    /// Label with a closure.
    pub fn func(f: impl Fn(&FacetKey) -> String + Send + Sync + 'static) -> Self {
        Labeler::Func(Arc::new(f))
    }

    /// Title for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingLabel`] if a `Map` or `Sequence` has no entry for `key`.
    pub fn label(&self, key: &FacetKey) -> Result<String> {
        let missing = || Error::MissingLabel(key.to_string());
        match self {
            Labeler::Display => Ok(key.to_string()),
            Labeler::Columns(names) => Ok(names
                .iter()
                .zip(key.levels())
                .map(|(name, level)| format!("{name}: {level}"))
                .collect::<Vec<_>>()
                .join(", ")),
            Labeler::Map(map) => map.get(key).cloned().ok_or_else(missing),
            Labeler::Sequence(labels) => match key.levels() {
                [level] => level
                    .as_int()
                    .and_then(|i| usize::try_from(i).ok())
                    .and_then(|i| labels.get(i))
                    .cloned()
                    .ok_or_else(missing),
                _ => Err(missing()),
            },
            Labeler::Func(f) => Ok(f(key)),
        }
    }
}

impl From<Vec<String>> for Labeler {
    fn from(labels: Vec<String>) -> Self {
        Labeler::Sequence(labels)
    }
}

impl From<HashMap<FacetKey, String>> for Labeler {
    fn from(map: HashMap<FacetKey, String>) -> Self {
        Labeler::Map(map)
    }
}
