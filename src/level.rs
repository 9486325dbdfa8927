//! Categorical levels and grouping arrays.
//!
//! A grouping array assigns one [`Level`] to each observation. Facets are
//! formed from the distinct levels (or level combinations) it contains.

use std::collections::BTreeSet;
use std::fmt;

/// A single categorical label.
///
/// Levels are totally ordered: booleans sort before integers, integers before
/// text, and values of the same kind compare naturally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Boolean flag.
    Bool(bool),
    /// Integer code.
    Int(i64),
    /// Text label.
    Text(String),
}

impl Level {
    /// Integer value, if this is an integer level.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Level::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Bool(v) => write!(f, "{v}"),
            Level::Int(v) => write!(f, "{v}"),
            Level::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Level {
    fn from(v: bool) -> Self {
        Level::Bool(v)
    }
}

impl From<&str> for Level {
    fn from(v: &str) -> Self {
        Level::Text(v.to_string())
    }
}

impl From<String> for Level {
    fn from(v: String) -> Self {
        Level::Text(v)
    }
}

impl From<&String> for Level {
    fn from(v: &String) -> Self {
        Level::Text(v.clone())
    }
}

macro_rules! level_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Level {
                fn from(v: $t) -> Self {
                    Level::Int(v as i64)
                }
            }
        )*
    };
}

level_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// An ordered sequence of categorical labels, one per observation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyArray {
    levels: Vec<Level>,
}

impl KeyArray {
    /// Build a grouping array from anything convertible to [`Level`].
    pub fn new<I, L>(levels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Level>,
    {
        Self {
            levels: levels.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True if there are no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level of observation `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Level> {
        self.levels.get(i)
    }

    /// All levels in observation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Level] {
        &self.levels
    }

    /// Distinct levels in sorted order.
    #[must_use]
    pub fn unique(&self) -> Vec<Level> {
        self.levels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<L: Into<Level>> From<Vec<L>> for KeyArray {
    fn from(levels: Vec<L>) -> Self {
        Self::new(levels)
    }
}

impl<L: Into<Level> + Clone> From<&[L]> for KeyArray {
    fn from(levels: &[L]) -> Self {
        Self::new(levels.iter().cloned())
    }
}

impl<L: Into<Level> + Clone> From<&Vec<L>> for KeyArray {
    fn from(levels: &Vec<L>) -> Self {
        Self::new(levels.iter().cloned())
    }
}

impl<L: Into<Level>, const N: usize> From<[L; N]> for KeyArray {
    fn from(levels: [L; N]) -> Self {
        Self::new(levels)
    }
}

/// One combination of levels, with one entry per grouping dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacetKey(Vec<Level>);

impl FacetKey {
    /// Create a key from its per-dimension levels.
    #[must_use]
    pub fn new(levels: Vec<Level>) -> Self {
        Self(levels)
    }

    /// Key for a single grouping dimension.
    pub fn single(level: impl Into<Level>) -> Self {
        Self(vec![level.into()])
    }

    /// Per-dimension levels.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.0
    }

    /// Number of grouping dimensions.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.0.len()
    }
}

impl From<Level> for FacetKey {
    fn from(level: Level) -> Self {
        Self(vec![level])
    }
}

impl fmt::Display for FacetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [single] = self.0.as_slice() {
            return write!(f, "{single}");
        }
        f.write_str("(")?;
        for (i, level) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{level}")?;
        }
        f.write_str(")")
    }
}
