//! Keyword options forwarded to plotting primitives.
//!
//! [`Kwargs`] is an ordered bag of `key = value` pairs. Each primitive reads
//! the keys it understands through a [`KwargsReader`] and rejects the rest,
//! so a misspelt option fails loudly instead of being ignored.

use trueno_viz::color::Rgba;

use crate::color::parse_color;
use crate::error::{Error, Result};

/// A keyword option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text (names, color strings, strategies).
    Text(String),
    /// Color.
    Color(Rgba),
    /// List of numbers.
    List(Vec<f32>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Rgba> for Value {
    fn from(v: Rgba) -> Self {
        Value::Color(v)
    }
}

impl From<Vec<f32>> for Value {
    fn from(v: Vec<f32>) -> Self {
        Value::List(v)
    }
}

impl From<&[f32]> for Value {
    fn from(v: &[f32]) -> Self {
        Value::List(v.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for Value {
    fn from(v: [f32; N]) -> Self {
        Value::List(v.to_vec())
    }
}

/// Ordered keyword options.
///
/// ```
/// use trueno_facet::kwargs::Kwargs;
///
/// let kw = Kwargs::new().set("bins", 20).set("color", "C2").set("density", true);
/// assert_eq!(kw.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kwargs {
    entries: Vec<(String, Value)>,
}

impl Kwargs {
    /// Empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any earlier value.
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` in place, replacing any earlier value.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start reading these options on behalf of `primitive`.
    #[must_use]
    pub fn reader(&self, primitive: &'static str) -> KwargsReader<'_> {
        KwargsReader {
            primitive,
            kwargs: self,
            used: vec![false; self.entries.len()],
        }
    }
}

/// Strict, typed access to a [`Kwargs`] bag.
///
/// Every `take_*` call marks its key as consumed. [`KwargsReader::finish`]
/// fails on the first key nobody consumed.
#[derive(Debug)]
pub struct KwargsReader<'a> {
    primitive: &'static str,
    kwargs: &'a Kwargs,
    used: Vec<bool>,
}

impl KwargsReader<'_> {
    fn take(&mut self, keys: &[&str]) -> Option<(&str, &Value)> {
        let pos = self
            .kwargs
            .entries
            .iter()
            .position(|(k, _)| keys.contains(&k.as_str()))?;
        self.used[pos] = true;
        let (k, v) = &self.kwargs.entries[pos];
        Some((k.as_str(), v))
    }

    fn invalid(&self, key: &str, expected: &'static str) -> Error {
        Error::InvalidValue {
            primitive: self.primitive,
            key: key.to_string(),
            expected,
        }
    }

    /// Any value, for options that accept several shapes.
    pub fn take_value(&mut self, keys: &[&str]) -> Option<Value> {
        self.take(keys).map(|(_, v)| v.clone())
    }

    /// A boolean option.
    pub fn take_bool(&mut self, keys: &[&str]) -> Result<Option<bool>> {
        let value = match self.take(keys) {
            None => return Ok(None),
            Some((k, v)) => (k.to_string(), v.clone()),
        };
        match value {
            (_, Value::Bool(b)) => Ok(Some(b)),
            (k, _) => Err(self.invalid(&k, "a bool")),
        }
    }

    /// A non-negative float option.
    pub fn take_f32(&mut self, keys: &[&str]) -> Result<Option<f32>> {
        let value = match self.take(keys) {
            None => return Ok(None),
            Some((k, v)) => (k.to_string(), v.clone()),
        };
        match value {
            (_, Value::Float(f)) if f.is_finite() && f >= 0.0 => Ok(Some(f as f32)),
            (_, Value::Int(i)) if i >= 0 => Ok(Some(i as f32)),
            (k, _) => Err(self.invalid(&k, "a non-negative number")),
        }
    }

    /// An opacity in `[0, 1]`.
    pub fn take_alpha(&mut self, keys: &[&str]) -> Result<Option<f32>> {
        let key = keys.first().copied().unwrap_or("alpha");
        match self.take_f32(keys)? {
            Some(a) if a > 1.0 => Err(self.invalid(key, "a number in [0, 1]")),
            other => Ok(other),
        }
    }

    /// A color, given as [`Value::Color`] or a parseable string.
    pub fn take_color(&mut self, keys: &[&str]) -> Result<Option<Rgba>> {
        let value = match self.take(keys) {
            None => return Ok(None),
            Some((k, v)) => (k.to_string(), v.clone()),
        };
        match value {
            (_, Value::Color(c)) => Ok(Some(c)),
            (k, Value::Text(s)) => parse_color(&s)
                .map(Some)
                .ok_or_else(|| self.invalid(&k, "a color name, '#rrggbb' or 'C0'..'C9'")),
            (k, _) => Err(self.invalid(&k, "a color")),
        }
    }

    /// A `[lo, hi]` pair with `lo < hi`.
    pub fn take_range(&mut self, keys: &[&str]) -> Result<Option<(f32, f32)>> {
        let value = match self.take(keys) {
            None => return Ok(None),
            Some((k, v)) => (k.to_string(), v.clone()),
        };
        match value {
            (_, Value::List(v)) if v.len() == 2 && v[0] < v[1] => Ok(Some((v[0], v[1]))),
            (k, _) => Err(self.invalid(&k, "a [lo, hi] pair with lo < hi")),
        }
    }

    /// Fail on the first option no `take_*` call consumed.
    pub fn finish(self) -> Result<()> {
        match self.used.iter().position(|used| !used) {
            Some(pos) => Err(Error::InvalidArgument {
                primitive: self.primitive,
                key: self.kwargs.entries[pos].0.clone(),
            }),
            None => Ok(()),
        }
    }
}
