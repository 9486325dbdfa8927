//! Named columns for building a facet by column name.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::level::KeyArray;

/// One named column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Categorical levels, usable as a grouping key.
    Categorical(KeyArray),
    /// Numbers, usable as plotted values.
    Numeric(Vec<f32>),
}

impl Column {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Column::Categorical(keys) => keys.len(),
            Column::Numeric(values) => values.len(),
        }
    }

    /// True if the column has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<KeyArray> for Column {
    fn from(keys: KeyArray) -> Self {
        Column::Categorical(keys)
    }
}

impl From<Vec<f32>> for Column {
    fn from(values: Vec<f32>) -> Self {
        Column::Numeric(values)
    }
}

impl From<&[f32]> for Column {
    fn from(values: &[f32]) -> Self {
        Column::Numeric(values.to_vec())
    }
}

/// A set of named columns.
///
/// ```
/// use trueno_facet::level::KeyArray;
/// use trueno_facet::table::Table;
///
/// let table = Table::new()
///     .with_column("sex", KeyArray::from(["F", "M", "F"]))
///     .with_column("height", vec![160.0, 180.0, 165.0]);
/// assert_eq!(table.len(), 2);
/// assert!(table.numeric("height").is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: BTreeMap<String, Column>,
}

impl Table {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a column.
    #[must_use]
    pub fn with_column(mut self, name: &str, column: impl Into<Column>) -> Self {
        self.insert(name, column);
        self
    }

    /// Add or replace a column in place.
    pub fn insert(&mut self, name: &str, column: impl Into<Column>) {
        self.columns.insert(name.to_string(), column.into());
    }

    /// Column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Column names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True if there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// A categorical column.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] or [`Error::ColumnType`].
    pub fn categorical(&self, name: &str) -> Result<&KeyArray> {
        match self.columns.get(name) {
            Some(Column::Categorical(keys)) => Ok(keys),
            Some(Column::Numeric(_)) => Err(Error::ColumnType {
                name: name.to_string(),
                expected: "categorical",
            }),
            None => Err(Error::MissingColumn(name.to_string())),
        }
    }

    /// A numeric column.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] or [`Error::ColumnType`].
    pub fn numeric(&self, name: &str) -> Result<&[f32]> {
        match self.columns.get(name) {
            Some(Column::Numeric(values)) => Ok(values),
            Some(Column::Categorical(_)) => Err(Error::ColumnType {
                name: name.to_string(),
                expected: "numeric",
            }),
            None => Err(Error::MissingColumn(name.to_string())),
        }
    }
}
