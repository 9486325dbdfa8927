//! Error types for trueno-facet operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or drawing a faceted figure.
#[derive(Error, Debug)]
pub enum Error {
    /// An input array does not have the same length as the first grouping array.
    #[error("Length mismatch: {array} has {found} elements, expected {expected}")]
    LengthMismatch {
        /// Which array is off (e.g. `values[1]`).
        array: String,
        /// Length of the first grouping array.
        expected: usize,
        /// Length of the offending array.
        found: usize,
    },

    /// Wrong number of grouping arrays.
    #[error("Keys must be one or two grouping arrays, got {0}")]
    KeyCount(usize),

    /// No value arrays were supplied.
    #[error("At least one value array is required")]
    NoValues,

    /// Zero observations.
    #[error("No data to facet")]
    EmptyData,

    /// The level combinations exceed the configured limit.
    #[error("Too many facets to plot (limit={limit}): {count}")]
    TooManyFacets {
        /// Number of cells the keys would produce.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// Requested grid cannot hold every facet.
    #[error("nrows ({nrows}) and ncols ({ncols}) not big enough to plot {facets} facets")]
    GridTooSmall {
        /// Requested rows.
        nrows: usize,
        /// Requested columns.
        ncols: usize,
        /// Facets that need a cell.
        facets: usize,
    },

    /// With two keys the grid shape is fixed by the level counts.
    #[error("Two keys specified: (nrows, ncols) must be ({nrows}, {ncols})")]
    GridConflict {
        /// Level count of the row key.
        nrows: usize,
        /// Level count of the column key.
        ncols: usize,
    },

    /// No plotting primitive by that name.
    #[error("'{0}' is not a valid plot method")]
    UnknownMethod(String),

    /// A keyword option the primitive does not understand.
    #[error("{primitive}() got an unexpected keyword argument '{key}'")]
    InvalidArgument {
        /// Primitive that rejected the option.
        primitive: &'static str,
        /// The unknown key.
        key: String,
    },

    /// A keyword option of the wrong type or out of range.
    #[error("{primitive}(): invalid value for '{key}', expected {expected}")]
    InvalidValue {
        /// Primitive that rejected the option.
        primitive: &'static str,
        /// Option key.
        key: String,
        /// Human readable description of what was expected.
        expected: &'static str,
    },

    /// Wrong number of value arrays for a primitive.
    #[error("{primitive}() takes {expected} value arrays, got {found}")]
    Arity {
        /// Primitive name.
        primitive: &'static str,
        /// Accepted counts, e.g. `"1 or 2"`.
        expected: &'static str,
        /// Supplied count.
        found: usize,
    },

    /// The labeler has no entry for a facet key.
    #[error("No label for facet {0}")]
    MissingLabel(String),

    /// Named column not present in a table.
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// Column exists but holds the wrong kind of data.
    #[error("Column '{name}' must be {expected}")]
    ColumnType {
        /// Column name.
        name: String,
        /// `"categorical"` or `"numeric"`.
        expected: &'static str,
    },

    /// Configuration parsing error with line number.
    #[cfg(feature = "config")]
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Error raised by the plotting backend.
    #[error("Rendering error: {0}")]
    Render(#[from] trueno_viz::Error),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
