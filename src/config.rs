//! Facet layout options.
//!
//! With the `config` feature the options can be read from YAML, e.g.
//!
//! ```yaml
//! ncols: 3
//! share_y: row
//! cell_width: 400
//! max_facets: 100
//! ```

use crate::layout::ShareAxes;

#[cfg(feature = "config")]
use crate::error::{Error, Result};
#[cfg(feature = "config")]
use std::path::Path;

/// Options controlling grid layout and axis sharing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct FacetOptions {
    /// Pin the number of rows (single grouping array only).
    pub nrows: Option<usize>,
    /// Pin the number of columns (single grouping array only).
    pub ncols: Option<usize>,
    /// X axis sharing across cells.
    pub share_x: ShareAxes,
    /// Y axis sharing across cells.
    pub share_y: ShareAxes,
    /// Width of one cell in pixels.
    pub cell_width: u32,
    /// Height of one cell in pixels.
    pub cell_height: u32,
    /// Fraction of the data span added on each side when autoscaling.
    pub margin: f32,
    /// Upper bound on the number of cells.
    pub max_facets: usize,
}

impl Default for FacetOptions {
    fn default() -> Self {
        Self {
            nrows: None,
            ncols: None,
            share_x: ShareAxes::All,
            share_y: ShareAxes::All,
            cell_width: 320,
            cell_height: 240,
            margin: 0.05,
            max_facets: 50,
        }
    }
}

impl FacetOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the number of rows.
    #[must_use]
    pub fn nrows(mut self, nrows: usize) -> Self {
        self.nrows = Some(nrows);
        self
    }

    /// Pin the number of columns.
    #[must_use]
    pub fn ncols(mut self, ncols: usize) -> Self {
        self.ncols = Some(ncols);
        self
    }

    /// Set x axis sharing.
    #[must_use]
    pub fn share_x(mut self, share: impl Into<ShareAxes>) -> Self {
        self.share_x = share.into();
        self
    }

    /// Set y axis sharing.
    #[must_use]
    pub fn share_y(mut self, share: impl Into<ShareAxes>) -> Self {
        self.share_y = share.into();
        self
    }

    /// Set the size of each cell in pixels.
    #[must_use]
    pub fn cell_size(mut self, width: u32, height: u32) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Set the autoscale margin.
    #[must_use]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Set the maximum number of cells.
    #[must_use]
    pub fn max_facets(mut self, max: usize) -> Self {
        self.max_facets = max;
        self
    }
}

#[cfg(feature = "config")]
impl FacetOptions {
    /// Loads options from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses options from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads options with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(options) => options,
            Err(err) => {
                tracing::debug!(%err, "facet options not loaded, using defaults");
                Self::default()
            }
        }
    }
}
