//! # Trueno-Facet
//!
//! Faceted (small-multiple) plots on top of [trueno-viz](https://crates.io/crates/trueno-viz).
//!
//! Split aligned observation arrays by one or two categorical keys and draw
//! one plot per group into a grid of cells that share their axis ranges.
//!
//! ## Features
//!
//! - **Grid layout**: near-square wrapping for one key, rows × columns for two
//! - **Shared scaling**: x/y limits resolved across the grid, per row or per column
//! - **Primitives**: histogram, scatter, line and bar, by type or by name with keyword options
//! - **Multiple Outputs**: PNG, SVG (with titles and tick labels) and terminal rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_facet::prelude::*;
//!
//! let gender = ["Male", "Female", "Female", "Male"];
//! let height = [180.0, 165.0, 170.0, 175.0];
//!
//! let mut facet = Facet::new(gender, height)?;
//! let figure = facet.hist(&HistOptions::new().bins(BinStrategy::Fixed(5)))?;
//! assert_eq!(figure.len(), 2);
//!
//! let svg = figure.to_svg()?.render();
//! assert!(svg.contains("Female"));
//! # Ok::<(), trueno_facet::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable parallel processing in trueno
//! - `config`: Load [`FacetOptions`](config::FacetOptions) from YAML
//! - `full`: All features enabled

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Data Modules
// ============================================================================

/// Categorical levels, grouping arrays and facet keys.
pub mod level;

/// Partitioning of aligned key arrays.
pub mod group;

/// Named columns.
pub mod table;

// ============================================================================
// Layout Modules
// ============================================================================

/// Grid sizing, axis sharing and tick-label rules.
pub mod layout;

/// Facet layout options.
pub mod config;

/// Cell titles.
pub mod labeler;

// ============================================================================
// Drawing Modules
// ============================================================================

/// Default color cycle and color parsing.
pub mod color;

/// Data extents and axis padding.
pub mod bounds;

/// Keyword options for primitives.
pub mod kwargs;

/// Plotting primitives.
pub mod primitives;

/// Single grid cell.
pub mod axes;

/// Grid of cells and output.
pub mod figure;

/// Faceted plotting.
pub mod facet;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-facet operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use trueno_facet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axes::{Artist, Axes};
    pub use crate::config::FacetOptions;
    pub use crate::error::{Error, Result};
    pub use crate::facet::{Facet, FacetBuilder, FacetGroup, FacetItem};
    pub use crate::figure::Figure;
    pub use crate::kwargs::{Kwargs, Value};
    pub use crate::labeler::Labeler;
    pub use crate::layout::{CellIndex, GridShape, ShareAxes};
    pub use crate::level::{FacetKey, KeyArray, Level};
    pub use crate::primitives::{
        BarOptions, BinStrategy, HistOptions, LineOptions, Primitive, ScatterOptions,
    };
    pub use crate::table::{Column, Table};
    pub use trueno_viz::color::Rgba;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno-viz for direct access to the rendering backend.
pub use trueno_viz;
