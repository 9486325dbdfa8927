//! Subplot grid geometry.
//!
//! Decides how many rows and columns a faceted figure needs, which cells share
//! an axis with which, and where tick labels are redundant.

use crate::error::{Error, Result};

/// Rows and columns of a subplot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Number of rows.
    pub nrows: usize,
    /// Number of columns.
    pub ncols: usize,
}

impl GridShape {
    /// Create a grid shape.
    #[must_use]
    pub const fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }

    /// Total number of slots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nrows * self.ncols
    }

    /// True if the grid has no slots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major slot index to grid position.
    #[must_use]
    pub const fn cell(&self, index: usize) -> CellIndex {
        CellIndex {
            row: index / self.ncols,
            col: index % self.ncols,
        }
    }

    /// Grid position to row-major slot index.
    #[must_use]
    pub const fn index(&self, cell: CellIndex) -> usize {
        cell.row * self.ncols + cell.col
    }
}

/// Position of a cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl CellIndex {
    /// Create a cell position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Which cells share an axis range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum ShareAxes {
    /// Every cell scales independently.
    None,
    /// Cells in the same row share.
    Row,
    /// Cells in the same column share.
    Col,
    /// The whole grid shares one range.
    #[default]
    All,
}

impl From<bool> for ShareAxes {
    fn from(share: bool) -> Self {
        if share {
            ShareAxes::All
        } else {
            ShareAxes::None
        }
    }
}

impl ShareAxes {
    /// Index of the cell whose range `index` follows.
    ///
    /// Cells with the same leader form one share group.
    #[must_use]
    pub const fn leader(self, shape: GridShape, index: usize) -> usize {
        match self {
            ShareAxes::None => index,
            ShareAxes::All => 0,
            ShareAxes::Row => (index / shape.ncols) * shape.ncols,
            ShareAxes::Col => index % shape.ncols,
        }
    }
}

/// Determine the grid for a set of facets.
///
/// `level_counts` has one entry per grouping dimension. With two dimensions
/// the grid is fixed at `(levels[0], levels[1])`. With one, the caller may
/// pin `nrows` and/or `ncols`; otherwise the grid is close to square, with
/// no more rows than columns.
///
/// # Errors
///
/// - [`Error::GridConflict`] if a two-key grid is pinned to another shape.
/// - [`Error::GridTooSmall`] if the pinned grid cannot hold every facet.
pub fn subplot_dims(
    level_counts: &[usize],
    nrows: Option<usize>,
    ncols: Option<usize>,
) -> Result<GridShape> {
    match level_counts {
        [rows, cols] => {
            let conflict =
                nrows.is_some_and(|n| n != *rows) || ncols.is_some_and(|n| n != *cols);
            if conflict {
                return Err(Error::GridConflict {
                    nrows: *rows,
                    ncols: *cols,
                });
            }
            Ok(GridShape::new(*rows, *cols))
        }
        [size] => {
            let size = *size;
            let too_small = |nrows: usize, ncols: usize| Error::GridTooSmall {
                nrows,
                ncols,
                facets: size,
            };

            let nrows = match (nrows, ncols) {
                (Some(r), _) => r,
                (None, None) => ((size as f64).sqrt() as usize).max(1),
                (None, Some(0)) => return Err(too_small(0, 0)),
                (None, Some(c)) => size.div_ceil(c),
            };
            let ncols = match ncols {
                Some(c) => c,
                None if nrows == 0 => return Err(too_small(0, 0)),
                None => size.div_ceil(nrows),
            };

            if nrows * ncols < size || nrows == 0 || ncols == 0 {
                return Err(too_small(nrows, ncols));
            }
            Ok(GridShape::new(nrows, ncols))
        }
        other => Err(Error::KeyCount(other.len())),
    }
}

/// Whether the x and y tick labels of a cell should be drawn.
///
/// Shared x axes hide their labels when another cell sits directly below.
/// Shared y axes hide them everywhere but the first column. `present` tells
/// which slots actually hold a cell.
#[must_use]
pub fn tick_label_visibility(
    shape: GridShape,
    index: usize,
    share_x: ShareAxes,
    share_y: ShareAxes,
    present: impl Fn(usize) -> bool,
) -> (bool, bool) {
    let cell = shape.cell(index);
    let below = index + shape.ncols;
    let has_cell_below = cell.row + 1 < shape.nrows && present(below);

    let show_x = !(matches!(share_x, ShareAxes::Col | ShareAxes::All) && has_cell_below);
    let show_y = !(matches!(share_y, ShareAxes::Row | ShareAxes::All) && cell.col > 0);
    (show_x, show_y)
}
