//! Faceted plotting: split aligned arrays by category and draw one cell per group.
//!
//! A [`Facet`] is built from one or two grouping arrays and one or more value
//! arrays of the same length. Every combination of levels gets a cell in a
//! [`Figure`]; each plotting call draws that combination's rows into its cell
//! and the shared limits are resolved across the whole grid.
//!
//! # Example
//!
//! ```
//! use trueno_facet::prelude::*;
//!
//! let gender = ["Male", "Female", "Female", "Male", "Female"];
//! let height = [180.0, 165.0, 170.0, 175.0, 160.0];
//!
//! let mut facet = Facet::new(gender, height).unwrap();
//! let figure = facet.hist(&HistOptions::new()).unwrap();
//!
//! assert_eq!(figure.len(), 2);
//! let titles: Vec<_> = figure.iter().filter_map(|(_, ax)| ax.title()).collect();
//! assert_eq!(titles, ["Female", "Male"]);
//! ```

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, debug_span, trace, warn};

use crate::axes::Axes;
use crate::bounds::extent;
use crate::config::FacetOptions;
use crate::error::{Error, Result};
use crate::figure::Figure;
use crate::group::groupby;
use crate::kwargs::Kwargs;
use crate::labeler::Labeler;
use crate::layout::{subplot_dims, CellIndex, GridShape, ShareAxes};
use crate::level::{FacetKey, KeyArray, Level};
use crate::primitives::{
    BarOptions, HistOptions, LineOptions, PlotOptions, Primitive, ScatterOptions,
};
use crate::table::Table;

/// One or more value arrays.
///
/// Built from a single array (`Vec<f32>`, `&[f32]`, `[f32; N]`) or from
/// several (`Vec<Vec<f32>>`, `[&[f32]; N]`, `[Vec<f32>; N]`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values(Vec<Vec<f32>>);

impl Values {
    /// The arrays.
    #[must_use]
    pub fn into_inner(self) -> Vec<Vec<f32>> {
        self.0
    }
}

impl From<Vec<f32>> for Values {
    fn from(v: Vec<f32>) -> Self {
        Self(vec![v])
    }
}

impl From<&Vec<f32>> for Values {
    fn from(v: &Vec<f32>) -> Self {
        Self(vec![v.clone()])
    }
}

impl From<&[f32]> for Values {
    fn from(v: &[f32]) -> Self {
        Self(vec![v.to_vec()])
    }
}

impl<const N: usize> From<[f32; N]> for Values {
    fn from(v: [f32; N]) -> Self {
        Self(vec![v.to_vec()])
    }
}

impl From<Vec<Vec<f32>>> for Values {
    fn from(v: Vec<Vec<f32>>) -> Self {
        Self(v)
    }
}

impl<const N: usize> From<[Vec<f32>; N]> for Values {
    fn from(v: [Vec<f32>; N]) -> Self {
        Self(v.into_iter().collect())
    }
}

impl<const N: usize> From<[&[f32]; N]> for Values {
    fn from(v: [&[f32]; N]) -> Self {
        Self(v.iter().map(|a| a.to_vec()).collect())
    }
}

/// One level combination and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup {
    /// Level combination.
    pub key: FacetKey,
    /// Cell title.
    pub label: String,
    /// Grid position.
    pub cell: CellIndex,
    /// Matching rows, ascending. Empty for a combination with no observations.
    pub indices: Vec<usize>,
}

/// A facet's data subset, for custom plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetItem {
    /// Level combination.
    pub key: FacetKey,
    /// Cell title.
    pub label: String,
    /// Grid position.
    pub cell: CellIndex,
    /// The rows of each value array that belong to this facet.
    pub data: Vec<Vec<f32>>,
}

impl FacetItem {
    /// Borrowed views of [`FacetItem::data`], ready for a primitive.
    #[must_use]
    pub fn slices(&self) -> Vec<&[f32]> {
        self.data.iter().map(Vec::as_slice).collect()
    }
}

/// Builder for [`Facet`].
#[derive(Debug, Clone, Default)]
pub struct FacetBuilder {
    keys: Vec<KeyArray>,
    values: Vec<Vec<f32>>,
    labeler: Option<Labeler>,
    xlabel: Option<String>,
    ylabel: Option<String>,
    options: FacetOptions,
}

impl FacetBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a grouping array.
    #[must_use]
    pub fn key(mut self, key: impl Into<KeyArray>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Add value arrays.
    #[must_use]
    pub fn values(mut self, values: impl Into<Values>) -> Self {
        self.values.extend(values.into().into_inner());
        self
    }

    /// Set how facet keys become cell titles.
    #[must_use]
    pub fn labeler(mut self, labeler: impl Into<Labeler>) -> Self {
        self.labeler = Some(labeler.into());
        self
    }

    /// Figure-level x label.
    #[must_use]
    pub fn xlabel(mut self, label: &str) -> Self {
        self.xlabel = Some(label.to_string());
        self
    }

    /// Figure-level y label.
    #[must_use]
    pub fn ylabel(mut self, label: &str) -> Self {
        self.ylabel = Some(label.to_string());
        self
    }

    /// Replace all layout options.
    #[must_use]
    pub fn options(mut self, options: FacetOptions) -> Self {
        self.options = options;
        self
    }

    /// Pin the number of rows.
    #[must_use]
    pub fn nrows(mut self, nrows: usize) -> Self {
        self.options = self.options.nrows(nrows);
        self
    }

    /// Pin the number of columns.
    #[must_use]
    pub fn ncols(mut self, ncols: usize) -> Self {
        self.options = self.options.ncols(ncols);
        self
    }

    /// X axis sharing.
    #[must_use]
    pub fn share_x(mut self, share: impl Into<ShareAxes>) -> Self {
        self.options = self.options.share_x(share);
        self
    }

    /// Y axis sharing.
    #[must_use]
    pub fn share_y(mut self, share: impl Into<ShareAxes>) -> Self {
        self.options = self.options.share_y(share);
        self
    }

    /// Validate the inputs and lay out the grid.
    ///
    /// # Errors
    ///
    /// In checking order: [`Error::KeyCount`], [`Error::NoValues`],
    /// [`Error::LengthMismatch`], [`Error::EmptyData`],
    /// [`Error::TooManyFacets`], [`Error::GridConflict`] or
    /// [`Error::GridTooSmall`], and [`Error::MissingLabel`].
    pub fn build(self) -> Result<Facet> {
        if !(1..=2).contains(&self.keys.len()) {
            return Err(Error::KeyCount(self.keys.len()));
        }
        if self.values.is_empty() {
            return Err(Error::NoValues);
        }

        let n = self.keys[0].len();
        let lengths = self
            .keys
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, k)| (format!("keys[{i}]"), k.len()))
            .chain(
                self.values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (format!("values[{i}]"), v.len())),
            );
        for (array, found) in lengths {
            if found != n {
                return Err(Error::LengthMismatch {
                    array,
                    expected: n,
                    found,
                });
            }
        }
        if n == 0 {
            return Err(Error::EmptyData);
        }

        let levels: Vec<Vec<Level>> = self.keys.iter().map(KeyArray::unique).collect();
        let counts: Vec<usize> = levels.iter().map(Vec::len).collect();
        let count: usize = counts.iter().product();
        if count > self.options.max_facets {
            return Err(Error::TooManyFacets {
                count,
                limit: self.options.max_facets,
            });
        }
        let shape = subplot_dims(&counts, self.options.nrows, self.options.ncols)?;

        let index: Vec<HashMap<Level, usize>> = levels
            .iter()
            .map(|lv| lv.iter().cloned().enumerate().map(|(i, l)| (l, i)).collect())
            .collect();
        let labeler = self.labeler.unwrap_or_default();

        let key_refs: Vec<&KeyArray> = self.keys.iter().collect();
        let mut observed: BTreeMap<FacetKey, Vec<usize>> = groupby(&key_refs)?
            .into_iter()
            .map(|g| (g.key, g.indices))
            .collect();

        let mut groups = Vec::with_capacity(count);
        for key in combinations(&levels) {
            let Some(cell) = locate(shape, &index, &key) else {
                continue;
            };
            groups.push(FacetGroup {
                label: labeler.label(&key)?,
                indices: observed.remove(&key).unwrap_or_default(),
                cell,
                key,
            });
        }

        let mut figure = Figure::subplots(shape, count, self.options.share_x, self.options.share_y)
            .cell_size(self.options.cell_width, self.options.cell_height)
            .margin(self.options.margin);
        if let Some(label) = &self.xlabel {
            figure.set_xlabel(label.as_str());
        }
        if let Some(label) = &self.ylabel {
            figure.set_ylabel(label.as_str());
        }

        debug!(
            levels = ?counts,
            nrows = shape.nrows,
            ncols = shape.ncols,
            cells = count,
            rows = n,
            "facet built"
        );

        Ok(Facet {
            keys: self.keys,
            values: self.values,
            levels,
            index,
            labeler,
            options: self.options,
            groups,
            figure,
        })
    }
}

/// Every level combination in sorted order, dimension 0 most significant.
fn combinations(levels: &[Vec<Level>]) -> Vec<FacetKey> {
    levels
        .iter()
        .fold(vec![Vec::new()], |acc: Vec<Vec<Level>>, dim| {
            acc.iter()
                .flat_map(|prefix| {
                    dim.iter().map(move |level| {
                        let mut key = prefix.clone();
                        key.push(level.clone());
                        key
                    })
                })
                .collect()
        })
        .into_iter()
        .map(FacetKey::new)
        .collect()
}

fn locate(shape: GridShape, index: &[HashMap<Level, usize>], key: &FacetKey) -> Option<CellIndex> {
    if key.dims() != index.len() {
        return None;
    }
    let pos: Vec<usize> = key
        .levels()
        .iter()
        .zip(index)
        .map(|(level, idx)| idx.get(level).copied())
        .collect::<Option<_>>()?;
    match pos.as_slice() {
        [i] => Some(shape.cell(*i)),
        [row, col] => Some(CellIndex::new(*row, *col)),
        _ => None,
    }
}

/// A faceted figure under construction.
#[derive(Debug, Clone)]
pub struct Facet {
    keys: Vec<KeyArray>,
    values: Vec<Vec<f32>>,
    levels: Vec<Vec<Level>>,
    index: Vec<HashMap<Level, usize>>,
    labeler: Labeler,
    options: FacetOptions,
    groups: Vec<FacetGroup>,
    figure: Figure,
}

impl Facet {
    /// Facet `values` by a single grouping array.
    ///
    /// # Errors
    ///
    /// See [`FacetBuilder::build`].
    pub fn new(key: impl Into<KeyArray>, values: impl Into<Values>) -> Result<Self> {
        Self::builder().key(key).values(values).build()
    }

    /// Facet `values` on a grid: `row_key` levels down, `col_key` levels across.
    ///
    /// # Errors
    ///
    /// See [`FacetBuilder::build`].
    pub fn grid(
        row_key: impl Into<KeyArray>,
        col_key: impl Into<KeyArray>,
        values: impl Into<Values>,
    ) -> Result<Self> {
        Self::builder().key(row_key).key(col_key).values(values).build()
    }

    /// Start a builder.
    #[must_use]
    pub fn builder() -> FacetBuilder {
        FacetBuilder::new()
    }

    /// Builder over named table columns, titled `"column: level"`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] or [`Error::ColumnType`].
    pub fn from_labeled(
        table: &Table,
        facet_columns: &[&str],
        data_columns: &[&str],
    ) -> Result<FacetBuilder> {
        let mut builder = Self::builder().labeler(Labeler::columns(facet_columns.iter().copied()));
        for name in facet_columns {
            builder = builder.key(table.categorical(name)?.clone());
        }
        for name in data_columns {
            builder = builder.values(table.numeric(name)?);
        }
        Ok(builder)
    }

    /// Grid shape.
    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.figure.shape()
    }

    /// Sorted unique levels of grouping dimension `dim`.
    #[must_use]
    pub fn levels(&self, dim: usize) -> &[Level] {
        self.levels.get(dim).map_or(&[], Vec::as_slice)
    }

    /// Number of facets (level combinations).
    #[must_use]
    pub fn facet_count(&self) -> usize {
        self.groups.len()
    }

    /// Grouping arrays.
    #[must_use]
    pub fn keys(&self) -> &[KeyArray] {
        &self.keys
    }

    /// Value arrays.
    #[must_use]
    pub fn values(&self) -> &[Vec<f32>] {
        &self.values
    }

    /// Layout options the facet was built with.
    #[must_use]
    pub fn options(&self) -> &FacetOptions {
        &self.options
    }

    /// Grid position of a level combination.
    #[must_use]
    pub fn cell_of(&self, key: &FacetKey) -> Option<CellIndex> {
        locate(self.shape(), &self.index, key)
    }

    /// Title for a level combination.
    ///
    /// # Errors
    ///
    /// [`Error::MissingLabel`] if the labeler has no entry for `key`.
    pub fn label(&self, key: &FacetKey) -> Result<String> {
        self.labeler.label(key)
    }

    /// Every level combination, empty ones included, in sorted order.
    #[must_use]
    pub fn groups(&self) -> &[FacetGroup] {
        &self.groups
    }

    /// Data subsets of every facet, for custom plotting.
    #[must_use]
    pub fn items(&self) -> Vec<FacetItem> {
        self.groups
            .iter()
            .map(|group| FacetItem {
                key: group.key.clone(),
                label: group.label.clone(),
                cell: group.cell,
                data: subset(&self.values, &group.indices),
            })
            .collect()
    }

    /// Run `f` on every facet's axes with that facet's data, then title the cell.
    pub fn each<F>(&mut self, mut f: F) -> Result<&mut Figure>
    where
        F: FnMut(&FacetItem, &mut Axes) -> Result<()>,
    {
        for item in self.items() {
            if let Some(axes) = self.figure.axes_mut(item.cell) {
                f(&item, axes)?;
                axes.set_title(item.label.as_str());
            }
        }
        Ok(&mut self.figure)
    }

    /// Histogram each facet's values.
    pub fn hist(&mut self, options: &HistOptions) -> Result<&mut Figure> {
        self.draw(&PlotOptions::Hist(options.clone()))
    }

    /// Scatter `values[1]` against `values[0]` in each facet.
    pub fn scatter(&mut self, options: &ScatterOptions) -> Result<&mut Figure> {
        self.draw(&PlotOptions::Scatter(options.clone()))
    }

    /// Line plot of each facet's values.
    pub fn plot(&mut self, options: &LineOptions) -> Result<&mut Figure> {
        self.draw(&PlotOptions::Line(options.clone()))
    }

    /// Bar chart of `values[1]` at `values[0]` in each facet.
    pub fn bar(&mut self, options: &BarOptions) -> Result<&mut Figure> {
        self.draw(&PlotOptions::Bar(options.clone()))
    }

    /// Draw with a primitive chosen by name and keyword options.
    ///
    /// ```
    /// use trueno_facet::prelude::*;
    ///
    /// let mut facet = Facet::new([1, 1, 2, 2], [0.5, 1.5, 2.5, 3.5]).unwrap();
    /// facet.dispatch("hist", &Kwargs::new().set("bins", 4)).unwrap();
    /// assert!(facet.dispatch("pie", &Kwargs::new()).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::UnknownMethod`], [`Error::InvalidArgument`],
    /// [`Error::InvalidValue`] or [`Error::Arity`]. Nothing is drawn on error.
    pub fn dispatch(&mut self, name: &str, kwargs: &Kwargs) -> Result<&mut Figure> {
        let primitive: Primitive = name.parse()?;
        let options = PlotOptions::from_kwargs(primitive, kwargs)?;
        self.draw(&options)
    }

    fn draw(&mut self, options: &PlotOptions) -> Result<&mut Figure> {
        let primitive = options.primitive();
        primitive.check_arity(self.values.len())?;

        let span = debug_span!("dispatch", %primitive, cells = self.groups.len());
        let _enter = span.enter();

        for (i, values) in self.values.iter().enumerate() {
            if extent(values).is_none() {
                warn!(
                    array = i,
                    "value array has no finite values, autoscaling falls back to [0, 1]"
                );
            }
        }

        let options = match options {
            PlotOptions::Hist(hist) => {
                let all: Vec<&[f32]> = self.values.iter().map(Vec::as_slice).collect();
                PlotOptions::Hist(hist.resolved(&all))
            }
            other => other.clone(),
        };

        for group in &self.groups {
            let data = subset(&self.values, &group.indices);
            let slices: Vec<&[f32]> = data.iter().map(Vec::as_slice).collect();
            trace!(key = %group.key, rows = group.indices.len(), "drawing facet");
            if let Some(axes) = self.figure.axes_mut(group.cell) {
                options.draw(axes, &slices)?;
                axes.set_title(group.label.as_str());
            }
        }
        Ok(&mut self.figure)
    }

    /// Remove everything drawn, keeping the grid and titles.
    pub fn clear(&mut self) {
        self.figure.clear();
    }

    /// The figure.
    #[must_use]
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// The figure, mutably.
    pub fn figure_mut(&mut self) -> &mut Figure {
        &mut self.figure
    }

    /// Take the figure.
    #[must_use]
    pub fn into_figure(self) -> Figure {
        self.figure
    }
}

fn subset(values: &[Vec<f32>], indices: &[usize]) -> Vec<Vec<f32>> {
    values
        .iter()
        .map(|v| indices.iter().filter_map(|&i| v.get(i).copied()).collect())
        .collect()
}
