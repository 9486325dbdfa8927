//! A single grid cell.
//!
//! An [`Axes`] records what was drawn into it as a list of [`Artist`]s. The
//! drawing itself happens when the owning figure is rendered, once the shared
//! axis limits of every cell are known.

use trueno_viz::color::Rgba;

use crate::bounds::{extent, union_range, Bounds};
use crate::color::cycle;
use crate::error::Result;
use crate::primitives::{bar, hist, line, scatter};

/// One rectangle of a bar-like artist, in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Left edge.
    pub x: f32,
    /// Width.
    pub width: f32,
    /// Height above the baseline.
    pub height: f32,
}

/// Something drawn into an axes.
#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    /// Filled rectangles standing on `y = 0` (histograms, bar charts).
    Bars {
        /// Rectangles.
        bars: Vec<Bar>,
        /// Fill color (alpha included).
        color: Rgba,
    },
    /// Filled circular markers.
    Markers {
        /// Marker centers.
        points: Vec<(f32, f32)>,
        /// Diameter in pixels.
        size: f32,
        /// Fill color (alpha included).
        color: Rgba,
    },
    /// Connected line segments.
    Polyline {
        /// Vertices, in draw order.
        points: Vec<(f32, f32)>,
        /// Stroke width in pixels.
        width: f32,
        /// Stroke color (alpha included).
        color: Rgba,
    },
}

impl Artist {
    /// Data extent of the artist, if it covers any finite data.
    #[must_use]
    pub fn data_bounds(&self) -> Option<Bounds> {
        match self {
            Artist::Bars { bars, .. } => {
                let x = bars.iter().fold(None, |acc, b| {
                    union_range(acc, Some((b.x.min(b.x + b.width), b.x.max(b.x + b.width))))
                })?;
                let heights: Vec<f32> = bars.iter().map(|b| b.height).collect();
                let y = union_range(Some((0.0, 0.0)), extent(&heights))?;
                Some(Bounds::new(x, y))
            }
            Artist::Markers { points, .. } | Artist::Polyline { points, .. } => {
                let finite: Vec<(f32, f32)> = points
                    .iter()
                    .copied()
                    .filter(|(x, y)| x.is_finite() && y.is_finite())
                    .collect();
                let xs: Vec<f32> = finite.iter().map(|p| p.0).collect();
                let ys: Vec<f32> = finite.iter().map(|p| p.1).collect();
                Some(Bounds::new(extent(&xs)?, extent(&ys)?))
            }
        }
    }

    /// Color of the artist.
    #[must_use]
    pub fn color(&self) -> Rgba {
        match self {
            Artist::Bars { color, .. }
            | Artist::Markers { color, .. }
            | Artist::Polyline { color, .. } => *color,
        }
    }
}

/// One cell of a figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes {
    title: Option<String>,
    xlabel: Option<String>,
    ylabel: Option<String>,
    xlim: Option<(f32, f32)>,
    ylim: Option<(f32, f32)>,
    artists: Vec<Artist>,
}

impl Axes {
    /// Create an empty axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Title shown above the cell.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// X axis label.
    #[must_use]
    pub fn xlabel(&self) -> Option<&str> {
        self.xlabel.as_deref()
    }

    /// Set the x axis label.
    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.xlabel = Some(label.into());
    }

    /// Y axis label.
    #[must_use]
    pub fn ylabel(&self) -> Option<&str> {
        self.ylabel.as_deref()
    }

    /// Set the y axis label.
    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.ylabel = Some(label.into());
    }

    /// Explicit x limits, if set.
    #[must_use]
    pub fn xlim(&self) -> Option<(f32, f32)> {
        self.xlim
    }

    /// Pin the x limits. Shared axes propagate this to their whole group.
    pub fn set_xlim(&mut self, lo: f32, hi: f32) {
        self.xlim = Some((lo, hi));
    }

    /// Explicit y limits, if set.
    #[must_use]
    pub fn ylim(&self) -> Option<(f32, f32)> {
        self.ylim
    }

    /// Pin the y limits. Shared axes propagate this to their whole group.
    pub fn set_ylim(&mut self, lo: f32, hi: f32) {
        self.ylim = Some((lo, hi));
    }

    /// Everything drawn so far, oldest first.
    #[must_use]
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Add an artist.
    pub fn add_artist(&mut self, artist: Artist) {
        self.artists.push(artist);
    }

    /// True if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Remove every artist. Title, labels and limits are kept.
    pub fn clear(&mut self) {
        self.artists.clear();
    }

    /// Default color for the next artist.
    #[must_use]
    pub fn next_color(&self) -> Rgba {
        cycle(self.artists.len())
    }

    /// Union of the artists' data extents.
    #[must_use]
    pub fn data_bounds(&self) -> Option<Bounds> {
        self.artists
            .iter()
            .filter_map(Artist::data_bounds)
            .reduce(Bounds::union)
    }

    /// Draw a histogram of each array in `data`.
    pub fn hist(&mut self, data: &[&[f32]], options: &hist::HistOptions) -> Result<()> {
        hist::draw(self, data, options)
    }

    /// Draw `y` against `x` as markers.
    pub fn scatter(
        &mut self,
        x: &[f32],
        y: &[f32],
        options: &scatter::ScatterOptions,
    ) -> Result<()> {
        scatter::draw(self, &[x, y], options)
    }

    /// Draw `y` against `x` as a line.
    pub fn plot(&mut self, x: &[f32], y: &[f32], options: &line::LineOptions) -> Result<()> {
        line::draw(self, &[x, y], options)
    }

    /// Draw bars of `heights` centred on `x`.
    pub fn bar(&mut self, x: &[f32], heights: &[f32], options: &bar::BarOptions) -> Result<()> {
        bar::draw(self, &[x, heights], options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_bounds_include_zero() {
        let artist = Artist::Bars {
            bars: vec![
                Bar { x: 0.0, width: 1.0, height: 3.0 },
                Bar { x: 1.0, width: 1.0, height: 5.0 },
            ],
            color: Rgba::RED,
        };
        assert_eq!(artist.data_bounds(), Some(Bounds::new((0.0, 2.0), (0.0, 5.0))));
    }

    #[test]
    fn test_empty_markers_have_no_bounds() {
        let artist = Artist::Markers {
            points: vec![],
            size: 3.0,
            color: Rgba::BLUE,
        };
        assert!(artist.data_bounds().is_none());
    }

    #[test]
    fn test_axes_bounds_union() {
        let mut axes = Axes::new();
        assert!(axes.data_bounds().is_none());
        axes.add_artist(Artist::Markers {
            points: vec![(1.0, 1.0), (2.0, 4.0)],
            size: 3.0,
            color: Rgba::BLUE,
        });
        axes.add_artist(Artist::Polyline {
            points: vec![(-1.0, 0.0), (0.0, f32::NAN), (0.5, 2.0)],
            width: 1.0,
            color: Rgba::RED,
        });
        assert_eq!(axes.data_bounds(), Some(Bounds::new((-1.0, 2.0), (0.0, 4.0))));
    }

    #[test]
    fn test_color_cycle_advances() {
        let mut axes = Axes::new();
        let first = axes.next_color();
        axes.add_artist(Artist::Markers {
            points: vec![],
            size: 1.0,
            color: first,
        });
        assert_ne!(axes.next_color(), first);
    }

    #[test]
    fn test_clear_keeps_title() {
        let mut axes = Axes::new();
        axes.set_title("Male");
        axes.add_artist(Artist::Bars {
            bars: vec![],
            color: Rgba::RED,
        });
        axes.clear();
        assert!(axes.is_empty());
        assert_eq!(axes.title(), Some("Male"));
    }
}
