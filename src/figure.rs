//! A grid of axes with shared limits and raster/vector output.

use std::path::Path;

use trueno_viz::color::Rgba;
use trueno_viz::framebuffer::Framebuffer;
use trueno_viz::output::{PngEncoder, SvgEncoder, TerminalEncoder, TextAnchor};
use trueno_viz::render::{draw_line_aa, draw_point, draw_rect_outline};
use trueno_viz::scale::{LinearScale, Scale};

use crate::axes::{Artist, Axes};
use crate::bounds::{pad_range, union_range, Bounds};
use crate::color::INK;
use crate::error::{Error, Result};
use crate::layout::{tick_label_visibility, CellIndex, GridShape, ShareAxes};

// Cell padding around the plot area, in pixels.
const PAD_LEFT: f32 = 44.0;
const PAD_RIGHT: f32 = 12.0;
const PAD_TOP: f32 = 26.0;
const PAD_BOTTOM: f32 = 24.0;

// Room for figure-level axis labels.
const FIGURE_LABEL_PAD: u32 = 24;

const TITLE_SIZE: f32 = 12.0;
const TICK_SIZE: f32 = 9.0;
const LABEL_SIZE: f32 = 13.0;

/// Pixel rectangle a cell's data is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl PlotArea {
    fn right(&self) -> f32 {
        self.left + self.width
    }

    fn bottom(&self) -> f32 {
        self.top + self.height
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Intersect a pixel rectangle with the area.
    fn clip_rect(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> Option<(f32, f32, f32, f32)> {
        let (l, t) = (x0.max(self.left), y0.max(self.top));
        let (r, b) = (x1.min(self.right()), y1.min(self.bottom()));
        (r > l && b > t).then_some((l, t, r, b))
    }

    /// Liang-Barsky clipping of a segment against the area.
    fn clip_segment(&self, (x0, y0): (f32, f32), (x1, y1): (f32, f32)) -> Option<[f32; 4]> {
        let (dx, dy) = (x1 - x0, y1 - y0);
        let (mut t0, mut t1) = (0.0f32, 1.0f32);
        let edges = [
            (-dx, x0 - self.left),
            (dx, self.right() - x0),
            (-dy, y0 - self.top),
            (dy, self.bottom() - y0),
        ];
        for (p, q) in edges {
            if p.abs() < f32::EPSILON {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
        Some([x0 + t0 * dx, y0 + t0 * dy, x0 + t1 * dx, y0 + t1 * dy])
    }
}

/// Data-to-pixel mapping for one axis.
///
/// Values are normalized to `[0, 1]` over the view limits before the backend
/// scale maps them to pixels, so limits spanning less than `f32::EPSILON`
/// still map.
#[derive(Debug, Clone)]
struct AxisScale {
    lo: f32,
    span: f32,
    pixels: LinearScale,
}

impl AxisScale {
    fn new((lo, hi): (f32, f32), range: (f32, f32)) -> Result<Self> {
        let span = hi - lo;
        if span == 0.0 || !span.is_finite() {
            return Err(Error::Render(trueno_viz::Error::ScaleDomain(format!(
                "cannot map limits ({lo}, {hi})"
            ))));
        }
        Ok(Self {
            lo,
            span,
            pixels: LinearScale::new((0.0, 1.0), range)?,
        })
    }

    fn scale(&self, value: f32) -> f32 {
        self.pixels.scale((value - self.lo) / self.span)
    }
}

/// A grid of [`Axes`].
///
/// Cells are stored row-major. Slots past the number of facets stay `None`
/// and are neither drawn nor counted when sharing limits.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    shape: GridShape,
    cells: Vec<Option<Axes>>,
    share_x: ShareAxes,
    share_y: ShareAxes,
    margin: f32,
    cell_width: u32,
    cell_height: u32,
    xlabel: Option<String>,
    ylabel: Option<String>,
}

impl Figure {
    /// Create a grid holding `count` axes (at most `nrows * ncols`).
    #[must_use]
    pub fn subplots(
        shape: GridShape,
        count: usize,
        share_x: ShareAxes,
        share_y: ShareAxes,
    ) -> Self {
        let count = count.min(shape.len());
        let cells = (0..shape.len())
            .map(|i| (i < count).then(Axes::new))
            .collect();
        Self {
            shape,
            cells,
            share_x,
            share_y,
            margin: 0.05,
            cell_width: 320,
            cell_height: 240,
            xlabel: None,
            ylabel: None,
        }
    }

    /// Set the size of each cell in pixels.
    #[must_use]
    pub fn cell_size(mut self, width: u32, height: u32) -> Self {
        self.cell_width = width.max(1);
        self.cell_height = height.max(1);
        self
    }

    /// Set the fraction of the data range added on each side of autoscaled limits.
    #[must_use]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Grid shape.
    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of axes (occupied slots).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True if the grid holds no axes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// X axis sharing.
    #[must_use]
    pub fn share_x(&self) -> ShareAxes {
        self.share_x
    }

    /// Y axis sharing.
    #[must_use]
    pub fn share_y(&self) -> ShareAxes {
        self.share_y
    }

    /// Axes at `cell`, if that slot is occupied.
    #[must_use]
    pub fn axes(&self, cell: CellIndex) -> Option<&Axes> {
        self.slot(cell).and_then(Option::as_ref)
    }

    /// Mutable axes at `cell`, if that slot is occupied.
    pub fn axes_mut(&mut self, cell: CellIndex) -> Option<&mut Axes> {
        if cell.row >= self.shape.nrows || cell.col >= self.shape.ncols {
            return None;
        }
        let index = self.shape.index(cell);
        self.cells.get_mut(index).and_then(Option::as_mut)
    }

    fn slot(&self, cell: CellIndex) -> Option<&Option<Axes>> {
        if cell.row >= self.shape.nrows || cell.col >= self.shape.ncols {
            return None;
        }
        self.cells.get(self.shape.index(cell))
    }

    /// Occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &Axes)> {
        let shape = self.shape;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.as_ref().map(|a| (shape.cell(i), a)))
    }

    /// Mutable occupied cells in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CellIndex, &mut Axes)> {
        let shape = self.shape;
        self.cells
            .iter_mut()
            .enumerate()
            .filter_map(move |(i, c)| c.as_mut().map(|a| (shape.cell(i), a)))
    }

    /// Figure-level x label.
    #[must_use]
    pub fn xlabel(&self) -> Option<&str> {
        self.xlabel.as_deref()
    }

    /// Set the figure-level x label, drawn once below the grid.
    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.xlabel = Some(label.into());
    }

    /// Figure-level y label.
    #[must_use]
    pub fn ylabel(&self) -> Option<&str> {
        self.ylabel.as_deref()
    }

    /// Set the figure-level y label, drawn once left of the grid.
    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.ylabel = Some(label.into());
    }

    /// Pin the x limits of every cell.
    pub fn set_xlim(&mut self, lo: f32, hi: f32) {
        for (_, axes) in self.iter_mut() {
            axes.set_xlim(lo, hi);
        }
    }

    /// Pin the y limits of every cell.
    pub fn set_ylim(&mut self, lo: f32, hi: f32) {
        for (_, axes) in self.iter_mut() {
            axes.set_ylim(lo, hi);
        }
    }

    /// Remove every artist from every cell.
    pub fn clear(&mut self) {
        for (_, axes) in self.iter_mut() {
            axes.clear();
        }
    }

    /// View limits of `cell`.
    ///
    /// Each axis resolves over the cell's share group: an explicit limit on
    /// any member wins, otherwise the union of the members' data, padded by
    /// the margin. With no data the range is `[0, 1]`.
    #[must_use]
    pub fn limits(&self, cell: CellIndex) -> Bounds {
        let index = self.shape.index(cell);
        let x = self.axis_limits(index, self.share_x, Axes::xlim, |b| b.x);
        let y = self.axis_limits(index, self.share_y, Axes::ylim, |b| b.y);
        Bounds::new(x, y)
    }

    fn axis_limits(
        &self,
        index: usize,
        share: ShareAxes,
        explicit: impl Fn(&Axes) -> Option<(f32, f32)>,
        pick: impl Fn(Bounds) -> (f32, f32),
    ) -> (f32, f32) {
        let shape = self.shape;
        let leader = share.leader(shape, index);
        let group = || {
            self.cells
                .iter()
                .enumerate()
                .filter(move |(i, _)| share.leader(shape, *i) == leader)
                .filter_map(|(_, c)| c.as_ref())
        };

        if let Some(lim) = group().find_map(&explicit) {
            return lim;
        }
        group()
            .filter_map(Axes::data_bounds)
            .fold(None, |acc, b| union_range(acc, Some(pick(b))))
            .map_or((0.0, 1.0), |range| pad_range(range, self.margin))
    }

    /// Whether `cell` draws its (x, y) tick labels.
    #[must_use]
    pub fn tick_labels(&self, cell: CellIndex) -> (bool, bool) {
        tick_label_visibility(
            self.shape,
            self.shape.index(cell),
            self.share_x,
            self.share_y,
            |i| self.cells.get(i).is_some_and(Option::is_some),
        )
    }

    /// Output width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.origin().0 + self.shape.ncols as u32 * self.cell_width
    }

    /// Output height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        let label = if self.xlabel.is_some() { FIGURE_LABEL_PAD } else { 0 };
        self.shape.nrows as u32 * self.cell_height + label
    }

    fn origin(&self) -> (u32, u32) {
        let left = if self.ylabel.is_some() { FIGURE_LABEL_PAD } else { 0 };
        (left, 0)
    }

    fn plot_area(&self, cell: CellIndex) -> PlotArea {
        let (cw, ch) = (self.cell_width as f32, self.cell_height as f32);
        let (ox, oy) = self.origin();
        let x0 = ox as f32 + cell.col as f32 * cw;
        let y0 = oy as f32 + cell.row as f32 * ch;

        let (left, right) = (PAD_LEFT.min(cw * 0.25), PAD_RIGHT.min(cw * 0.1));
        let (top, bottom) = (PAD_TOP.min(ch * 0.2), PAD_BOTTOM.min(ch * 0.2));
        PlotArea {
            left: x0 + left,
            top: y0 + top,
            width: (cw - left - right).max(1.0),
            height: (ch - top - bottom).max(1.0),
        }
    }

    fn scales(&self, cell: CellIndex, area: &PlotArea) -> Result<(AxisScale, AxisScale)> {
        let bounds = self.limits(cell);
        let x = AxisScale::new(bounds.x, (area.left, area.right()))?;
        let y = AxisScale::new(bounds.y, (area.bottom(), area.top))?;
        Ok((x, y))
    }

    /// Rasterize the grid.
    ///
    /// Frames and artists only; the raster backend has no glyphs, so titles
    /// and tick labels appear in [`Figure::to_svg`] output alone.
    pub fn render(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width(), self.height())?;
        fb.clear(Rgba::WHITE);

        for (cell, axes) in self.iter() {
            let area = self.plot_area(cell);
            let (xs, ys) = self.scales(cell, &area)?;
            for artist in axes.artists() {
                raster_artist(&mut fb, artist, &area, &xs, &ys);
            }
            draw_rect_outline(
                &mut fb,
                area.left.round() as i32,
                area.top.round() as i32,
                area.width.round() as u32 + 1,
                area.height.round() as u32 + 1,
                INK,
                1,
            );
        }
        Ok(fb)
    }

    /// Draw the grid as SVG, with titles, tick labels and figure labels.
    pub fn to_svg(&self) -> Result<SvgEncoder> {
        let mut svg = SvgEncoder::new(self.width(), self.height());

        for (cell, axes) in self.iter() {
            let area = self.plot_area(cell);
            let (xs, ys) = self.scales(cell, &area)?;
            for artist in axes.artists() {
                svg = vector_artist(svg, artist, &area, &xs, &ys);
            }
            svg = svg.rect_outlined(
                area.left,
                area.top,
                area.width,
                area.height,
                Rgba::TRANSPARENT,
                INK,
                1.0,
            );

            let (cx, cy) = (area.left + area.width / 2.0, area.top + area.height / 2.0);
            if let Some(title) = axes.title() {
                svg = svg.text_anchored(
                    cx,
                    area.top - 8.0,
                    title,
                    TITLE_SIZE,
                    INK,
                    TextAnchor::Middle,
                );
            }

            let bounds = self.limits(cell);
            let (show_x, show_y) = self.tick_labels(cell);
            let tick_y = area.bottom() + TICK_SIZE + 4.0;
            if show_x {
                svg = svg
                    .text_anchored(
                        area.left,
                        tick_y,
                        &format_tick(bounds.x.0),
                        TICK_SIZE,
                        INK,
                        TextAnchor::Start,
                    )
                    .text_anchored(
                        area.right(),
                        tick_y,
                        &format_tick(bounds.x.1),
                        TICK_SIZE,
                        INK,
                        TextAnchor::End,
                    );
            }
            if show_y {
                let x = area.left - 4.0;
                svg = svg
                    .text_anchored(
                        x,
                        area.bottom(),
                        &format_tick(bounds.y.0),
                        TICK_SIZE,
                        INK,
                        TextAnchor::End,
                    )
                    .text_anchored(
                        x,
                        area.top + TICK_SIZE,
                        &format_tick(bounds.y.1),
                        TICK_SIZE,
                        INK,
                        TextAnchor::End,
                    );
            }

            // Cell labels sit between the tick labels, clear of the min/max ticks.
            if let Some(label) = axes.xlabel() {
                svg = svg.text_anchored(cx, tick_y, label, TICK_SIZE, INK, TextAnchor::Middle);
            }
            if let Some(label) = axes.ylabel() {
                svg = svg.text_anchored(
                    area.left - 4.0,
                    cy,
                    label,
                    TICK_SIZE,
                    INK,
                    TextAnchor::End,
                );
            }
        }

        let (w, h) = (self.width() as f32, self.height() as f32);
        if let Some(label) = &self.xlabel {
            svg = svg.text_anchored(w / 2.0, h - 6.0, label, LABEL_SIZE, INK, TextAnchor::Middle);
        }
        if let Some(label) = &self.ylabel {
            svg = svg.text_anchored(4.0, h / 2.0, label, LABEL_SIZE, INK, TextAnchor::Start);
        }
        Ok(svg)
    }

    /// Write the raster as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let fb = self.render()?;
        PngEncoder::write_to_file(&fb, path)?;
        Ok(())
    }

    /// Write the vector drawing as SVG.
    pub fn save_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_svg()?.write_to_file(path)?;
        Ok(())
    }

    /// Render as Unicode half-block text, `width` characters wide.
    pub fn to_terminal(&self, width: u32) -> Result<String> {
        let fb = self.render()?;
        Ok(TerminalEncoder::new().width(width.max(1)).render(&fb))
    }
}

fn format_tick(v: f32) -> String {
    if (v - v.round()).abs() < 1e-4 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').to_string()
    }
}

fn raster_artist(
    fb: &mut Framebuffer,
    artist: &Artist,
    area: &PlotArea,
    xs: &AxisScale,
    ys: &AxisScale,
) {
    match artist {
        Artist::Bars { bars, color } => {
            let base = ys.scale(0.0);
            for bar in bars {
                let (x0, x1) = (xs.scale(bar.x), xs.scale(bar.x + bar.width));
                let top = ys.scale(bar.height);
                let clipped = area.clip_rect(x0.min(x1), top.min(base), x0.max(x1), top.max(base));
                if let Some((l, t, r, b)) = clipped {
                    fill_rect(fb, l, t, r, b, *color);
                }
            }
        }
        Artist::Markers { points, size, color } => {
            for &(x, y) in points {
                if !(x.is_finite() && y.is_finite()) {
                    continue;
                }
                let (px, py) = (xs.scale(x), ys.scale(y));
                if !area.contains(px, py) {
                    continue;
                }
                if color.a == u8::MAX {
                    draw_point(fb, px, py, *size, *color);
                } else {
                    blend_disc(fb, px, py, *size / 2.0, *color);
                }
            }
        }
        Artist::Polyline { points, width, color } => {
            let strokes = width.round().max(1.0) as i32;
            for pair in points.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if !(a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite()) {
                    continue;
                }
                let from = (xs.scale(a.0), ys.scale(a.1));
                let to = (xs.scale(b.0), ys.scale(b.1));
                let Some([x0, y0, x1, y1]) = area.clip_segment(from, to) else {
                    continue;
                };
                let steep = (y1 - y0).abs() > (x1 - x0).abs();
                for k in 0..strokes {
                    let off = k as f32 - (strokes - 1) as f32 / 2.0;
                    if steep {
                        draw_line_aa(fb, x0 + off, y0, x1 + off, y1, *color);
                    } else {
                        draw_line_aa(fb, x0, y0 + off, x1, y1 + off, *color);
                    }
                }
            }
        }
    }
}

fn fill_rect(fb: &mut Framebuffer, l: f32, t: f32, r: f32, b: f32, color: Rgba) {
    let (x, y) = (l.round() as u32, t.round() as u32);
    let w = (r.round() as u32).saturating_sub(x);
    let h = (b.round() as u32).saturating_sub(y);
    if color.a == u8::MAX {
        fb.fill_rect(x, y, w, h, color);
        return;
    }
    for py in y..y + h {
        for px in x..x + w {
            fb.blend_pixel(px, py, color);
        }
    }
}

fn blend_disc(fb: &mut Framebuffer, cx: f32, cy: f32, radius: f32, color: Rgba) {
    let r = radius.max(0.5);
    let (x0, x1) = ((cx - r).floor().max(0.0) as u32, (cx + r).ceil().max(0.0) as u32);
    let (y0, y1) = ((cy - r).floor().max(0.0) as u32, (cy + r).ceil().max(0.0) as u32);
    for py in y0..=y1 {
        for px in x0..=x1 {
            let (dx, dy) = (px as f32 - cx, py as f32 - cy);
            if dx * dx + dy * dy <= r * r {
                fb.blend_pixel(px, py, color);
            }
        }
    }
}

fn vector_artist(
    mut svg: SvgEncoder,
    artist: &Artist,
    area: &PlotArea,
    xs: &AxisScale,
    ys: &AxisScale,
) -> SvgEncoder {
    match artist {
        Artist::Bars { bars, color } => {
            let base = ys.scale(0.0);
            for bar in bars {
                let (x0, x1) = (xs.scale(bar.x), xs.scale(bar.x + bar.width));
                let top = ys.scale(bar.height);
                let clipped = area.clip_rect(x0.min(x1), top.min(base), x0.max(x1), top.max(base));
                if let Some((l, t, r, b)) = clipped {
                    svg = svg.rect(l, t, r - l, b - t, *color);
                }
            }
        }
        Artist::Markers { points, size, color } => {
            for &(x, y) in points {
                let (px, py) = (xs.scale(x), ys.scale(y));
                if x.is_finite() && y.is_finite() && area.contains(px, py) {
                    svg = svg.circle(px, py, size / 2.0, *color);
                }
            }
        }
        Artist::Polyline { points, width, color } => {
            for pair in points.windows(2) {
                let from = (xs.scale(pair[0].0), ys.scale(pair[0].1));
                let to = (xs.scale(pair[1].0), ys.scale(pair[1].1));
                let finite = from.0.is_finite() && from.1.is_finite();
                if !(finite && to.0.is_finite() && to.1.is_finite()) {
                    continue;
                }
                if let Some([x0, y0, x1, y1]) = area.clip_segment(from, to) {
                    svg = svg.line(x0, y0, x1, y1, *color, *width);
                }
            }
        }
    }
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axes::Bar;
    use approx::assert_relative_eq;

    fn markers(points: Vec<(f32, f32)>) -> Artist {
        Artist::Markers {
            points,
            size: 4.0,
            color: Rgba::BLUE,
        }
    }

    fn two_by_two(share: ShareAxes) -> Figure {
        let mut fig = Figure::subplots(GridShape::new(2, 2), 4, share, share).margin(0.0);
        fig.axes_mut(CellIndex::new(0, 0))
            .unwrap()
            .add_artist(markers(vec![(0.0, 0.0), (1.0, 1.0)]));
        fig.axes_mut(CellIndex::new(1, 1))
            .unwrap()
            .add_artist(markers(vec![(5.0, -2.0), (10.0, 3.0)]));
        fig
    }

    #[test]
    fn test_subplots_leaves_trailing_slots_empty() {
        let fig = Figure::subplots(GridShape::new(2, 2), 3, ShareAxes::All, ShareAxes::All);
        assert_eq!(fig.len(), 3);
        assert!(fig.axes(CellIndex::new(1, 0)).is_some());
        assert!(fig.axes(CellIndex::new(1, 1)).is_none());
        assert!(fig.axes(CellIndex::new(5, 0)).is_none());
    }

    #[test]
    fn test_shared_limits_cover_all_cells() {
        let fig = two_by_two(ShareAxes::All);
        let expected = Bounds::new((0.0, 10.0), (-2.0, 3.0));
        for (cell, _) in fig.iter() {
            assert_eq!(fig.limits(cell), expected);
        }
    }

    #[test]
    fn test_row_sharing() {
        let fig = two_by_two(ShareAxes::Row);
        assert_eq!(fig.limits(CellIndex::new(0, 1)), Bounds::new((0.0, 1.0), (0.0, 1.0)));
        assert_eq!(fig.limits(CellIndex::new(1, 0)), Bounds::new((5.0, 10.0), (-2.0, 3.0)));
    }

    #[test]
    fn test_unshared_empty_cell_defaults() {
        let fig = two_by_two(ShareAxes::None);
        assert_eq!(fig.limits(CellIndex::new(0, 1)), Bounds::default());
    }

    #[test]
    fn test_margin_pads() {
        let fig = two_by_two(ShareAxes::All).margin(0.1);
        let b = fig.limits(CellIndex::new(0, 0));
        assert_relative_eq!(b.x.0, -1.0);
        assert_relative_eq!(b.x.1, 11.0);
    }

    #[test]
    fn test_explicit_limits_win() {
        let mut fig = two_by_two(ShareAxes::All);
        fig.set_xlim(-5.0, 5.0);
        assert_eq!(fig.limits(CellIndex::new(1, 0)).x, (-5.0, 5.0));
        assert_eq!(fig.limits(CellIndex::new(1, 0)).y, (-2.0, 3.0));
    }

    #[test]
    fn test_tick_labels() {
        let fig = Figure::subplots(GridShape::new(2, 2), 3, ShareAxes::All, ShareAxes::All);
        assert_eq!(fig.tick_labels(CellIndex::new(0, 0)), (false, true));
        // Nothing below (0, 1) since slot (1, 1) is empty.
        assert_eq!(fig.tick_labels(CellIndex::new(0, 1)), (true, false));
        assert_eq!(fig.tick_labels(CellIndex::new(1, 0)), (true, true));

        let fig = Figure::subplots(GridShape::new(2, 2), 4, ShareAxes::None, ShareAxes::None);
        assert_eq!(fig.tick_labels(CellIndex::new(0, 1)), (true, true));
    }

    #[test]
    fn test_render_dimensions() {
        let mut fig = Figure::subplots(GridShape::new(1, 3), 3, ShareAxes::All, ShareAxes::All)
            .cell_size(100, 80);
        let fb = fig.render().unwrap();
        assert_eq!((fb.width(), fb.height()), (300, 80));

        fig.set_xlabel("height");
        fig.set_ylabel("count");
        assert_eq!((fig.width(), fig.height()), (300 + FIGURE_LABEL_PAD, 80 + FIGURE_LABEL_PAD));
    }

    #[test]
    fn test_render_fills_bars() {
        let mut fig = Figure::subplots(GridShape::new(1, 1), 1, ShareAxes::All, ShareAxes::All);
        let axes = fig.axes_mut(CellIndex::new(0, 0)).unwrap();
        axes.add_artist(Artist::Bars {
            bars: vec![Bar { x: 0.0, width: 1.0, height: 1.0 }],
            color: Rgba::RED,
        });
        let fb = fig.render().unwrap();
        let area = fig.plot_area(CellIndex::new(0, 0));
        let center = (area.left + area.width / 2.0, area.top + area.height / 2.0);
        assert_eq!(fb.get_pixel(center.0 as u32, center.1 as u32), Some(Rgba::RED));
    }

    #[test]
    fn test_svg_has_titles_and_labels() {
        let mut fig = two_by_two(ShareAxes::All);
        fig.axes_mut(CellIndex::new(0, 0)).unwrap().set_title("Female");
        fig.set_xlabel("height");
        let svg = fig.to_svg().unwrap().render();
        assert!(svg.contains("Female"));
        assert!(svg.contains("height"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn test_svg_draws_cell_axis_labels() {
        let mut fig = two_by_two(ShareAxes::All);
        let axes = fig.axes_mut(CellIndex::new(1, 0)).unwrap();
        axes.set_xlabel("weight (kg)");
        axes.set_ylabel("count");
        let svg = fig.to_svg().unwrap().render();
        assert!(svg.contains(">weight (kg)<"));
        assert!(svg.contains(">count<"));
    }

    #[test]
    fn test_tiny_span_limits_render() {
        let mut fig = Figure::subplots(GridShape::new(1, 2), 2, ShareAxes::All, ShareAxes::All);
        fig.axes_mut(CellIndex::new(0, 0))
            .unwrap()
            .add_artist(markers(vec![(3.0e-7, 0.0), (3.2e-7, 1.0)]));
        fig.axes_mut(CellIndex::new(0, 1))
            .unwrap()
            .add_artist(markers(vec![(3.4e-7, 0.0), (3.5e-7, 1.0)]));

        let x = fig.limits(CellIndex::new(0, 0)).x;
        assert!(x.0 < 3.0e-7 && x.1 > 3.5e-7);
        assert!(x.1 - x.0 < 1e-6);

        assert!(fig.render().is_ok());
        assert!(fig.to_svg().is_ok());
    }

    #[test]
    fn test_axis_scale_normalizes_domain() {
        let scale = AxisScale::new((3.0e-7, 3.5e-7), (0.0, 100.0)).unwrap();
        assert_relative_eq!(scale.scale(3.0e-7), 0.0, epsilon = 1e-3);
        assert_relative_eq!(scale.scale(3.25e-7), 50.0, epsilon = 1e-2);
        assert_relative_eq!(scale.scale(3.5e-7), 100.0, epsilon = 1e-2);
    }

    #[test]
    fn test_equal_explicit_limits_error() {
        let mut fig = two_by_two(ShareAxes::All);
        fig.set_xlim(2.0, 2.0);
        assert!(matches!(fig.render(), Err(Error::Render(_))));
    }

    #[test]
    fn test_clip_segment() {
        let area = PlotArea {
            left: 0.0,
            top: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert_eq!(area.clip_segment((-5.0, 5.0), (5.0, 5.0)), Some([0.0, 5.0, 5.0, 5.0]));
        assert_eq!(area.clip_segment((-5.0, -5.0), (-1.0, -1.0)), None);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(3.0), "3");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(-0.25), "-0.25");
        assert_eq!(format_tick(0.1), "0.1");
    }

    #[test]
    fn test_terminal_output() {
        let fig = two_by_two(ShareAxes::All);
        let text = fig.to_terminal(40).unwrap();
        assert!(!text.is_empty());
    }
}
