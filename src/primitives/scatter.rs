//! Scatter primitive.

use trueno_viz::color::Rgba;

use crate::axes::{Artist, Axes};
use crate::error::Result;
use crate::kwargs::Kwargs;

use super::{apply_alpha, check_pair, Primitive};

/// Scatter options.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterOptions {
    color: Option<Rgba>,
    size: f32,
    alpha: f32,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterOptions {
    /// Default options: 6px markers in the next cycle color.
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: None,
            size: 6.0,
            alpha: 1.0,
        }
    }

    /// Set the marker color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the marker diameter in pixels.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(0.0);
        self
    }

    /// Set the alpha transparency (0.0 - 1.0).
    #[must_use]
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Parse keyword options: `color`, `s`/`size`, `alpha`.
    pub fn from_kwargs(kwargs: &Kwargs) -> Result<Self> {
        let mut r = kwargs.reader(Primitive::Scatter.name());
        let mut opts = Self::new();
        opts.color = r.take_color(&["color", "c"])?;
        if let Some(size) = r.take_f32(&["s", "size"])? {
            opts.size = size;
        }
        if let Some(alpha) = r.take_alpha(&["alpha"])? {
            opts.alpha = alpha;
        }
        r.finish()?;
        Ok(opts)
    }
}

/// Draw markers at `(data[0][i], data[1][i])`.
pub fn draw(axes: &mut Axes, data: &[&[f32]], options: &ScatterOptions) -> Result<()> {
    Primitive::Scatter.check_arity(data.len())?;
    let (x, y) = (data[0], data[1]);
    check_pair(x, y)?;

    let color = options.color.unwrap_or_else(|| axes.next_color());
    axes.add_artist(Artist::Markers {
        points: x.iter().copied().zip(y.iter().copied()).collect(),
        size: options.size,
        color: apply_alpha(color, options.alpha),
    });
    Ok(())
}
