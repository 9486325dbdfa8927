//! Line primitive.

use trueno_viz::color::Rgba;

use crate::axes::{Artist, Axes};
use crate::error::Result;
use crate::kwargs::Kwargs;

use super::{apply_alpha, check_pair, Primitive};

/// Line options.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOptions {
    color: Option<Rgba>,
    width: f32,
    alpha: f32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LineOptions {
    /// Default options: 1.5px stroke in the next cycle color.
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: None,
            width: 1.5,
            alpha: 1.0,
        }
    }

    /// Set the stroke color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the stroke width in pixels.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width.max(0.0);
        self
    }

    /// Set the alpha transparency (0.0 - 1.0).
    #[must_use]
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Parse keyword options: `color`, `linewidth`/`lw`, `alpha`.
    pub fn from_kwargs(kwargs: &Kwargs) -> Result<Self> {
        let mut r = kwargs.reader(Primitive::Line.name());
        let mut opts = Self::new();
        opts.color = r.take_color(&["color", "c"])?;
        if let Some(width) = r.take_f32(&["linewidth", "lw"])? {
            opts.width = width;
        }
        if let Some(alpha) = r.take_alpha(&["alpha"])? {
            opts.alpha = alpha;
        }
        r.finish()?;
        Ok(opts)
    }
}

/// Draw a line through the data.
///
/// With one array the values are drawn against their position in the subset.
pub fn draw(axes: &mut Axes, data: &[&[f32]], options: &LineOptions) -> Result<()> {
    Primitive::Line.check_arity(data.len())?;
    let points: Vec<(f32, f32)> = match data {
        [y] => y.iter().enumerate().map(|(i, &v)| (i as f32, v)).collect(),
        [x, y] => {
            check_pair(x, y)?;
            x.iter().copied().zip(y.iter().copied()).collect()
        }
        _ => Vec::new(),
    };

    let color = options.color.unwrap_or_else(|| axes.next_color());
    axes.add_artist(Artist::Polyline {
        points,
        width: options.width,
        color: apply_alpha(color, options.alpha),
    });
    Ok(())
}
