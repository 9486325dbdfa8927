//! Bar primitive.

use trueno_viz::color::Rgba;

use crate::axes::{Artist, Axes, Bar};
use crate::error::Result;
use crate::kwargs::Kwargs;

use super::{apply_alpha, check_pair, Primitive};

/// Bar chart options.
#[derive(Debug, Clone, PartialEq)]
pub struct BarOptions {
    color: Option<Rgba>,
    width: f32,
    alpha: f32,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl BarOptions {
    /// Default options: bars 0.8 data units wide in the next cycle color.
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: None,
            width: 0.8,
            alpha: 1.0,
        }
    }

    /// Set the fill color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the bar width in data units.
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

    /// Parse keyword options: `color`, `width`, `alpha`.
    pub fn from_kwargs(kwargs: &Kwargs) -> Result<Self> {
        let mut r = kwargs.reader(Primitive::Bar.name());
        let mut opts = Self::new();
        opts.color = r.take_color(&["color"])?;
        if let Some(width) = r.take_f32(&["width"])? {
            opts.width = width;
        }
        if let Some(alpha) = r.take_alpha(&["alpha"])? {
            opts.alpha = alpha;
        }
        r.finish()?;
        Ok(opts)
    }
}

/// Draw bars of `data[1]` centred on `data[0]`.
pub fn draw(axes: &mut Axes, data: &[&[f32]], options: &BarOptions) -> Result<()> {
    Primitive::Bar.check_arity(data.len())?;
    let (x, heights) = (data[0], data[1]);
    check_pair(x, heights)?;

    let half = options.width / 2.0;
    let bars = x
        .iter()
        .zip(heights)
        .filter(|(x, h)| x.is_finite() && h.is_finite())
        .map(|(&x, &height)| Bar {
            x: x - half,
            width: options.width,
            height,
        })
        .collect();

    let color = options.color.unwrap_or_else(|| axes.next_color());
    axes.add_artist(Artist::Bars {
        bars,
        color: apply_alpha(color, options.alpha),
    });
    Ok(())
}
