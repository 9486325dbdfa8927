//! Plotting primitives a facet can dispatch to.
//!
//! Each primitive has a typed options struct with a strict `from_kwargs`
//! parser and a `draw` function that turns a data subset into artists on an
//! [`Axes`](crate::axes::Axes).

pub mod bar;
pub mod hist;
pub mod line;
pub mod scatter;

use std::fmt;
use std::str::FromStr;

use trueno_viz::color::Rgba;

use crate::axes::Axes;
use crate::error::{Error, Result};
use crate::kwargs::Kwargs;

pub use bar::BarOptions;
pub use hist::{BinStrategy, HistOptions, MAX_BINS};
pub use line::LineOptions;
pub use scatter::ScatterOptions;

/// The plotting primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Histogram of each value array.
    Hist,
    /// Markers at `(x, y)`.
    Scatter,
    /// Line through `(x, y)`, or `y` against its position.
    Line,
    /// Bars of `heights` centred on `x`.
    Bar,
}

impl Primitive {
    /// Method name, as accepted by [`Primitive::from_str`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Hist => "hist",
            Primitive::Scatter => "scatter",
            Primitive::Line => "plot",
            Primitive::Bar => "bar",
        }
    }

    /// Check how many value arrays the primitive is handed.
    pub fn check_arity(self, found: usize) -> Result<()> {
        let (ok, expected) = match self {
            Primitive::Hist => (found >= 1, "at least 1"),
            Primitive::Scatter | Primitive::Bar => (found == 2, "exactly 2"),
            Primitive::Line => ((1..=2).contains(&found), "1 or 2"),
        };
        if ok {
            Ok(())
        } else {
            Err(Error::Arity {
                primitive: self.name(),
                expected,
                found,
            })
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Primitive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hist" => Ok(Primitive::Hist),
            "scatter" => Ok(Primitive::Scatter),
            "plot" | "line" => Ok(Primitive::Line),
            "bar" => Ok(Primitive::Bar),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }
}

/// Options for one primitive, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotOptions {
    /// Histogram options.
    Hist(HistOptions),
    /// Scatter options.
    Scatter(ScatterOptions),
    /// Line options.
    Line(LineOptions),
    /// Bar options.
    Bar(BarOptions),
}

impl PlotOptions {
    /// Parse `kwargs` for `primitive`.
    pub fn from_kwargs(primitive: Primitive, kwargs: &Kwargs) -> Result<Self> {
        Ok(match primitive {
            Primitive::Hist => PlotOptions::Hist(HistOptions::from_kwargs(kwargs)?),
            Primitive::Scatter => PlotOptions::Scatter(ScatterOptions::from_kwargs(kwargs)?),
            Primitive::Line => PlotOptions::Line(LineOptions::from_kwargs(kwargs)?),
            Primitive::Bar => PlotOptions::Bar(BarOptions::from_kwargs(kwargs)?),
        })
    }

    /// Which primitive these options belong to.
    #[must_use]
    pub const fn primitive(&self) -> Primitive {
        match self {
            PlotOptions::Hist(_) => Primitive::Hist,
            PlotOptions::Scatter(_) => Primitive::Scatter,
            PlotOptions::Line(_) => Primitive::Line,
            PlotOptions::Bar(_) => Primitive::Bar,
        }
    }

    /// Draw `data` into `axes`.
    pub fn draw(&self, axes: &mut Axes, data: &[&[f32]]) -> Result<()> {
        match self {
            PlotOptions::Hist(o) => hist::draw(axes, data, o),
            PlotOptions::Scatter(o) => scatter::draw(axes, data, o),
            PlotOptions::Line(o) => line::draw(axes, data, o),
            PlotOptions::Bar(o) => bar::draw(axes, data, o),
        }
    }
}

impl From<HistOptions> for PlotOptions {
    fn from(o: HistOptions) -> Self {
        PlotOptions::Hist(o)
    }
}

impl From<ScatterOptions> for PlotOptions {
    fn from(o: ScatterOptions) -> Self {
        PlotOptions::Scatter(o)
    }
}

impl From<LineOptions> for PlotOptions {
    fn from(o: LineOptions) -> Self {
        PlotOptions::Line(o)
    }
}

impl From<BarOptions> for PlotOptions {
    fn from(o: BarOptions) -> Self {
        PlotOptions::Bar(o)
    }
}

/// Scale a color's own alpha by `alpha`.
pub(crate) fn apply_alpha(color: Rgba, alpha: f32) -> Rgba {
    let a = (f32::from(color.a) * alpha.clamp(0.0, 1.0)).round() as u8;
    color.with_alpha(a)
}

/// Check that `y` is as long as `x`.
pub(crate) fn check_pair(x: &[f32], y: &[f32]) -> Result<()> {
    if x.len() == y.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            array: "y".to_string(),
            expected: x.len(),
            found: y.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("hist".parse::<Primitive>().unwrap(), Primitive::Hist);
        assert_eq!("line".parse::<Primitive>().unwrap(), Primitive::Line);
        assert_eq!("plot".parse::<Primitive>().unwrap(), Primitive::Line);
        assert!(matches!(
            "pie".parse::<Primitive>(),
            Err(Error::UnknownMethod(ref m)) if m == "pie"
        ));
    }

    #[test]
    fn test_arity() {
        assert!(Primitive::Hist.check_arity(3).is_ok());
        assert!(Primitive::Hist.check_arity(0).is_err());
        assert!(Primitive::Scatter.check_arity(1).is_err());
        assert!(Primitive::Line.check_arity(1).is_ok());
        assert!(Primitive::Line.check_arity(3).is_err());
        assert!(matches!(
            Primitive::Bar.check_arity(3),
            Err(Error::Arity { primitive: "bar", found: 3, .. })
        ));
    }

    #[test]
    fn test_plot_options_round_trip_primitive() {
        for p in [Primitive::Hist, Primitive::Scatter, Primitive::Line, Primitive::Bar] {
            let opts = PlotOptions::from_kwargs(p, &Kwargs::new()).unwrap();
            assert_eq!(opts.primitive(), p);
        }
    }

    #[test]
    fn test_apply_alpha() {
        assert_eq!(apply_alpha(Rgba::RED, 0.5).a, 128);
        assert_eq!(apply_alpha(Rgba::new(0, 0, 0, 100), 1.0).a, 100);
    }
}
