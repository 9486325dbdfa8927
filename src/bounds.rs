//! Data extents and axis ranges.

use trueno::Vector;

/// Minimum and maximum of the finite values in `data`.
///
/// Returns `None` when there are no finite values. The reduction runs on
/// trueno's SIMD backend.
#[must_use]
pub fn extent(data: &[f32]) -> Option<(f32, f32)> {
    let finite: Vec<f32> = data.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    let v = Vector::from_slice(&finite);
    match (v.min(), v.max()) {
        (Ok(min), Ok(max)) => Some((min, max)),
        _ => {
            let min = finite.iter().copied().fold(f32::INFINITY, f32::min);
            let max = finite.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            Some((min, max))
        }
    }
}

/// Union of two optional ranges.
#[must_use]
pub fn union_range(a: Option<(f32, f32)>, b: Option<(f32, f32)>) -> Option<(f32, f32)> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a.0.min(b.0), a.1.max(b.1))),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Expand a range by `margin` of its span on each side.
///
/// A range holding a single value is widened by 5% of that value, or by 0.5
/// around zero. Small but non-zero spans are kept as they are.
#[must_use]
pub fn pad_range((lo, hi): (f32, f32), margin: f32) -> (f32, f32) {
    let span = hi - lo;
    if span.abs() <= f32::EPSILON * lo.abs().max(hi.abs()) {
        let half = lo.abs() * 0.05;
        let half = if half.is_normal() { half } else { 0.5 };
        return (lo - half, hi + half);
    }
    (lo - span * margin, hi + span * margin)
}

/// X and y extents of an axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// X range `(min, max)`.
    pub x: (f32, f32),
    /// Y range `(min, max)`.
    pub y: (f32, f32),
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x: (0.0, 1.0),
            y: (0.0, 1.0),
        }
    }
}

impl Bounds {
    /// Create bounds from x and y ranges.
    #[must_use]
    pub const fn new(x: (f32, f32), y: (f32, f32)) -> Self {
        Self { x, y }
    }

    /// Smallest bounds containing both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            x: (self.x.0.min(other.x.0), self.x.1.max(other.x.1)),
            y: (self.y.0.min(other.y.0), self.y.1.max(other.y.1)),
        }
    }
}
