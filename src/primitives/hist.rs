//! Histogram primitive.
//!
//! Supports fixed bin counts, explicit edges, and automatic binning with the
//! Sturges, Scott and Freedman-Diaconis rules.

use trueno_viz::color::Rgba;

use crate::axes::{Artist, Axes, Bar};
use crate::bounds::{extent, union_range};
use crate::error::Result;
use crate::kwargs::{Kwargs, Value};

use super::{apply_alpha, Primitive};

/// Upper bound on the number of bins any strategy resolves to.
pub const MAX_BINS: usize = 10_000;

/// Binning strategy for histogram.
#[derive(Debug, Clone, PartialEq)]
pub enum BinStrategy {
    /// Sturges' rule: ceil(log2(n) + 1)
    Sturges,
    /// Scott's rule: 3.5 * std / n^(1/3)
    Scott,
    /// Freedman-Diaconis rule: 2 * IQR / n^(1/3)
    FreedmanDiaconis,
    /// Fixed number of equal-width bins
    Fixed(usize),
    /// Explicit, ascending bin edges
    Edges(Vec<f32>),
}

impl Default for BinStrategy {
    fn default() -> Self {
        BinStrategy::Fixed(10)
    }
}

/// Histogram options.
#[derive(Debug, Clone, PartialEq)]
pub struct HistOptions {
    bins: BinStrategy,
    range: Option<(f32, f32)>,
    density: bool,
    color: Option<Rgba>,
    alpha: f32,
}

impl Default for HistOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HistOptions {
    /// Default options: 10 bins over the data range, raw counts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bins: BinStrategy::default(),
            range: None,
            density: false,
            color: None,
            alpha: 1.0,
        }
    }

    /// Set the binning strategy.
    #[must_use]
    pub fn bins(mut self, strategy: BinStrategy) -> Self {
        self.bins = strategy;
        self
    }

    /// Restrict binning to `[lo, hi]`.
    #[must_use]
    pub fn range(mut self, lo: f32, hi: f32) -> Self {
        self.range = Some((lo, hi));
        self
    }

    /// Normalize so each histogram integrates to one.
    #[must_use]
    pub fn density(mut self, density: bool) -> Self {
        self.density = density;
        self
    }

    /// Set the bar color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the alpha transparency (0.0 - 1.0).
    #[must_use]
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Current binning strategy.
    #[must_use]
    pub fn strategy(&self) -> &BinStrategy {
        &self.bins
    }

    /// Parse keyword options: `bins`, `range`, `density`, `color`, `alpha`.
    pub fn from_kwargs(kwargs: &Kwargs) -> Result<Self> {
        let name = Primitive::Hist.name();
        let mut r = kwargs.reader(name);
        let mut opts = Self::new();

        if let Some(bins) = r.take_value(&["bins"]) {
            opts.bins = match bins {
                Value::Int(n) if n > 0 && n as usize <= MAX_BINS => {
                    BinStrategy::Fixed(n as usize)
                }
                Value::List(edges) if edges.len() >= 2 && is_ascending(&edges) => {
                    BinStrategy::Edges(edges)
                }
                Value::Text(rule) => match rule.as_str() {
                    "sturges" => BinStrategy::Sturges,
                    "scott" => BinStrategy::Scott,
                    "fd" | "freedman-diaconis" => BinStrategy::FreedmanDiaconis,
                    _ => return Err(invalid_bins(name)),
                },
                _ => return Err(invalid_bins(name)),
            };
        }
        opts.range = r.take_range(&["range"])?;
        if let Some(density) = r.take_bool(&["density"])? {
            opts.density = density;
        }
        opts.color = r.take_color(&["color"])?;
        if let Some(alpha) = r.take_alpha(&["alpha"])? {
            opts.alpha = alpha;
        }

        r.finish()?;
        Ok(opts)
    }

    /// Bin edges for `data` under these options.
    #[must_use]
    pub fn edges(&self, data: &[f32]) -> Vec<f32> {
        if let BinStrategy::Edges(edges) = &self.bins {
            return edges.clone();
        }

        let (lo, hi) = match self.range.or_else(|| extent(data)) {
            Some((lo, hi)) if hi > lo => (lo, hi),
            Some((lo, _)) => (lo - 0.5, lo + 0.5),
            None => (0.0, 1.0),
        };
        let in_range: Vec<f32> = data
            .iter()
            .copied()
            .filter(|v| v.is_finite() && *v >= lo && *v <= hi)
            .collect();
        let count = bin_count(&self.bins, &in_range, hi - lo);

        let step = (hi - lo) / count as f32;
        let mut edges: Vec<f32> = (0..count).map(|i| lo + step * i as f32).collect();
        edges.push(hi);
        edges
    }

    /// Copy of these options with the bin edges fixed from `data`.
    ///
    /// Used to give every facet the same bins: edges are resolved once over
    /// the full value arrays, then reused for each subset.
    #[must_use]
    pub fn resolved(&self, data: &[&[f32]]) -> Self {
        if matches!(self.bins, BinStrategy::Edges(_)) {
            return self.clone();
        }
        let all: Vec<f32> = data.iter().flat_map(|d| d.iter().copied()).collect();
        let range = self.range.or_else(|| {
            data.iter()
                .map(|d| extent(d))
                .fold(None, union_range)
        });
        let mut with_range = self.clone();
        with_range.range = range;
        let edges = with_range.edges(&all);
        with_range.bins(BinStrategy::Edges(edges))
    }
}

fn invalid_bins(primitive: &'static str) -> crate::error::Error {
    crate::error::Error::InvalidValue {
        primitive,
        key: "bins".to_string(),
        expected: "a count in 1..=10000, ascending edges, or 'sturges'/'scott'/'fd'",
    }
}

fn is_ascending(edges: &[f32]) -> bool {
    edges.windows(2).all(|w| w[0] < w[1])
}

/// Number of equal-width bins for `data` spanning `span`, at most [`MAX_BINS`].
fn bin_count(strategy: &BinStrategy, data: &[f32], span: f32) -> usize {
    let n = data.len();
    let sturges = || ((n.max(1) as f32).log2().ceil() + 1.0) as usize;

    match strategy {
        BinStrategy::Fixed(bins) => *bins,
        BinStrategy::Edges(edges) => edges.len().saturating_sub(1),
        _ if n < 2 => 1,
        BinStrategy::Sturges => sturges(),
        BinStrategy::Scott => {
            let width = 3.5 * std_dev(data) / (n as f32).powf(1.0 / 3.0);
            bins_of_width(span, width).unwrap_or_else(sturges)
        }
        BinStrategy::FreedmanDiaconis => {
            let width = 2.0 * iqr(data) / (n as f32).powf(1.0 / 3.0);
            bins_of_width(span, width).unwrap_or_else(sturges)
        }
    }
    .clamp(1, MAX_BINS)
}

fn bins_of_width(span: f32, width: f32) -> Option<usize> {
    (width > 0.0).then(|| (span / width).ceil().min(MAX_BINS as f32) as usize)
}

fn std_dev(data: &[f32]) -> f32 {
    if data.len() < 2 {
        return 0.0;
    }
    let mean = data.iter().sum::<f32>() / data.len() as f32;
    let variance =
        data.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / (data.len() - 1) as f32;
    variance.sqrt()
}

fn iqr(data: &[f32]) -> f32 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f32::total_cmp);
    let q1 = sorted[sorted.len() / 4];
    let q3 = sorted[3 * sorted.len() / 4];
    q3 - q1
}

/// Count the values of `data` falling in each bin.
///
/// Bins are half-open except the last, which includes its right edge. Values
/// outside the edges are ignored.
#[must_use]
pub fn bin_counts(edges: &[f32], data: &[f32]) -> Vec<usize> {
    let bins = edges.len().saturating_sub(1);
    let mut counts = vec![0usize; bins];
    let (Some(&lo), Some(&hi)) = (edges.first(), edges.last()) else {
        return counts;
    };
    if bins == 0 {
        return counts;
    }
    for &v in data {
        if !v.is_finite() || v < lo || v > hi {
            continue;
        }
        let bin = edges.partition_point(|e| *e <= v).saturating_sub(1).min(bins - 1);
        counts[bin] += 1;
    }
    counts
}

/// Draw a histogram of each array in `data` into `axes`.
pub fn draw(axes: &mut Axes, data: &[&[f32]], options: &HistOptions) -> Result<()> {
    Primitive::Hist.check_arity(data.len())?;

    for values in data {
        let edges = options.edges(values);
        let counts = bin_counts(&edges, values);
        let total: usize = counts.iter().sum();

        let bars = edges
            .windows(2)
            .zip(&counts)
            .map(|(w, &count)| {
                let width = w[1] - w[0];
                let height = if options.density {
                    if total == 0 {
                        0.0
                    } else {
                        count as f32 / (total as f32 * width)
                    }
                } else {
                    count as f32
                };
                Bar { x: w[0], width, height }
            })
            .collect();

        let color = options.color.unwrap_or_else(|| axes.next_color());
        axes.add_artist(Artist::Bars {
            bars,
            color: apply_alpha(color, options.alpha),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_edges() {
        let edges = HistOptions::new()
            .bins(BinStrategy::Fixed(5))
            .edges(&[1.0, 2.0, 3.0, 4.0, 6.0]);
        assert_eq!(edges.len(), 6);
        assert_relative_eq!(edges[0], 1.0);
        assert_relative_eq!(edges[1], 2.0);
        assert_relative_eq!(edges[5], 6.0);
    }

    #[test]
    fn test_sturges_count() {
        let data: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let edges = HistOptions::new().bins(BinStrategy::Sturges).edges(&data);
        // log2(100) + 1 ≈ 8
        assert!(edges.len() - 1 >= 7 && edges.len() - 1 <= 9);
    }

    #[test]
    fn test_rule_counts_on_uniform_data() {
        // 0..100: std ≈ 29.01, IQR = 75 - 25 = 50, n^(1/3) ≈ 4.642, span 99.
        let data: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let bins = |strategy| HistOptions::new().bins(strategy).edges(&data).len() - 1;

        assert_eq!(bins(BinStrategy::Sturges), 8);
        // width = 3.5 * 29.01 / 4.642 ≈ 21.9 -> ceil(99 / 21.9) = 5
        assert_eq!(bins(BinStrategy::Scott), 5);
        // width = 2 * 50 / 4.642 ≈ 21.5 -> ceil(99 / 21.5) = 5
        assert_eq!(bins(BinStrategy::FreedmanDiaconis), 5);
    }

    #[test]
    fn test_rule_counts_capped_with_outlier() {
        let mut data: Vec<f32> = (0..99).map(|i| (i % 4) as f32 * 1e-3).collect();
        data.push(1e7);
        for strategy in [BinStrategy::Scott, BinStrategy::FreedmanDiaconis] {
            let edges = HistOptions::new().bins(strategy).edges(&data);
            assert!(edges.len() - 1 <= MAX_BINS);
            assert_relative_eq!(*edges.last().unwrap(), 1e7);
            assert_eq!(bin_counts(&edges, &data).iter().sum::<usize>(), 100);
        }
    }

    #[test]
    fn test_fixed_count_capped() {
        let edges = HistOptions::new()
            .bins(BinStrategy::Fixed(usize::MAX))
            .edges(&[0.0, 1.0]);
        assert_eq!(edges.len(), MAX_BINS + 1);
    }

    #[test]
    fn test_tiny_span_binned_over_data() {
        let data = [3.0e-7f32, 3.2e-7, 3.4e-7, 3.5e-7];
        let edges = HistOptions::new().bins(BinStrategy::Fixed(5)).edges(&data);
        assert_relative_eq!(edges[0], 3.0e-7);
        assert_relative_eq!(edges[5], 3.5e-7);
        let counts = bin_counts(&edges, &data);
        assert_eq!(counts.iter().sum::<usize>(), 4);
        assert!(counts.iter().all(|&c| c <= 2));
    }

    #[test]
    fn test_constant_data_widened() {
        let edges = HistOptions::new().bins(BinStrategy::Fixed(2)).edges(&[4.0, 4.0]);
        assert_eq!(edges, vec![3.5, 4.0, 4.5]);
    }

    #[test]
    fn test_fd_zero_iqr_falls_back() {
        let data = vec![5.0f32; 100];
        let edges = HistOptions::new().bins(BinStrategy::FreedmanDiaconis).edges(&data);
        assert!(edges.len() >= 2);
    }

    #[test]
    fn test_fixed_zero_clamps_to_one() {
        let edges = HistOptions::new().bins(BinStrategy::Fixed(0)).edges(&[1.0, 2.0]);
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_empty_data_default_range() {
        let edges = HistOptions::new().edges(&[]);
        assert_eq!(edges.len(), 11);
        assert_relative_eq!(edges[0], 0.0);
        assert_relative_eq!(edges[10], 1.0);
    }

    #[test]
    fn test_bin_counts_last_bin_closed() {
        let counts = bin_counts(&[0.0, 1.0, 2.0], &[0.0, 0.5, 1.0, 2.0, 2.5, -1.0, f32::NAN]);
        assert_eq!(counts, vec![2, 2]);
    }

    #[test]
    fn test_resolved_shares_range() {
        let a = [0.0f32, 1.0, 2.0];
        let b = [5.0f32, 10.0];
        let resolved = HistOptions::new().bins(BinStrategy::Fixed(4)).resolved(&[&a, &b]);
        match resolved.strategy() {
            BinStrategy::Edges(edges) => {
                assert_eq!(edges.len(), 5);
                assert_relative_eq!(edges[0], 0.0);
                assert_relative_eq!(edges[4], 10.0);
            }
            other => panic!("expected edges, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_empty_subset() {
        let mut axes = Axes::new();
        let opts = HistOptions::new().bins(BinStrategy::Edges(vec![0.0, 1.0, 2.0]));
        draw(&mut axes, &[&[]], &opts).unwrap();
        match &axes.artists()[0] {
            Artist::Bars { bars, .. } => {
                assert_eq!(bars.len(), 2);
                assert!(bars.iter().all(|b| b.height == 0.0));
            }
            other => panic!("expected bars, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_density_integrates_to_one() {
        let mut axes = Axes::new();
        let opts = HistOptions::new().bins(BinStrategy::Fixed(4)).density(true);
        draw(&mut axes, &[&[0.0, 1.0, 1.5, 2.0, 3.0, 4.0]], &opts).unwrap();
        let Artist::Bars { bars, .. } = &axes.artists()[0] else {
            panic!("expected bars");
        };
        let area: f32 = bars.iter().map(|b| b.width * b.height).sum();
        assert_relative_eq!(area, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_from_kwargs() {
        let kw = Kwargs::new()
            .set("bins", 20)
            .set("density", true)
            .set("color", "C1")
            .set("alpha", 0.5);
        let opts = HistOptions::from_kwargs(&kw).unwrap();
        assert_eq!(opts.bins, BinStrategy::Fixed(20));
        assert!(opts.density);
        assert_eq!(opts.color, Some(crate::color::cycle(1)));

        let opts = HistOptions::from_kwargs(&Kwargs::new().set("bins", "fd")).unwrap();
        assert_eq!(opts.bins, BinStrategy::FreedmanDiaconis);
    }

    #[test]
    fn test_from_kwargs_rejects() {
        assert!(HistOptions::from_kwargs(&Kwargs::new().set("bins", 0)).is_err());
        assert!(matches!(
            HistOptions::from_kwargs(&Kwargs::new().set("bins", 10_001)),
            Err(crate::error::Error::InvalidValue { ref key, .. }) if key == "bins"
        ));
        assert!(HistOptions::from_kwargs(&Kwargs::new().set("bins", [2.0f32, 1.0])).is_err());
        assert!(HistOptions::from_kwargs(&Kwargs::new().set("bins", "auto")).is_err());
        assert!(HistOptions::from_kwargs(&Kwargs::new().set("marker", "o")).is_err());
    }
}
