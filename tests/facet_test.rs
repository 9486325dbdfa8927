//! Facet Integration Tests
//!
//! End-to-end checks of grouping, layout, shared scaling and dispatch.
//!
//! Run: cargo test --test facet_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use approx::assert_relative_eq;
use trueno_facet::prelude::*;
use trueno_facet::primitives::MAX_BINS;

fn gender_height() -> (Vec<&'static str>, Vec<f32>) {
    let gender = vec![
        "Male", "Female", "Female", "Male", "Male", "Female", "Male", "Female", "Male", "Male",
    ];
    let height = vec![
        181.0, 162.5, 170.0, 175.5, 190.0, 158.0, 168.0, 166.0, 177.0, 183.5,
    ];
    (gender, height)
}

fn bar_heights(axes: &Axes) -> Vec<f32> {
    axes.artists()
        .iter()
        .flat_map(|artist| match artist {
            Artist::Bars { bars, .. } => bars.iter().map(|b| b.height).collect(),
            _ => Vec::new(),
        })
        .collect()
}

// ============================================================================
// Grouping and titles
// ============================================================================

#[test]
fn test_gender_histogram_two_cells() {
    let (gender, height) = gender_height();
    let mut facet = Facet::new(&gender, &height).unwrap();
    let figure = facet.hist(&HistOptions::new()).unwrap();

    assert_eq!(figure.len(), 2);
    assert_eq!(figure.shape(), GridShape::new(1, 2));

    let female = figure.axes(CellIndex::new(0, 0)).unwrap();
    let male = figure.axes(CellIndex::new(0, 1)).unwrap();
    assert_eq!(female.title(), Some("Female"));
    assert_eq!(male.title(), Some("Male"));

    // Each histogram counts only its own rows.
    assert_relative_eq!(bar_heights(female).iter().sum::<f32>(), 4.0);
    assert_relative_eq!(bar_heights(male).iter().sum::<f32>(), 6.0);
}

#[test]
fn test_cell_count_is_product_of_levels() {
    let k1 = [1, 1, 2, 2, 3, 3];
    let k2 = ["a", "b", "a", "b", "a", "a"];
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let facet = Facet::grid(k1, k2, values).unwrap();

    assert_eq!(facet.shape(), GridShape::new(3, 2));
    assert_eq!(facet.facet_count(), 6);
    assert_eq!(facet.figure().len(), 6);
}

#[test]
fn test_empty_combination_gets_titled_empty_cell() {
    let mut facet = Facet::grid([1, 1, 2], ["a", "b", "a"], [1.0, 2.0, 3.0]).unwrap();
    let figure = facet.hist(&HistOptions::new().bins(BinStrategy::Fixed(4))).unwrap();

    let empty = figure.axes(CellIndex::new(1, 1)).unwrap();
    assert_eq!(empty.title(), Some("(2, b)"));
    let heights = bar_heights(empty);
    assert_eq!(heights.len(), 4);
    assert!(heights.iter().all(|&h| h == 0.0));
}

#[test]
fn test_length_mismatch_before_drawing() {
    let key: Vec<i32> = (0..10).map(|i| i % 2).collect();
    let values = vec![0.0f32; 9];
    let err = Facet::new(key, values).unwrap_err();
    assert!(matches!(
        err,
        Error::LengthMismatch { expected: 10, found: 9, .. }
    ));
}

#[test]
fn test_bool_and_int_levels() {
    let facet = Facet::new([true, false, true], [1.0, 2.0, 3.0]).unwrap();
    assert_eq!(facet.levels(0), &[Level::Bool(false), Level::Bool(true)]);

    let facet = Facet::new([3, -1, 3], [1.0, 2.0, 3.0]).unwrap();
    assert_eq!(facet.levels(0), &[Level::Int(-1), Level::Int(3)]);
}

// ============================================================================
// Shared scaling
// ============================================================================

#[test]
fn test_shared_limits_cover_all_data() {
    let key = [0, 0, 1, 1, 2, 2];
    let x = vec![0.0, 1.0, 5.0, 6.0, -3.0, 2.0];
    let y = vec![10.0, 20.0, -5.0, 0.0, 3.0, 4.0];

    let mut facet = Facet::new(key, vec![x, y]).unwrap();
    let figure = facet.scatter(&ScatterOptions::new()).unwrap();

    let limits: Vec<_> = figure.iter().map(|(cell, _)| figure.limits(cell)).collect();
    assert_eq!(limits.len(), 3);
    assert!(limits.windows(2).all(|w| w[0] == w[1]));

    let b = limits[0];
    assert!(b.x.0 <= -3.0 && b.x.1 >= 6.0);
    assert!(b.y.0 <= -5.0 && b.y.1 >= 20.0);
}

#[test]
fn test_unshared_limits_are_per_cell() {
    let mut facet = Facet::builder()
        .key([0, 0, 1, 1])
        .values([vec![0.0, 1.0, 100.0, 101.0], vec![0.0, 1.0, 0.0, 1.0]])
        .share_x(false)
        .build()
        .unwrap();
    let figure = facet.scatter(&ScatterOptions::new()).unwrap();

    let left = figure.limits(CellIndex::new(0, 0));
    let right = figure.limits(CellIndex::new(0, 1));
    assert!(left.x.1 < 2.0);
    assert!(right.x.0 > 99.0);
    assert_eq!(left.y, right.y);
}

#[test]
fn test_limits_recomputed_after_overlay() {
    let mut facet = Facet::new([0, 1], [vec![0.0, 1.0], vec![0.0, 1.0]]).unwrap();
    facet.scatter(&ScatterOptions::new()).unwrap();
    let before = facet.figure().limits(CellIndex::new(0, 0));

    facet.figure_mut().axes_mut(CellIndex::new(0, 1)).unwrap().scatter(
        &[50.0],
        &[50.0],
        &ScatterOptions::new(),
    ).unwrap();
    let after = facet.figure().limits(CellIndex::new(0, 0));
    assert!(after.x.1 > before.x.1);
}

#[test]
fn test_tiny_magnitude_data_renders() {
    let x = vec![3.0e-7, 3.2e-7, 3.4e-7, 3.5e-7];
    let y = vec![1.0, 2.0, 3.0, 4.0];
    let mut facet = Facet::new([0, 0, 1, 1], vec![x.clone(), y]).unwrap();
    let figure = facet.scatter(&ScatterOptions::new()).unwrap();

    let b = figure.limits(CellIndex::new(0, 0));
    assert!(b.x.0 <= 3.0e-7 && b.x.1 >= 3.5e-7);
    assert!(b.x.1 - b.x.0 < 1e-6);
    assert!(figure.render().is_ok());
    assert!(figure.to_svg().is_ok());

    // Bins span the data, not a unit interval around it.
    let mut facet = Facet::new([0, 0, 1, 1], x).unwrap();
    let figure = facet.hist(&HistOptions::new()).unwrap();
    for (_, axes) in figure.iter() {
        let Artist::Bars { bars, .. } = &axes.artists()[0] else {
            panic!("expected bars");
        };
        assert_relative_eq!(bars[0].x, 3.0e-7, max_relative = 1e-4);
        assert!(bars.iter().all(|b| b.width < 1e-7));
        assert!(bar_heights(axes).iter().all(|&h| h <= 1.0));
    }
}

#[test]
fn test_rule_based_bins_with_outlier() {
    let mut values: Vec<f32> = (0..99).map(|i| (i % 4) as f32 * 1e-3).collect();
    values.push(1e7);
    let key: Vec<i32> = (0..100).map(|i| i % 2).collect();

    let mut facet = Facet::new(key, values).unwrap();
    let figure = facet.dispatch("hist", &Kwargs::new().set("bins", "fd")).unwrap();

    let mut total = 0.0;
    for (_, axes) in figure.iter() {
        let heights = bar_heights(axes);
        assert!(heights.len() <= MAX_BINS);
        total += heights.iter().sum::<f32>();
    }
    assert_relative_eq!(total, 100.0);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_by_name() {
    let (gender, height) = gender_height();
    let mut facet = Facet::new(&gender, &height).unwrap();
    let kwargs = Kwargs::new()
        .set("bins", 5)
        .set("color", "steelblue")
        .set("alpha", 0.5)
        .set("density", true);
    let figure = facet.dispatch("hist", &kwargs).unwrap();

    let female = figure.axes(CellIndex::new(0, 0)).unwrap();
    assert_eq!(bar_heights(female).len(), 5);
    assert_eq!(female.artists()[0].color(), Rgba::new(70, 130, 180, 128));
}

#[test]
fn test_dispatch_unknown_method() {
    let (gender, height) = gender_height();
    let mut facet = Facet::new(&gender, &height).unwrap();
    let err = facet.dispatch("violin", &Kwargs::new()).unwrap_err();
    assert_eq!(err.to_string(), "'violin' is not a valid plot method");
}

#[test]
fn test_dispatch_invalid_argument_passes_through() {
    let (gender, height) = gender_height();
    let mut facet = Facet::new(&gender, &height).unwrap();
    let err = facet
        .dispatch("hist", &Kwargs::new().set("bins", 5).set("colour", "red"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument { primitive: "hist", ref key } if key == "colour"
    ));
    assert!(facet.figure().iter().all(|(_, ax)| ax.is_empty()));
}

#[test]
fn test_plot_single_array_against_position() {
    let mut facet = Facet::new(["a", "a", "a", "b"], [5.0, 6.0, 7.0, 1.0]).unwrap();
    let figure = facet.dispatch("line", &Kwargs::new().set("lw", 2)).unwrap();
    let limits = figure.limits(CellIndex::new(0, 0));
    assert!(limits.x.0 <= 0.0 && limits.x.1 >= 2.0);
}

#[test]
fn test_bar_grid() {
    let x = vec![0.0, 1.0, 0.0, 1.0];
    let h = vec![3.0, -1.0, 2.0, 4.0];
    let mut facet = Facet::new(["p", "p", "q", "q"], vec![x, h]).unwrap();
    let figure = facet.bar(&BarOptions::new().width(0.5)).unwrap();
    let b = figure.limits(CellIndex::new(0, 1));
    assert!(b.y.0 <= -1.0 && b.y.1 >= 4.0);
}

// ============================================================================
// Repeated calls
// ============================================================================

#[test]
fn test_repeated_dispatch_accumulates() {
    let (gender, height) = gender_height();
    let mut facet = Facet::new(&gender, &height).unwrap();
    facet.hist(&HistOptions::new()).unwrap();
    facet.hist(&HistOptions::new().alpha(0.3)).unwrap();

    let figure = facet.figure();
    assert_eq!(figure.len(), 2);
    for (_, axes) in figure.iter() {
        assert_eq!(axes.artists().len(), 2);
        assert_ne!(axes.artists()[0].color(), axes.artists()[1].color());
    }

    facet.clear();
    assert!(facet.figure().iter().all(|(_, ax)| ax.is_empty()));
}

#[test]
fn test_figure_labels() {
    let (gender, height) = gender_height();
    let mut facet = Facet::builder()
        .key(&gender)
        .values(&height)
        .xlabel("height (cm)")
        .ylabel("count")
        .build()
        .unwrap();
    let svg = facet.hist(&HistOptions::new()).unwrap().to_svg().unwrap().render();
    assert!(svg.contains("height (cm)"));
    assert!(svg.contains("count"));
}
