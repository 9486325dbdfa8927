//! Two-key grid: scatter of `y` against `x`, rows by sample, columns by treatment.
//!
//! Uses the by-name dispatch with keyword options.

use trueno_facet::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let n = 300;
    let sample: Vec<i32> = (0..n).map(|i| i % 3).collect();
    let treated: Vec<bool> = (0..n).map(|i| i % 2 == 0).collect();
    let x: Vec<f32> = (0..n).map(|i| (i as f32 / n as f32) * 5.0).collect();
    let y: Vec<f32> = x
        .iter()
        .zip(&sample)
        .zip(&treated)
        .map(|((x, s), t)| x.sin() + *s as f32 + if *t { 0.5 } else { 0.0 })
        .collect();

    let mut facet = Facet::builder()
        .key(&sample)
        .key(&treated)
        .values(vec![x, y])
        .labeler(Labeler::columns(["sample", "treated"]))
        .build()?;

    facet.dispatch("scatter", &Kwargs::new().set("s", 3).set("alpha", 0.6))?;
    let figure = facet.dispatch("plot", &Kwargs::new().set("color", "k").set("lw", 1))?;

    figure.save_svg("grid_scatter.svg")?;
    println!(
        "wrote grid_scatter.svg ({} x {} cells)",
        figure.shape().nrows,
        figure.shape().ncols
    );
    Ok(())
}
