//! Faceted histogram: heights split by gender, one cell per group.
//!
//! Run with `RUST_LOG=trueno_facet=debug cargo run --example faceted_histogram`.

use trueno_facet::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Deterministic "random" heights around two means
    let n = 400;
    let (gender, height): (Vec<&str>, Vec<f32>) = (0..n)
        .map(|i| {
            let noise = ((i * 7919) % 100) as f32 / 10.0 - 5.0;
            if i % 3 == 0 {
                ("Female", 165.0 + noise * 1.4)
            } else {
                ("Male", 178.0 + noise * 1.6)
            }
        })
        .unzip();

    let mut facet = Facet::builder()
        .key(&gender)
        .values(&height)
        .xlabel("height (cm)")
        .ylabel("count")
        .build()?;

    let figure = facet.hist(&HistOptions::new().bins(BinStrategy::FreedmanDiaconis).alpha(0.8))?;

    print!("{}", figure.to_terminal(80)?);
    figure.save_svg("faceted_histogram.svg")?;
    figure.save_png("faceted_histogram.png")?;
    println!("wrote faceted_histogram.svg and faceted_histogram.png");
    Ok(())
}
