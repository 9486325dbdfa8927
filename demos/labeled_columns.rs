//! Facet a table by column name, with layout options read from YAML.
//!
//! Run with `cargo run --example labeled_columns --features config`.

use trueno_facet::prelude::*;
use tracing_subscriber::EnvFilter;

const OPTIONS: &str = "
ncols: 2
share_y: row
cell_width: 240
cell_height: 180
";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let species = ["setosa", "versicolor", "virginica"];
    let n = 150;
    let table = Table::new()
        .with_column(
            "species",
            KeyArray::new((0..n).map(|i| species[i % species.len()])),
        )
        .with_column(
            "petal_length",
            (0..n)
                .map(|i| 1.5 + 2.0 * (i % 3) as f32 + ((i * 31) % 10) as f32 / 10.0)
                .collect::<Vec<f32>>(),
        );

    let options = FacetOptions::parse(OPTIONS)?;
    let mut facet = Facet::from_labeled(&table, &["species"], &["petal_length"])?
        .options(options)
        .xlabel("petal length (cm)")
        .build()?;

    for group in facet.groups() {
        println!("{:<24} {:>3} rows at {:?}", group.label, group.indices.len(), group.cell);
    }

    let figure = facet.hist(&HistOptions::new().bins(BinStrategy::Sturges))?;
    figure.save_svg("labeled_columns.svg")?;
    Ok(())
}
