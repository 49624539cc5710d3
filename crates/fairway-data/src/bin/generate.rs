//! Default generation run - creates the full demo dataset
//!
//! Run with:
//! ```
//! cargo run -p fairway-data --bin generate
//! ```

use fairway_data::builders::DatasetBuilder;
use fairway_data::config::GeneratorConfig;
use fairway_data::sink::Sink;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let output_dir =
        std::env::var("FAIRWAY_OUTPUT_DIR").unwrap_or_else(|_| "sample_data".to_string());

    let config = GeneratorConfig::default();
    tracing::info!(
        "date range: {} to {}",
        config.date_range.start,
        config.date_range.end
    );
    tracing::info!("output directory: {output_dir}");

    let dataset = DatasetBuilder::from_config(config).build()?;

    let sink = Sink::new(&output_dir);
    sink.write_all(&dataset)?;

    // Summary output
    tracing::info!("Generation completed!");
    for (table, rows) in dataset.row_counts() {
        tracing::info!("  {table}: {rows}");
    }

    Ok(())
}
