use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use surf_scraper::config::Config;
use surf_scraper::constants::PREVIEW_ROWS;
use surf_scraper::logging;
use surf_scraper::Pipeline;

#[derive(Parser)]
#[command(name = "surf_scraper")]
#[command(about = "Scrape a Surf-Report forecast page and export it as CSV")]
#[command(version = "0.1.0")]
struct Cli {
    /// Surf-Report page URL (e.g. https://www.surf-report.com/meteo-surf/lacanau-s1043.html)
    #[arg(long)]
    url: String,

    /// Output CSV file (e.g. ./lacanau.csv) or directory (e.g. ./data/). Defaults to ./data_surf.csv
    #[arg(long)]
    out: Option<PathBuf>,

    /// Configuration file (defaults to ./surf_scraper.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_path(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    logging::init_logging(&config.logging);

    let pipeline = Pipeline::new(config).context("Failed to build HTTP client")?;
    let result = pipeline.run(&cli.url, cli.out.as_deref()).map_err(|e| {
        error!("Pipeline failed: {}", e);
        e
    })?;

    println!("{}", result.table.render(PREVIEW_ROWS));
    Ok(())
}
