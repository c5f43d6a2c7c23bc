use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_finder::catalog::load_catalog;
use movie_finder::config::{ConfigBuilder, FinderConfig};
use movie_finder::tui::{run_tui, App};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = ConfigBuilder::new().build()?;
    init_logging(&config)?;

    info!("Starting Movie Finder");

    // A failed load stops here, before the terminal is touched
    let catalog = load_catalog(&config)
        .await
        .with_context(|| format!("Failed to load movies from {:?}", config.database_path))?;

    run_tui(App::new(catalog)).await
}

fn init_logging(config: &FinderConfig) -> Result<()> {
    // Log to a file; stdout belongs to the terminal UI
    let log_file = File::create(&config.log_path)
        .with_context(|| format!("Failed to create log file {:?}", config.log_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "movie_finder=info".into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    Ok(())
}
