use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use salary_advisor::cli::{Cli, Commands};
use salary_advisor::config::Config;
use salary_advisor::utils::output::configure_color;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("salary_advisor={}", default_level))),
        )
        .with_writer(std::io::stderr)
        .init();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    configure_color(config.general.color && !cli.no_color);
    tracing::debug!(version = salary_advisor::VERSION, "starting salary-advisor");

    cli.command.unwrap_or(Commands::Form).execute(config)?;

    Ok(())
}
