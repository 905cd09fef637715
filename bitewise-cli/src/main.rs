//! Bitewise CLI entry point.

mod cli;
mod commands;
mod error;
mod output;
mod report;
mod state;

use clap::Parser;
use cli::{Cli, Commands};
use error::CliError;
use output::OutputWriter;
use state::ProductSlot;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match bitewise_core::AppConfig::load_with_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: configuration error: {e}");
            std::process::exit(2);
        }
    };

    // CLI flag wins over config file
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &config).await {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli, config: &bitewise_core::AppConfig) -> Result<(), CliError> {
    let writer = OutputWriter::new(cli.output);
    let slot = ProductSlot::new();

    match &cli.command {
        Commands::Lookup(args) => {
            commands::lookup::run(&args.barcode, config, &slot, &writer).await
        }
        Commands::Scan(args) => {
            commands::scan::run(args.device.as_deref(), config, &slot, &writer).await
        }
        Commands::Classify(args) => commands::classify::run(&args.ingredients, &writer),
        Commands::Config(args) => commands::config::run(&args.action, config, &writer),
    }
}
