//! Ollama Probe CLI
//!
//! Checks that a local Ollama server is reachable and can generate text.

use clap::Parser;
use colored::Colorize;
use ollama_probe::cli::args::Cli;
use ollama_probe::diagnostics;
use ollama_probe::models::config;
use ollama_probe::services::ollama::OllamaClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Defaults < config file < environment < flags
    let config = cli.apply_to(config::load_config().with_env_overrides());
    tracing::debug!("Using configuration: {:?}", config);

    let client = OllamaClient::with_config(config)?;

    println!(
        "{}",
        format!(
            "Testing Ollama at {} (model: {})...",
            client.base_url(),
            client.config().model
        )
        .bold()
    );
    println!();

    let results = diagnostics::run_diagnostics(&client).await;
    diagnostics::print_results(&results);

    if cli.strict && !diagnostics::all_passed(&results) {
        anyhow::bail!("Ollama diagnostics failed.");
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("ollama_probe=debug")
    } else {
        EnvFilter::new("ollama_probe=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
