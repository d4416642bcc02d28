//! Accounting server integration probe (CLI).
//!
//! # Architecture Overview
//!
//! ```text
//!   operator
//!      │
//!      ▼
//!   ┌──────────┐    ┌──────────────────┐    ┌──────────────────┐
//!   │ clap CLI │───▶│ scenario runners │───▶│ AccountingClient │───▶ accounting server
//!   └──────────┘    │ check / workflow │    │  (reqwest/JSON)  │
//!                   │ health / all     │    └──────────────────┘
//!                   └────────┬─────────┘
//!                            ▼
//!              stdout report + tracing diagnostics
//! ```
//!
//! Scenarios are fixed sequential scripts: each network call completes
//! or fails before the next step runs, and every failure collapses to a
//! boolean that drives the process exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use accounting_probe::client::AccountingClient;
use accounting_probe::config::{load_config, validation::validate_config, ConfigError, ProbeConfig};
use accounting_probe::{observability, probe};

#[derive(Parser)]
#[command(name = "accounting-probe")]
#[command(about = "Integration probe for the accounting server", long_about = None)]
struct Cli {
    /// Base URL of the accounting server (overrides the config file)
    #[arg(short, long)]
    server: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the expected recipes are loaded
    Check,
    /// Run the end-to-end product workflow
    Workflow,
    /// Fetch the server health document
    Health,
    /// Run the recipe check followed by the workflow
    All,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("configuration error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        server = %config.server.base_url,
        connect_timeout_secs = config.http.connect_timeout_secs,
        request_timeout_secs = config.http.request_timeout_secs,
        "probe starting"
    );

    let client = match AccountingClient::new(&config.server, &config.http) {
        Ok(client) => client,
        Err(error) => {
            eprintln!("client setup error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let passed = match cli.command {
        Commands::Check => probe::recipes::run(&client, &config).await,
        Commands::Workflow => probe::workflow::run(&client, &config).await,
        Commands::Health => probe::health::run(&client).await,
        Commands::All => {
            probe::recipes::run(&client, &config).await
                && probe::workflow::run(&client, &config).await
        }
    };

    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Load the config file when given, then apply CLI overrides and
/// re-validate the result.
fn resolve_config(cli: &Cli) -> Result<ProbeConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProbeConfig::default(),
    };

    if let Some(server) = &cli.server {
        config.server.base_url = server.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}
