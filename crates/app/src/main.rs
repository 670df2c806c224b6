//! Reqnote - Main Entry Point
//!
//! Command line front end for viewing a stored request as raw HTTP text
//! and committing hand-edited text back to it.

mod cli;
mod config;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    // Logs go to stderr so stdout stays clean for request text
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting reqnote v{}", env!("CARGO_PKG_VERSION"));

    cli::run(cli, &config).await
}
