//! archcheck CLI - Container image architecture checks
//!
//! Resolves the architectures an image publishes on DockerHub, GHCR or
//! Quay.io and verifies that amd64 and arm64 are both present.

mod cli;
mod output;
mod report;

use anyhow::{Context, Result};
use archcheck_registry::{check_image, ClientConfig, RegistryError};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use report::Report;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    // This must be done before any TLS operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = ClientConfig::from_env();
    debug!("Checking {} with {:?}", cli.image, config.credentials);

    let report = match check_image(&cli.image, &config).await {
        Ok(outcome) => Report::from_outcome(&outcome),
        Err(RegistryError::HttpClient(e)) => {
            return Err(e).context("Failed to initialize registry client");
        }
        Err(e) => Report::from_error(&e),
    };

    report.print();
    std::process::exit(report.exit_code);
}

/// Initialize tracing with appropriate verbosity.
///
/// Logs go to stderr so stdout only carries the report. RUST_LOG, when
/// set, replaces the level chosen by the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
