//! CLI argument parsing with clap

use clap::Parser;

/// archcheck - Verify a container image supports amd64 and arm64
#[derive(Parser, Debug)]
#[command(name = "archcheck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    archcheck nginx:latest
    archcheck myorg/tool:v1
    archcheck ghcr.io/owner/app:1.2.0
    archcheck quay.io/coreos/etcd:v3.5.0

SUPPORTED REGISTRIES:
    DockerHub (default, docker.io/), ghcr.io, quay.io

ENVIRONMENT:
    GITHUB_TOKEN    Bearer token for ghcr.io (skips the anonymous token flow)
    QUAY_TOKEN      Bearer token for quay.io
    RUST_LOG        Log filter, overrides -v/-q")]
pub struct Cli {
    /// Image reference: [registry-host/]repository[:tag]
    #[arg(value_name = "IMAGE")]
    pub image: String,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
