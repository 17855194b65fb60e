//! Container image architecture checks for archcheck
//!
//! This crate provides functionality for:
//! - Detecting which registry (DockerHub, GHCR, Quay.io) an image reference
//!   belongs to and normalizing it into repository and tag
//! - Obtaining pull tokens using each registry's auth scheme
//! - Fetching OCI/Docker manifests and, for single-arch images, config blobs
//! - Reducing a manifest to the list of CPU architectures it supports
//!
//! # Example
//!
//! ```no_run
//! use archcheck_registry::{check_image, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env();
//!     let outcome = check_image("nginx:latest", &config).await?;
//!
//!     println!("{:?}", outcome);
//!     std::process::exit(outcome.exit_code());
//! }
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod manifest;
pub mod reference;
pub mod registry;
pub mod resolver;
pub mod types;

// Re-export main types for convenience
pub use check::{check_image, resolve_reference, ArchitectureCheck, CheckOutcome, REQUIRED_ARCHITECTURES};
pub use config::{ClientConfig, Credentials, Endpoints};
pub use error::{RegistryError, Result};
pub use manifest::{ConfigBlob, Manifest};
pub use reference::{detect_registry, ImageReference, RegistryKind};
pub use registry::{client_for, DockerHubClient, GhcrClient, QuayClient, RegistryClient};
pub use resolver::{resolve_architectures, BlobLookup};
pub use types::{ArchitectureSet, BearerToken, EmptyReason};

/// Version of the archcheck-registry crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
