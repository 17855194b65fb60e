//! Registry client trait and the per-registry implementations

mod dockerhub;
mod ghcr;
mod http;
mod quay;

pub use dockerhub::DockerHubClient;
pub use ghcr::GhcrClient;
pub use quay::QuayClient;

use crate::config::ClientConfig;
use crate::error::{RegistryError, Result};
use crate::manifest::{ConfigBlob, Manifest};
use crate::reference::RegistryKind;
use crate::types::BearerToken;
use async_trait::async_trait;

/// Access to one registry's token service, manifests and blobs
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Registry served by this client
    fn kind(&self) -> RegistryKind;

    /// Obtain a pull token for `repository`, or `None` for anonymous access.
    ///
    /// Failure here is fatal for the check.
    async fn get_token(&self, repository: &str) -> Result<Option<BearerToken>>;

    /// Fetch the manifest for `repository:tag`
    async fn fetch_manifest(
        &self,
        repository: &str,
        tag: &str,
        token: Option<&BearerToken>,
    ) -> Result<Manifest>;

    /// Fetch a config blob by digest
    async fn fetch_blob(
        &self,
        repository: &str,
        digest: &str,
        token: Option<&BearerToken>,
    ) -> Result<ConfigBlob>;
}

/// Create the client for `kind`
pub fn client_for(kind: RegistryKind, config: &ClientConfig) -> Result<Box<dyn RegistryClient>> {
    match kind {
        RegistryKind::DockerHub => Ok(Box::new(DockerHubClient::new(config)?)),
        RegistryKind::Ghcr => Ok(Box::new(GhcrClient::new(config)?)),
        RegistryKind::Quay => Ok(Box::new(QuayClient::new(config)?)),
        RegistryKind::Unsupported => Err(RegistryError::unsupported(kind.label())),
    }
}
