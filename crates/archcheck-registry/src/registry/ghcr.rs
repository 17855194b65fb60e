//! GitHub Container Registry client

use super::http::{build_http_client, request_token, RegistryApi};
use super::RegistryClient;
use crate::config::ClientConfig;
use crate::error::{RegistryError, Result};
use crate::manifest::{ConfigBlob, Manifest};
use crate::reference::RegistryKind;
use crate::types::BearerToken;
use async_trait::async_trait;
use tracing::debug;

/// GHCR client.
///
/// A user-provided `GITHUB_TOKEN` is used as the bearer token as-is;
/// otherwise an anonymous token is requested, which only works for public
/// packages.
#[derive(Debug, Clone)]
pub struct GhcrClient {
    api: RegistryApi,
    user_token: Option<String>,
}

impl GhcrClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = build_http_client(config)?;
        Ok(Self {
            api: RegistryApi::new(client, &config.endpoints.ghcr),
            user_token: config.credentials.github_token.clone(),
        })
    }
}

#[async_trait]
impl RegistryClient for GhcrClient {
    fn kind(&self) -> RegistryKind {
        RegistryKind::Ghcr
    }

    async fn get_token(&self, repository: &str) -> Result<Option<BearerToken>> {
        if let Some(token) = &self.user_token {
            debug!("Using GITHUB_TOKEN for GHCR");
            return Ok(Some(BearerToken::new(token.clone())));
        }

        debug!("Requesting anonymous GHCR token for {} (public package)", repository);
        let scope = format!("repository:{}:pull", repository);
        let token = request_token(
            self.api.client(),
            &format!("{}/token", self.api.base_url()),
            &[("scope", scope.as_str())],
        )
        .await
        .map_err(|e| {
            RegistryError::auth_failed(
                self.kind().label(),
                format!("Failed to get GHCR auth token: {}", e),
            )
        })?;

        Ok(Some(token))
    }

    async fn fetch_manifest(
        &self,
        repository: &str,
        tag: &str,
        token: Option<&BearerToken>,
    ) -> Result<Manifest> {
        self.api.get_manifest(repository, tag, token).await
    }

    async fn fetch_blob(
        &self,
        repository: &str,
        digest: &str,
        token: Option<&BearerToken>,
    ) -> Result<ConfigBlob> {
        self.api.get_blob(repository, digest, token).await
    }
}
