//! DockerHub client

use super::http::{build_http_client, request_token, RegistryApi};
use super::RegistryClient;
use crate::config::ClientConfig;
use crate::error::{RegistryError, Result};
use crate::manifest::{ConfigBlob, Manifest};
use crate::reference::RegistryKind;
use crate::types::BearerToken;
use async_trait::async_trait;
use tracing::debug;

/// `service` parameter expected by auth.docker.io
const DOCKERHUB_SERVICE: &str = "registry.docker.io";

/// DockerHub always needs a token, even for public images
#[derive(Debug, Clone)]
pub struct DockerHubClient {
    api: RegistryApi,
    auth_url: String,
}

impl DockerHubClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = build_http_client(config)?;
        Ok(Self {
            api: RegistryApi::new(client, &config.endpoints.dockerhub_registry),
            auth_url: config.endpoints.dockerhub_auth.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RegistryClient for DockerHubClient {
    fn kind(&self) -> RegistryKind {
        RegistryKind::DockerHub
    }

    async fn get_token(&self, repository: &str) -> Result<Option<BearerToken>> {
        let scope = format!("repository:{}:pull", repository);
        debug!("Requesting anonymous DockerHub token for {}", repository);

        let token = request_token(
            self.api.client(),
            &format!("{}/token", self.auth_url),
            &[("service", DOCKERHUB_SERVICE), ("scope", scope.as_str())],
        )
        .await
        .map_err(|e| {
            RegistryError::auth_failed(self.kind().label(), format!("Failed to get auth token: {}", e))
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
