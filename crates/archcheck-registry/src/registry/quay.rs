//! Quay.io client

use super::http::{build_http_client, RegistryApi};
use super::RegistryClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::manifest::{ConfigBlob, Manifest};
use crate::reference::RegistryKind;
use crate::types::BearerToken;
use async_trait::async_trait;

/// Quay.io serves public images anonymously; `QUAY_TOKEN` only raises limits
#[derive(Debug, Clone)]
pub struct QuayClient {
    api: RegistryApi,
    user_token: Option<String>,
}

impl QuayClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = build_http_client(config)?;
        Ok(Self {
            api: RegistryApi::new(client, &config.endpoints.quay),
            user_token: config.credentials.quay_token.clone(),
        })
    }
}

#[async_trait]
impl RegistryClient for QuayClient {
    fn kind(&self) -> RegistryKind {
        RegistryKind::Quay
    }

    async fn get_token(&self, _repository: &str) -> Result<Option<BearerToken>> {
        Ok(self.user_token.clone().map(BearerToken::new))
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
