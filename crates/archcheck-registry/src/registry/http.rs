//! HTTP plumbing shared by the registry clients

use crate::config::ClientConfig;
use crate::error::{RegistryError, Result};
use crate::manifest::{manifest_accept_header, ConfigBlob, Manifest};
use crate::types::BearerToken;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use tracing::{debug, trace};
use url::Url;

/// Build the HTTP client used for every call of one invocation.
///
/// Idle connections are not kept, so each call opens its own connection.
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .pool_max_idle_per_host(0)
        .build()?;
    Ok(client)
}

/// Registry v2 API access for a single host
#[derive(Debug, Clone)]
pub(crate) struct RegistryApi {
    client: reqwest::Client,
    base_url: String,
}

impl RegistryApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn manifest_url(&self, repository: &str, tag: &str) -> String {
        format!("{}/v2/{}/manifests/{}", self.base_url, repository, tag)
    }

    pub fn blob_url(&self, repository: &str, digest: &str) -> String {
        format!("{}/v2/{}/blobs/{}", self.base_url, repository, digest)
    }

    /// GET the manifest for `repository:tag`. Never retried.
    pub async fn get_manifest(
        &self,
        repository: &str,
        tag: &str,
        token: Option<&BearerToken>,
    ) -> Result<Manifest> {
        let url = self.manifest_url(repository, tag);
        debug!("Fetching manifest from: {}", url);

        let mut headers = auth_headers(token)?;
        let accept = HeaderValue::from_str(&manifest_accept_header())
            .map_err(|e| RegistryError::manifest_fetch_failed(&url, e.to_string()))?;
        headers.insert(ACCEPT, accept);

        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| RegistryError::manifest_fetch_failed(&url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::manifest_fetch_failed(
                &url,
                format!("{} for url: {}", status, url),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RegistryError::manifest_fetch_failed(&url, e.to_string()))?;

        let manifest = Manifest::from_slice(&body).map_err(|e| {
            RegistryError::manifest_fetch_failed(&url, format!("invalid manifest JSON: {}", e))
        })?;

        trace!("Manifest for {}:{}: {:?}", repository, tag, manifest);
        Ok(manifest)
    }

    /// GET the config blob `digest` of `repository`
    pub async fn get_blob(
        &self,
        repository: &str,
        digest: &str,
        token: Option<&BearerToken>,
    ) -> Result<ConfigBlob> {
        let url = self.blob_url(repository, digest);
        debug!("Fetching config blob from: {}", url);

        let response = self
            .client
            .get(&url)
            .headers(auth_headers(token)?)
            .send()
            .await
            .map_err(|e| RegistryError::blob_fetch_failed(digest, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::blob_fetch_failed(
                digest,
                format!("{} for url: {}", status, url),
            ));
        }

        response
            .json::<ConfigBlob>()
            .await
            .map_err(|e| RegistryError::blob_fetch_failed(digest, e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
}

/// Fetch an anonymous pull token from a Docker-style token service.
///
/// Errors are returned as plain messages; callers wrap them with their own
/// registry-specific prefix.
pub(crate) async fn request_token(
    client: &reqwest::Client,
    token_url: &str,
    params: &[(&str, &str)],
) -> std::result::Result<BearerToken, String> {
    let url = Url::parse_with_params(token_url, params).map_err(|e| e.to_string())?;
    debug!("Requesting token from: {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("{} for url: {}", status, url));
    }

    let body: TokenResponse = response.json().await.map_err(|e| e.to_string())?;
    body.token
        .or(body.access_token)
        .filter(|t| !t.is_empty())
        .map(BearerToken::new)
        .ok_or_else(|| "token response did not contain a token".to_string())
}

fn auth_headers(token: Option<&BearerToken>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        let value = HeaderValue::from_str(&token.header_value()).map_err(|_| {
            RegistryError::auth_failed("registry", "token contains invalid header characters")
        })?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}
