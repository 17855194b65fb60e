//! Client configuration: endpoints, timeouts and credentials

use std::time::Duration;

/// Environment variable holding a GHCR bearer token
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable holding a Quay.io bearer token
pub const QUAY_TOKEN_ENV: &str = "QUAY_TOKEN";

/// Timeout applied to every registry HTTP call
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Base URLs of the registries and token services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// DockerHub token service
    pub dockerhub_auth: String,
    /// DockerHub registry API
    pub dockerhub_registry: String,
    /// GHCR registry API, also serving `/token`
    pub ghcr: String,
    /// Quay.io registry API
    pub quay: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            dockerhub_auth: "https://auth.docker.io".to_string(),
            dockerhub_registry: "https://registry-1.docker.io".to_string(),
            ghcr: "https://ghcr.io".to_string(),
            quay: "https://quay.io".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every endpoint at one base URL (mock registries)
    pub fn all(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            dockerhub_auth: base_url.clone(),
            dockerhub_registry: base_url.clone(),
            ghcr: base_url.clone(),
            quay: base_url,
        }
    }
}

/// Optional user-provided tokens
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub github_token: Option<String>,
    pub quay_token: Option<String>,
}

impl Credentials {
    /// Read `GITHUB_TOKEN` and `QUAY_TOKEN`; empty values count as unset
    pub fn from_env() -> Self {
        Self {
            github_token: non_empty_env(GITHUB_TOKEN_ENV),
            quay_token: non_empty_env(QUAY_TOKEN_ENV),
        }
    }

    pub fn with_github_token(mut self, token: impl Into<String>) -> Self {
        self.github_token = Some(token.into());
        self
    }

    pub fn with_quay_token(mut self, token: impl Into<String>) -> Self {
        self.quay_token = Some(token.into());
        self
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("github_token", &self.github_token.as_ref().map(|_| "***"))
            .field("quay_token", &self.quay_token.as_ref().map(|_| "***"))
            .finish()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Configuration shared by all registry clients
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    pub credentials: Credentials,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            credentials: Credentials::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Default endpoints with credentials taken from the environment
    pub fn from_env() -> Self {
        Self::default().with_credentials(Credentials::from_env())
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_user_agent() -> String {
    format!("archcheck/{}", env!("CARGO_PKG_VERSION"))
}
