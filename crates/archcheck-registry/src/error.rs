//! Error types for archcheck-registry

use thiserror::Error;

/// Result type alias using archcheck-registry's Error type
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised while talking to a container registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Reference does not belong to DockerHub, GHCR or Quay.io
    #[error("Unsupported registry: {registry}")]
    UnsupportedRegistry { reference: String, registry: String },

    /// Reference could not be split into repository and tag
    #[error("Invalid image reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },

    /// Token endpoint unreachable, non-2xx, or returned no token
    #[error("{message}")]
    AuthFailed { registry: String, message: String },

    /// Manifest endpoint unreachable, non-2xx, or returned garbage
    #[error("Failed to get manifest: {message}")]
    ManifestFetchFailed { url: String, message: String },

    /// Config blob could not be fetched
    #[error("Failed to fetch blob {digest}: {message}")]
    BlobFetchFailed { digest: String, message: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl RegistryError {
    /// Create an unsupported registry error.
    ///
    /// The registry name is the first path segment of the reference, or the
    /// whole reference when it has no `/`.
    pub fn unsupported(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        let registry = reference
            .split('/')
            .next()
            .unwrap_or(&reference)
            .to_string();
        Self::UnsupportedRegistry {
            reference,
            registry,
        }
    }

    /// Create an invalid reference error
    pub fn invalid_reference(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidReference {
            reference: reference.into(),
            reason: reason.into(),
        }
    }

    /// Create an auth failure error
    pub fn auth_failed(registry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AuthFailed {
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Create a manifest fetch failure error
    pub fn manifest_fetch_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ManifestFetchFailed {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a blob fetch failure error
    pub fn blob_fetch_failed(digest: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BlobFetchFailed {
            digest: digest.into(),
            message: message.into(),
        }
    }

    /// Whether the pipeline must stop on this error.
    ///
    /// Only blob failures degrade; everything else aborts the check.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::BlobFetchFailed { .. })
    }
}
