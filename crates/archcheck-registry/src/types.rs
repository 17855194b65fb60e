use serde::{Deserialize, Serialize};
use std::fmt;

/// Architecture reported when a single-arch image's config blob is unreadable
pub const UNKNOWN_ARCHITECTURE: &str = "unknown";

/// Bearer token for one invocation. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the Authorization header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl From<String> for BearerToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Why no architectures could be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyReason {
    /// Config media type names a Helm chart
    HelmChart,
    /// OCI artifact that is not a container image
    OciArtifact,
    /// Manifest shape not recognized, or no platform entries
    Unrecognized,
}

/// Architectures an image supports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "kebab-case")]
pub enum ArchitectureSet {
    /// Architectures in manifest order, duplicates preserved
    Resolved(Vec<String>),
    /// Nothing resolved
    Empty(EmptyReason),
}

impl ArchitectureSet {
    pub fn resolved<I, S>(architectures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Resolved(architectures.into_iter().map(Into::into).collect())
    }

    /// Fallback for single-arch images whose config blob couldn't be read
    pub fn unknown() -> Self {
        Self::resolved([UNKNOWN_ARCHITECTURE])
    }

    pub fn architectures(&self) -> &[String] {
        match self {
            Self::Resolved(archs) => archs,
            Self::Empty(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.architectures().is_empty()
    }

    pub fn contains(&self, arch: &str) -> bool {
        self.architectures().iter().any(|a| a == arch)
    }
}
