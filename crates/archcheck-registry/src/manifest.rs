//! Manifest and config blob documents returned by registries

use serde::{Deserialize, Serialize};

/// OCI image index (multi-arch)
pub const OCI_IMAGE_INDEX_MEDIA_TYPE: &str = "application/vnd.oci.image.index.v1+json";

/// Docker manifest list (multi-arch)
pub const DOCKER_MANIFEST_LIST_MEDIA_TYPE: &str =
    "application/vnd.docker.distribution.manifest.list.v2+json";

/// OCI image manifest (single-arch)
pub const OCI_IMAGE_MANIFEST_MEDIA_TYPE: &str = "application/vnd.oci.image.manifest.v1+json";

/// Docker image manifest schema 2 (single-arch)
pub const DOCKER_MANIFEST_V2_MEDIA_TYPE: &str =
    "application/vnd.docker.distribution.manifest.v2+json";

/// Accept header value for manifest requests, indexes first
pub fn manifest_accept_header() -> String {
    [
        OCI_IMAGE_INDEX_MEDIA_TYPE,
        DOCKER_MANIFEST_LIST_MEDIA_TYPE,
        OCI_IMAGE_MANIFEST_MEDIA_TYPE,
        DOCKER_MANIFEST_V2_MEDIA_TYPE,
    ]
    .join(", ")
}

/// Platform of an index entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
}

/// Entry of an image index / manifest list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDescriptor {
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub platform: Option<Platform>,
}

/// Config descriptor of a single-arch manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDescriptor {
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub digest: Option<String>,
}

impl ConfigDescriptor {
    pub fn media_type(&self) -> &str {
        self.media_type.as_deref().unwrap_or_default()
    }
}

/// A manifest in one of its two recognized shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Manifest {
    /// Multi-arch index with platform-tagged entries
    Index {
        manifests: Vec<ManifestDescriptor>,
        artifact_type: Option<String>,
    },
    /// Single-arch manifest pointing at a config blob
    Image {
        config: ConfigDescriptor,
        artifact_type: Option<String>,
    },
    /// Neither shape applies
    Unrecognized {
        config_media_type: Option<String>,
        artifact_type: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawManifest {
    #[serde(default)]
    manifests: Option<Vec<ManifestDescriptor>>,
    #[serde(default)]
    config: Option<serde_json::Value>,
    #[serde(default)]
    artifact_type: Option<String>,
}

impl Manifest {
    /// Classify a manifest document.
    ///
    /// A non-empty `manifests` array makes an index; otherwise a non-empty
    /// `config` object makes a single-arch manifest.
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        let raw: RawManifest = serde_json::from_value(value)?;

        if let Some(manifests) = raw.manifests.filter(|m| !m.is_empty()) {
            return Ok(Self::Index {
                manifests,
                artifact_type: raw.artifact_type,
            });
        }

        match raw.config {
            Some(config) if config.as_object().is_some_and(|o| !o.is_empty()) => Ok(Self::Image {
                config: serde_json::from_value(config)?,
                artifact_type: raw.artifact_type,
            }),
            other => Ok(Self::Unrecognized {
                config_media_type: other
                    .as_ref()
                    .and_then(|c| c.get("mediaType"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string),
                artifact_type: raw.artifact_type,
            }),
        }
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Media type of the config descriptor, if any
    pub fn config_media_type(&self) -> Option<&str> {
        match self {
            Self::Image { config, .. } => config.media_type.as_deref(),
            Self::Unrecognized {
                config_media_type, ..
            } => config_media_type.as_deref(),
            Self::Index { .. } => None,
        }
    }

    pub fn artifact_type(&self) -> Option<&str> {
        match self {
            Self::Index { artifact_type, .. }
            | Self::Image { artifact_type, .. }
            | Self::Unrecognized { artifact_type, .. } => artifact_type.as_deref(),
        }
    }
}

/// Image config blob, only the fields architecture resolution reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigBlob {
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
}
