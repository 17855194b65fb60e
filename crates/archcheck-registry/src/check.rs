//! End-to-end architecture check for one image reference

use crate::config::ClientConfig;
use crate::error::{RegistryError, Result};
use crate::reference::{detect_registry, ImageReference, RegistryKind};
use crate::registry::{client_for, RegistryClient};
use crate::resolver::{resolve_architectures, BlobLookup};
use crate::types::{ArchitectureSet, EmptyReason};
use serde::Serialize;
use tracing::{debug, info};

/// Architectures every checked image must provide, in report order
pub const REQUIRED_ARCHITECTURES: &[&str] = &["amd64", "arm64"];

/// Comparison of resolved architectures against the required set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchitectureCheck {
    pub required: Vec<String>,
    /// Required architectures the image provides
    pub available: Vec<String>,
    /// Required architectures the image lacks
    pub missing: Vec<String>,
}

impl ArchitectureCheck {
    /// Compare `resolved` against [`REQUIRED_ARCHITECTURES`]
    pub fn evaluate(resolved: &[String]) -> Self {
        Self::evaluate_against(REQUIRED_ARCHITECTURES, resolved)
    }

    pub fn evaluate_against(required: &[&str], resolved: &[String]) -> Self {
        let (available, missing): (Vec<&str>, Vec<&str>) = required
            .iter()
            .copied()
            .partition(|arch| resolved.iter().any(|r| r.as_str() == *arch));

        Self {
            required: required.iter().map(|s| s.to_string()).collect(),
            available: available.into_iter().map(str::to_string).collect(),
            missing: missing.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Result of checking one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum CheckOutcome {
    /// Every required architecture is present
    Supported {
        image: String,
        registry: RegistryKind,
        architectures: Vec<String>,
    },
    /// Some required architectures are absent
    Missing {
        image: String,
        registry: RegistryKind,
        architectures: Vec<String>,
        missing: Vec<String>,
    },
    /// Helm chart or other OCI artifact
    NotAnImage {
        image: String,
        registry: RegistryKind,
        reason: EmptyReason,
    },
    /// Manifest shape unrecognized or without platforms
    NoArchitectures { image: String, registry: RegistryKind },
}

impl CheckOutcome {
    /// Build the outcome for `image` from its resolved architectures
    pub fn from_architectures(
        image: impl Into<String>,
        registry: RegistryKind,
        architectures: ArchitectureSet,
    ) -> Self {
        let image = image.into();
        match architectures {
            ArchitectureSet::Empty(EmptyReason::Unrecognized) => {
                Self::NoArchitectures { image, registry }
            }
            ArchitectureSet::Empty(reason) => Self::NotAnImage {
                image,
                registry,
                reason,
            },
            ArchitectureSet::Resolved(archs) if archs.is_empty() => {
                Self::NoArchitectures { image, registry }
            }
            ArchitectureSet::Resolved(architectures) => {
                let check = ArchitectureCheck::evaluate(&architectures);
                if check.is_satisfied() {
                    Self::Supported {
                        image,
                        registry,
                        architectures,
                    }
                } else {
                    Self::Missing {
                        image,
                        registry,
                        architectures,
                        missing: check.missing,
                    }
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Supported { .. })
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Check `image` against the required architectures.
///
/// Runs detect, parse, token, manifest and resolve in sequence. Fatal
/// failures (unsupported registry, bad reference, token or manifest
/// errors) are returned as `Err`; everything the registry answered is an
/// outcome.
pub async fn check_image(image: &str, config: &ClientConfig) -> Result<CheckOutcome> {
    let kind = detect_registry(image);
    if !kind.is_supported() {
        return Err(RegistryError::unsupported(image));
    }

    let reference = ImageReference::parse_for(image, kind)?;
    debug!(
        "Parsed {} as {} repository={} tag={}",
        image, kind, reference.repository, reference.tag
    );

    let client = client_for(kind, config)?;
    let architectures = resolve_reference(client.as_ref(), &reference).await?;

    info!("Resolved architectures for {}: {:?}", reference, architectures);
    Ok(CheckOutcome::from_architectures(image, kind, architectures))
}

/// Fetch and resolve the architectures of an already parsed reference.
///
/// The token is fetched once and reused for the blob lookup. Without a
/// token the config blob is not consulted.
pub async fn resolve_reference(
    client: &dyn RegistryClient,
    reference: &ImageReference,
) -> Result<ArchitectureSet> {
    let token = client.get_token(&reference.repository).await?;

    let manifest = client
        .fetch_manifest(&reference.repository, &reference.tag, token.as_ref())
        .await?;

    let lookup = token.as_ref().map(|token| BlobLookup {
        client,
        repository: &reference.repository,
        token: Some(token),
    });

    Ok(resolve_architectures(&manifest, lookup).await)
}
