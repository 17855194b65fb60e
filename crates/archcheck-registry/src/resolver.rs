//! Reduce a manifest to the architectures an image supports

use crate::manifest::{ConfigDescriptor, Manifest, ManifestDescriptor};
use crate::registry::RegistryClient;
use crate::types::{ArchitectureSet, BearerToken, EmptyReason};
use tracing::{debug, warn};

/// What the resolver needs to read a single-arch image's config blob
pub struct BlobLookup<'a> {
    pub client: &'a dyn RegistryClient,
    pub repository: &'a str,
    pub token: Option<&'a BearerToken>,
}

/// Resolve the architectures described by `manifest`.
///
/// Indexes are read directly. Single-arch manifests need the config blob,
/// which is only fetched when `blob_lookup` is given; an unreadable blob
/// yields `["unknown"]` rather than an error.
pub async fn resolve_architectures(
    manifest: &Manifest,
    blob_lookup: Option<BlobLookup<'_>>,
) -> ArchitectureSet {
    match manifest {
        Manifest::Index { manifests, .. } => {
            let archs = index_architectures(manifests);
            if archs.is_empty() {
                debug!("Index has no platform entries");
                ArchitectureSet::Empty(empty_reason(manifest))
            } else {
                ArchitectureSet::Resolved(archs)
            }
        }
        Manifest::Image { config, .. } => resolve_single_arch(config, blob_lookup).await,
        Manifest::Unrecognized { .. } => ArchitectureSet::Empty(empty_reason(manifest)),
    }
}

fn index_architectures(manifests: &[ManifestDescriptor]) -> Vec<String> {
    manifests
        .iter()
        .filter_map(|m| m.platform.as_ref())
        .filter_map(|p| p.architecture.clone())
        .collect()
}

async fn resolve_single_arch(
    config: &ConfigDescriptor,
    blob_lookup: Option<BlobLookup<'_>>,
) -> ArchitectureSet {
    if let Some(reason) = non_image_reason(config.media_type()) {
        debug!("Config media type {} is not a container image", config.media_type());
        return ArchitectureSet::Empty(reason);
    }

    let (Some(lookup), Some(digest)) = (blob_lookup, config.digest.as_deref()) else {
        debug!("Config blob not consulted, architecture unknown");
        return ArchitectureSet::unknown();
    };

    match lookup
        .client
        .fetch_blob(lookup.repository, digest, lookup.token)
        .await
    {
        Ok(blob) => match blob.architecture {
            Some(arch) if !arch.is_empty() => ArchitectureSet::Resolved(vec![arch]),
            _ => {
                warn!("Config blob {} has no architecture field", digest);
                ArchitectureSet::unknown()
            }
        },
        Err(e) => {
            warn!("{}", e);
            ArchitectureSet::unknown()
        }
    }
}

fn non_image_reason(media_type: &str) -> Option<EmptyReason> {
    if media_type.contains("helm") {
        Some(EmptyReason::HelmChart)
    } else if media_type.contains("artifact") {
        Some(EmptyReason::OciArtifact)
    } else {
        None
    }
}

/// Classify a manifest that resolved to no architectures
pub fn empty_reason(manifest: &Manifest) -> EmptyReason {
    if let Some(reason) = manifest.config_media_type().and_then(non_image_reason) {
        return reason;
    }
    if manifest.artifact_type().is_some() {
        EmptyReason::OciArtifact
    } else {
        EmptyReason::Unrecognized
    }
}
