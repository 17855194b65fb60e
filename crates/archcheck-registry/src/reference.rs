//! Registry detection and image reference parsing

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry an image reference belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    DockerHub,
    Ghcr,
    Quay,
    Unsupported,
}

impl RegistryKind {
    /// Literal host prefix stripped from references (e.g. "ghcr.io/")
    pub fn host_prefix(&self) -> Option<&'static str> {
        match self {
            Self::DockerHub => Some("docker.io/"),
            Self::Ghcr => Some("ghcr.io/"),
            Self::Quay => Some("quay.io/"),
            Self::Unsupported => None,
        }
    }

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::DockerHub => "DockerHub",
            Self::Ghcr => "GHCR",
            Self::Quay => "Quay.io",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a raw image reference by registry.
///
/// Known host prefixes win. Otherwise a reference with at most one `/`
/// whose first segment has no `.` is a DockerHub name; anything else points
/// at a custom registry domain.
pub fn detect_registry(image: &str) -> RegistryKind {
    if image.starts_with("ghcr.io/") {
        return RegistryKind::Ghcr;
    }
    if image.starts_with("quay.io/") {
        return RegistryKind::Quay;
    }
    if image.starts_with("docker.io/") {
        return RegistryKind::DockerHub;
    }

    if image.matches('/').count() <= 1 {
        let first = image.split('/').next().unwrap_or(image);
        if !first.contains('.') {
            return RegistryKind::DockerHub;
        }
    }

    RegistryKind::Unsupported
}

/// Container image reference resolved against a supported registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// Registry the reference belongs to
    pub registry: RegistryKind,
    /// Lower-cased repository path (e.g. "library/nginx")
    pub repository: String,
    /// Tag, "latest" when none was given
    pub tag: String,
}

impl ImageReference {
    /// Detect the registry of `image` and parse it.
    pub fn parse(image: &str) -> Result<Self> {
        Self::parse_for(image, detect_registry(image))
    }

    /// Parse `image` as a reference on `registry`.
    ///
    /// Only the exact host prefix is stripped, so host:port forms never
    /// reach this point (they detect as unsupported). The tag is split at
    /// the first colon.
    pub fn parse_for(image: &str, registry: RegistryKind) -> Result<Self> {
        let prefix = registry
            .host_prefix()
            .ok_or_else(|| RegistryError::unsupported(image))?;

        let rest = image.strip_prefix(prefix).unwrap_or(image);

        let (repository, tag) = match rest.split_once(':') {
            Some((repository, tag)) => (repository, tag),
            None => (rest, "latest"),
        };

        if repository.is_empty() {
            return Err(RegistryError::invalid_reference(
                image,
                "repository is empty",
            ));
        }
        if tag.is_empty() {
            return Err(RegistryError::invalid_reference(image, "tag is empty"));
        }

        let repository = if registry == RegistryKind::DockerHub && !repository.contains('/') {
            format!("library/{}", repository)
        } else {
            repository.to_string()
        };

        Ok(Self {
            registry,
            repository: repository.to_lowercase(),
            tag: tag.to_string(),
        })
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.registry.host_prefix().unwrap_or_default();
        write!(f, "{}{}:{}", prefix, self.repository, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_prefixes() {
        assert_eq!(detect_registry("ghcr.io/owner/image:v1"), RegistryKind::Ghcr);
        assert_eq!(detect_registry("quay.io/ns/image"), RegistryKind::Quay);
        assert_eq!(
            detect_registry("docker.io/library/nginx:1.27"),
            RegistryKind::DockerHub
        );
        // Deep paths are fine once the prefix is known
        assert_eq!(detect_registry("ghcr.io/a/b/c/d:tag"), RegistryKind::Ghcr);
    }

    #[test]
    fn test_detect_implicit_dockerhub() {
        assert_eq!(detect_registry("nginx"), RegistryKind::DockerHub);
        assert_eq!(detect_registry("nginx:latest"), RegistryKind::DockerHub);
        assert_eq!(detect_registry("ubuntu/nginx:latest"), RegistryKind::DockerHub);
        assert_eq!(detect_registry("myorg/tool:v1.2"), RegistryKind::DockerHub);
    }

    #[test]
    fn test_detect_unsupported() {
        let cases = [
            "registry.example.com/app",
            "gcr.io/project/image:tag",
            "myregistry:5000/team/image:tag",
            "a/b/c",
            "my.image",
        ];
        for image in cases {
            assert_eq!(
                detect_registry(image),
                RegistryKind::Unsupported,
                "expected {} to be unsupported",
                image
            );
        }
    }

    #[test]
    fn test_parse_strips_prefix() {
        let cases = [
            ("ghcr.io/Owner/Image:v1", RegistryKind::Ghcr, "owner/image", "v1"),
            ("quay.io/coreos/etcd", RegistryKind::Quay, "coreos/etcd", "latest"),
            (
                "docker.io/library/nginx:1.27",
                RegistryKind::DockerHub,
                "library/nginx",
                "1.27",
            ),
        ];

        for (input, registry, repository, tag) in cases {
            let img = ImageReference::parse(input).unwrap();
            assert_eq!(img.registry, registry, "registry mismatch for {}", input);
            assert_eq!(img.repository, repository, "repository mismatch for {}", input);
            assert_eq!(img.tag, tag, "tag mismatch for {}", input);
        }
    }

    #[test]
    fn test_parse_official_image_gets_library_namespace() {
        let img = ImageReference::parse("Nginx").unwrap();
        assert_eq!(img.repository, "library/nginx");
        assert_eq!(img.tag, "latest");

        let img = ImageReference::parse("docker.io/redis:7-Alpine").unwrap();
        assert_eq!(img.repository, "library/redis");
        // Tags keep their case
        assert_eq!(img.tag, "7-Alpine");
    }

    #[test]
    fn test_parse_two_segment_name_kept() {
        let img = ImageReference::parse("MyOrg/Tool:v1").unwrap();
        assert_eq!(img.registry, RegistryKind::DockerHub);
        assert_eq!(img.repository, "myorg/tool");
        assert_eq!(img.tag, "v1");
    }

    #[test]
    fn test_parse_ghcr_single_segment_has_no_library_prefix() {
        let img = ImageReference::parse("ghcr.io/tool").unwrap();
        assert_eq!(img.repository, "tool");
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        let img = ImageReference::parse("quay.io/ns/app:v1:extra").unwrap();
        assert_eq!(img.repository, "ns/app");
        assert_eq!(img.tag, "v1:extra");
    }

    #[test]
    fn test_parse_rejects_unsupported_and_empty_parts() {
        assert!(matches!(
            ImageReference::parse("registry.example.com/app:1"),
            Err(RegistryError::UnsupportedRegistry { .. })
        ));
        assert!(matches!(
            ImageReference::parse("nginx:"),
            Err(RegistryError::InvalidReference { .. })
        ));
        assert!(matches!(
            ImageReference::parse("ghcr.io/:v1"),
            Err(RegistryError::InvalidReference { .. })
        ));
    }

    #[test]
    fn test_image_reference_display() {
        let img = ImageReference::parse("nginx").unwrap();
        assert_eq!(img.to_string(), "docker.io/library/nginx:latest");

        let img = ImageReference::parse("ghcr.io/owner/image:v3.0.0").unwrap();
        assert_eq!(format!("{}", img), "ghcr.io/owner/image:v3.0.0");
    }
}
