//! Shared constants for registry tests

// Repositories as sent on the wire
pub const REPO_NGINX: &str = "library/nginx";
pub const REPO_MYORG_TOOL: &str = "myorg/tool";
pub const REPO_GHCR_APP: &str = "owner/app";
pub const REPO_QUAY_APP: &str = "ns/app";
pub const REPO_GHCR_CHART: &str = "owner/charts/web";

// Tags
pub const TAG_LATEST: &str = "latest";
pub const TAG_V1: &str = "v1";

// Tokens
pub const ANON_TOKEN: &str = "anon-token-123";
pub const GITHUB_USER_TOKEN: &str = "ghp_usertoken";
pub const QUAY_USER_TOKEN: &str = "quay-robot-token";

// Digests
pub const CONFIG_DIGEST: &str = "sha256:abc";

/// Accept header every manifest request must carry
pub const MANIFEST_ACCEPT: &str = "application/vnd.oci.image.index.v1+json, \
    application/vnd.docker.distribution.manifest.list.v2+json, \
    application/vnd.oci.image.manifest.v1+json, \
    application/vnd.docker.distribution.manifest.v2+json";
