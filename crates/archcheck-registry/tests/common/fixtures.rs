//! JSON fixture loading helpers

use serde_json::Value;
use std::path::PathBuf;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file as JSON
pub fn load_fixture(filename: &str) -> Value {
    let path = fixtures_dir().join(filename);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture '{}': {}", path.display(), e));
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("Fixture '{}' is not valid JSON: {}", path.display(), e))
}

/// OCI index: amd64, arm64, arm/v7 and an attestation entry without platform
pub fn multi_arch_index() -> Value {
    load_fixture("oci_index_multi_arch.json")
}

/// Docker manifest list with a single amd64 entry
pub fn amd64_only_manifest_list() -> Value {
    load_fixture("manifest_list_amd64_only.json")
}

/// Docker v2 single-arch manifest whose config digest is `sha256:abc`
pub fn single_arch_manifest() -> Value {
    load_fixture("single_arch_manifest.json")
}

/// Helm chart pushed as an OCI artifact
pub fn helm_chart_manifest() -> Value {
    load_fixture("helm_chart_manifest.json")
}

/// Image config blob for linux/arm64
pub fn arm64_config_blob() -> Value {
    load_fixture("config_blob_arm64.json")
}
