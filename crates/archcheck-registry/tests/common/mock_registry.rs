//! Mock registry helpers
//!
//! One wiremock server plays every upstream: token services, registry
//! manifests and blobs. Point a client at it with [`mock_config`].

use archcheck_registry::{ClientConfig, Credentials, Endpoints};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use super::constants::*;

/// Client config with every endpoint on `server` and no credentials
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_endpoints(Endpoints::all(server.uri()))
}

/// Client config on `server` with the given credentials
pub fn mock_config_with(server: &MockServer, credentials: Credentials) -> ClientConfig {
    mock_config(server).with_credentials(credentials)
}

/// DockerHub token endpoint answering with `token` for `repository`
pub async fn mock_dockerhub_token(server: &MockServer, repository: &str, token: &str) {
    Mock::given(method("GET"))
        .and(path("/token"))
        .and(query_param("service", "registry.docker.io"))
        .and(query_param("scope", format!("repository:{}:pull", repository)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": token,
            "access_token": token,
            "expires_in": 300,
            "issued_at": "2026-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// GHCR anonymous token endpoint answering with `token` for `repository`
pub async fn mock_ghcr_token(server: &MockServer, repository: &str, token: &str) {
    Mock::given(method("GET"))
        .and(path("/token"))
        .and(query_param("scope", format!("repository:{}:pull", repository)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
        .expect(1)
        .mount(server)
        .await;
}

/// Token endpoint failing with `status`
pub async fn mock_token_failure(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Matches requests whose Accept header is exactly [`MANIFEST_ACCEPT`].
///
/// Compared as one raw string since the header matcher splits on commas.
fn accepts_all_manifest_types(request: &Request) -> bool {
    request
        .headers
        .get("accept")
        .and_then(|v| v.to_str().ok())
        == Some(MANIFEST_ACCEPT)
}

/// Manifest endpoint requiring the Accept header and `Bearer <token>`
pub async fn mock_manifest(
    server: &MockServer,
    repository: &str,
    tag: &str,
    token: &str,
    body: Value,
) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/{}/manifests/{}", repository, tag)))
        .and(accepts_all_manifest_types)
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Manifest endpoint that only checks the Accept header
pub async fn mock_manifest_any_auth(server: &MockServer, repository: &str, tag: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/{}/manifests/{}", repository, tag)))
        .and(accepts_all_manifest_types)
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Manifest endpoint failing with `status`
pub async fn mock_manifest_failure(server: &MockServer, repository: &str, tag: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/{}/manifests/{}", repository, tag)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Blob endpoint answering `body` for `digest`, expected `times` times
pub async fn mock_blob(server: &MockServer, repository: &str, digest: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/{}/blobs/{}", repository, digest)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Blob endpoint failing with `status`
pub async fn mock_blob_failure(server: &MockServer, repository: &str, digest: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/{}/blobs/{}", repository, digest)))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

/// Whether any request received by `server` carried an Authorization header
pub async fn any_request_had_auth(server: &MockServer) -> bool {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .any(|r| r.headers.contains_key("authorization"))
}
