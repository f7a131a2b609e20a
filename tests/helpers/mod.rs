use anyhow::{Context, Result};
use granolaview::infrastructure::config::ApiConfig;
use granolaview::infrastructure::{ApiClient, Config, CredentialStore, GranolaRepository};
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-access-token";

/// Test fixture pairing a mock Granola API with a temporary credentials file
#[allow(dead_code)]
pub struct TestServer {
    _temp_dir: TempDir,
    pub server: MockServer,
    pub credentials_path: PathBuf,
}

#[allow(dead_code)]
impl TestServer {
    /// Start a mock server and write a valid credentials file
    pub async fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let credentials_path = temp_dir.path().join("supabase.json");
        std::fs::write(&credentials_path, credentials_json(TEST_TOKEN))
            .context("Failed to write credentials fixture")?;

        Ok(Self {
            _temp_dir: temp_dir,
            server: MockServer::start().await,
            credentials_path,
        })
    }

    pub fn config(&self) -> Config {
        Config {
            api: ApiConfig {
                base_url: self.server.uri(),
                ..ApiConfig::default()
            },
            ..Config::default()
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config().api, CredentialStore::new(&self.credentials_path))
    }

    pub fn repository(&self) -> GranolaRepository {
        GranolaRepository::new(self.client())
    }

    /// Serve `docs` from the listing endpoint
    pub async fn mount_documents(&self, docs: Value) {
        Mock::given(method("POST"))
            .and(path("/v2/get-documents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": docs })))
            .mount(&self.server)
            .await;
    }

    /// Serve `segments` from the transcript endpoint
    pub async fn mount_transcript(&self, segments: Value) {
        Mock::given(method("POST"))
            .and(path("/v1/get-document-transcript"))
            .respond_with(ResponseTemplate::new(200).set_body_json(segments))
            .mount(&self.server)
            .await;
    }
}

pub fn credentials_json(access_token: &str) -> String {
    let inner = json!({ "access_token": access_token, "expires_in": 3600 }).to_string();
    json!({ "workos_tokens": inner, "session_id": "s" }).to_string()
}

/// A document as the listing endpoint returns it
#[allow(dead_code)]
pub fn document_json(id: &str, title: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "created_at": created_at,
        "updated_at": created_at,
        "notes_markdown": null,
        "last_viewed_panel": null
    })
}
