// src/infrastructure/granola.rs
use crate::application::DocumentRepository;
use crate::constants::{LIST_DOCUMENTS_ENDPOINT, TRANSCRIPT_ENDPOINT};
use crate::domain::{Document, DomainError, TranscriptSegment};
use crate::infrastructure::config::Config;
use crate::infrastructure::credentials::default_credentials_path;
use crate::infrastructure::{ApiClient, CredentialStore};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Documents and transcripts served by the Granola API.
pub struct GranolaRepository {
    client: ApiClient,
}

impl GranolaRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Build a repository from config, letting `credentials_override` win over it.
    pub fn from_config(config: &Config, credentials_override: Option<PathBuf>) -> Result<Self> {
        let credentials_path = match credentials_override.or_else(|| config.credentials.path.clone()) {
            Some(path) => path,
            None => default_credentials_path()?,
        };
        debug!(?credentials_path, base_url = %config.api.base_url, "Creating GranolaRepository");

        let client = ApiClient::new(&config.api, CredentialStore::new(credentials_path));
        Ok(Self::new(client))
    }
}

#[async_trait]
impl DocumentRepository for GranolaRepository {
    #[instrument(level = "debug", skip(self))]
    async fn list_documents(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Document>, DomainError> {
        let body = json!({
            "limit": limit,
            "offset": offset,
            "include_last_viewed_panel": true,
        });
        let mut response = self.client.post(LIST_DOCUMENTS_ENDPOINT, &body).await?;

        let documents = match response.get_mut("docs").map(Value::take) {
            None | Some(Value::Null) => {
                debug!("Response carried no docs field");
                Vec::new()
            }
            Some(docs) => serde_json::from_value::<Vec<Document>>(docs)
                .map_err(|e| DomainError::ParseError(format!("Unexpected document shape: {}", e)))?,
        };

        info!(count = documents.len(), limit, offset, "Fetched documents");
        Ok(documents)
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_transcript(
        &self,
        document_id: &str,
    ) -> Result<Vec<TranscriptSegment>, DomainError> {
        let body = json!({ "document_id": document_id });
        let response = self.client.post(TRANSCRIPT_ENDPOINT, &body).await?;

        if response.is_null() {
            return Ok(Vec::new());
        }
        let segments: Vec<TranscriptSegment> = serde_json::from_value(response)
            .map_err(|e| DomainError::ParseError(format!("Unexpected transcript shape: {}", e)))?;

        debug!(document_id, segments = segments.len(), "Fetched transcript");
        Ok(segments)
    }
}
