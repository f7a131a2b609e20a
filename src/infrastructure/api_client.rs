// src/infrastructure/api_client.rs
use crate::domain::DomainError;
use crate::infrastructure::config::ApiConfig;
use crate::infrastructure::CredentialStore;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, trace};

/// Authenticated JSON client for the Granola API.
///
/// Every call is a single POST attempt: no retries, no client-side timeout.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
    client_version: String,
    credentials: CredentialStore,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, credentials: CredentialStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            client_version: config.client_version.clone(),
            credentials,
        }
    }

    #[instrument(level = "debug", skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Value, DomainError> {
        let token = self.credentials.token().await?;
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "Sending request");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(USER_AGENT, &self.user_agent)
            .header("X-Client-Version", &self.client_version)
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::NetworkError(format!("POST {} failed: {}", url, e)))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            DomainError::NetworkError(format!("Failed to read response from {}: {}", url, e))
        })?;
        debug!(status = status.as_u16(), bytes = text.len(), "Received response");

        if !status.is_success() {
            return Err(DomainError::TransportError {
                status: status.as_u16(),
                body: text,
            });
        }

        trace!(%text, "Response body");
        serde_json::from_str(&text).map_err(|e| {
            DomainError::ParseError(format!("Malformed JSON from {}: {}", endpoint, e))
        })
    }
}
