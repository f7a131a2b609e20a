// src/infrastructure/credentials.rs
use crate::constants::{CREDENTIALS_RELATIVE_PATH, TOKENS_FIELD};
use crate::domain::DomainError;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

/// Loads the bearer token the Granola desktop app stores on disk.
///
/// The file is read at most once; the token is then reused for the lifetime of
/// the store. Concurrent first calls are serialized by the cell, so every caller
/// observes the same token.
pub struct CredentialStore {
    path: PathBuf,
    token: OnceCell<String>,
}

impl CredentialStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            token: OnceCell::new(),
        }
    }

    /// Store pre-seeded with a token; never touches the filesystem.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            path: PathBuf::new(),
            token: OnceCell::new_with(Some(token.into())),
        }
    }

    pub async fn token(&self) -> Result<&str, DomainError> {
        self.token
            .get_or_try_init(|| load_token(&self.path))
            .await
            .map(String::as_str)
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("path", &self.path)
            .field("loaded", &self.token.initialized())
            .finish()
    }
}

#[instrument(level = "debug")]
async fn load_token(path: &Path) -> Result<String, DomainError> {
    debug!(?path, "Reading credentials file");

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DomainError::ConfigError(format!(
                "Credentials file not found: {}. Is the Granola app installed and signed in?",
                path.display()
            )));
        }
        Err(e) => {
            return Err(DomainError::ConfigError(format!(
                "Failed to read credentials file {}: {}",
                path.display(),
                e
            )));
        }
    };

    let token = parse_access_token(&raw)?;
    info!(?path, "Loaded Granola access token");
    Ok(token)
}

/// Extract `access_token` from the token file contents.
///
/// `workos_tokens` normally holds JSON-encoded text; an already-decoded object
/// is accepted as well.
pub fn parse_access_token(raw: &str) -> Result<String, DomainError> {
    let outer: Value = serde_json::from_str(raw)
        .map_err(|e| DomainError::ParseError(format!("Invalid credentials file: {}", e)))?;

    let tokens = match outer.get(TOKENS_FIELD) {
        Some(Value::String(encoded)) => serde_json::from_str::<Value>(encoded).map_err(|e| {
            DomainError::ParseError(format!("Invalid {} payload: {}", TOKENS_FIELD, e))
        })?,
        Some(value @ Value::Object(_)) => value.clone(),
        Some(_) | None => {
            return Err(DomainError::AuthError(format!(
                "No {} found in credentials file",
                TOKENS_FIELD
            )));
        }
    };

    tokens
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| DomainError::AuthError("No access_token found in tokens".to_string()))
}

pub fn default_credentials_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Could not find application data directory")?;
    Ok(data_dir.join(CREDENTIALS_RELATIVE_PATH))
}
