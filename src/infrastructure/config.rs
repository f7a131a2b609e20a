// src/infrastructure/config.rs
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CLIENT_VERSION, DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT,
    DEFAULT_USER_AGENT, MEETING_SEARCH_WINDOW, NOTES_LOOKUP_WINDOW,
};
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for granolaview
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_client_version")]
    pub client_version: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct CredentialsConfig {
    /// Token file; the desktop app's default location when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LimitsConfig {
    #[serde(default = "default_notes_lookup_window")]
    pub notes_lookup_window: usize,
    #[serde(default = "default_meeting_search_window")]
    pub meeting_search_window: usize,
    #[serde(default = "default_list_limit")]
    pub default_list_limit: usize,
    #[serde(default = "default_search_limit")]
    pub default_search_limit: usize,
}

// Default value functions
fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_user_agent() -> String { DEFAULT_USER_AGENT.to_string() }
fn default_client_version() -> String { DEFAULT_CLIENT_VERSION.to_string() }
fn default_notes_lookup_window() -> usize { NOTES_LOOKUP_WINDOW }
fn default_meeting_search_window() -> usize { MEETING_SEARCH_WINDOW }
fn default_list_limit() -> usize { DEFAULT_LIST_LIMIT }
fn default_search_limit() -> usize { DEFAULT_SEARCH_LIMIT }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            client_version: default_client_version(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            notes_lookup_window: default_notes_lookup_window(),
            meeting_search_window: default_meeting_search_window(),
            default_list_limit: default_list_limit(),
            default_search_limit: default_search_limit(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            DomainError::ConfigError(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Load an explicitly requested file, or the default location if it exists.
    ///
    /// A missing default file yields the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, DomainError> {
        if let Some(path) = explicit {
            debug!(?path, "Loading explicit config file");
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading default config file");
                Self::load(path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("granolaview").join("config.toml"))
}
