// src/infrastructure/mod.rs
pub mod api_client;
pub mod config;
pub mod credentials;
pub mod granola;

pub use api_client::ApiClient;
pub use config::Config;
pub use credentials::CredentialStore;
pub use granola::GranolaRepository;
