// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::DocumentRepository;
use crate::domain::{Document, DomainError, TranscriptSegment};

enum TranscriptBehavior {
    Segments(Vec<TranscriptSegment>),
    Failure(u16, String),
}

/// Shared mock repository for testing use cases that depend on DocumentRepository
///
/// Documents are served newest first in the order they were added, honouring
/// `limit` and `offset` like the real listing endpoint.
///
/// # Examples
///
/// ```
/// use granolaview::util::testing::MockDocumentRepository;
/// use granolaview::domain::{Document, TranscriptSegment, TranscriptSource};
///
/// let mock = MockDocumentRepository::builder()
///     .with_document(Document::new("doc-1", "Sam 1:1", "2024-02-01T10:00:00Z"))
///     .with_transcript(
///         "doc-1",
///         vec![TranscriptSegment::new(TranscriptSource::Microphone, "Hi Sam")],
///     )
///     .build();
/// ```
pub struct MockDocumentRepository {
    documents: Vec<Document>,
    transcripts: HashMap<String, TranscriptBehavior>,
    list_failure: Option<(u16, String)>,
}

impl MockDocumentRepository {
    pub fn builder() -> MockDocumentRepositoryBuilder {
        MockDocumentRepositoryBuilder::new()
    }
}

#[async_trait]
impl DocumentRepository for MockDocumentRepository {
    async fn list_documents(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Document>, DomainError> {
        if let Some((status, body)) = &self.list_failure {
            return Err(DomainError::TransportError {
                status: *status,
                body: body.clone(),
            });
        }

        Ok(self
            .documents
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_transcript(
        &self,
        document_id: &str,
    ) -> Result<Vec<TranscriptSegment>, DomainError> {
        match self.transcripts.get(document_id) {
            Some(TranscriptBehavior::Segments(segments)) => Ok(segments.clone()),
            Some(TranscriptBehavior::Failure(status, body)) => Err(DomainError::TransportError {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(vec![]),
        }
    }
}

/// Builder for MockDocumentRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockDocumentRepositoryBuilder {
    documents: Vec<Document>,
    transcripts: HashMap<String, TranscriptBehavior>,
    list_failure: Option<(u16, String)>,
}

impl MockDocumentRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            documents: vec![],
            transcripts: HashMap::new(),
            list_failure: None,
        }
    }

    /// Append a document; earlier documents count as more recent
    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Configure get_transcript to return segments for a specific ID
    pub fn with_transcript(mut self, document_id: &str, segments: Vec<TranscriptSegment>) -> Self {
        self.transcripts
            .insert(document_id.to_string(), TranscriptBehavior::Segments(segments));
        self
    }

    /// Configure get_transcript to fail with an HTTP status for a specific ID
    pub fn with_transcript_failure(mut self, document_id: &str, status: u16, body: &str) -> Self {
        self.transcripts.insert(
            document_id.to_string(),
            TranscriptBehavior::Failure(status, body.to_string()),
        );
        self
    }

    /// Configure list_documents to fail with an HTTP status
    pub fn with_list_failure(mut self, status: u16, body: &str) -> Self {
        self.list_failure = Some((status, body.to_string()));
        self
    }

    pub fn build(self) -> MockDocumentRepository {
        MockDocumentRepository {
            documents: self.documents,
            transcripts: self.transcripts,
            list_failure: self.list_failure,
        }
    }
}

impl Default for MockDocumentRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "mio", "wiremock"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
