// src/application/document_viewer.rs
use crate::constants::NOTES_LOOKUP_WINDOW;
use crate::domain::{ContentNode, Document, DomainError, Fetched, TranscriptSegment};
use crate::ports::MarkdownRenderer;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Fetch one page of the most recent documents, newest first as the service orders them.
    async fn list_documents(&self, limit: usize, offset: usize)
        -> Result<Vec<Document>, DomainError>;

    /// Fetch the raw transcript of a document. An empty list means no transcript.
    async fn get_transcript(&self, document_id: &str)
        -> Result<Vec<TranscriptSegment>, DomainError>;
}

/// What `show` prints for a document.
#[derive(Debug)]
pub enum DocumentContent {
    Notes(Fetched<String>),
    Transcript(Fetched<Vec<TranscriptSegment>>),
}

pub struct DocumentViewer<R: DocumentRepository> {
    repository: R,
    lookup_window: usize,
}

impl<R: DocumentRepository> DocumentViewer<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            lookup_window: NOTES_LOOKUP_WINDOW,
        }
    }

    /// Number of recent documents scanned by `get_notes`.
    pub fn with_lookup_window(mut self, lookup_window: usize) -> Self {
        self.lookup_window = lookup_window;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Notes of a document, searched among the `lookup_window` most recent ones.
    ///
    /// A document outside the window is reported as `Absent` even if it has notes.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_notes(&self, document_id: &str) -> Fetched<String> {
        let documents = match self.repository.list_documents(self.lookup_window, 0).await {
            Ok(documents) => documents,
            Err(e) => return Fetched::Failed(e),
        };

        match documents.iter().find(|doc| doc.id == document_id) {
            Some(doc) => notes_of(doc),
            None => {
                debug!(
                    document_id,
                    window = self.lookup_window,
                    "Document not among recent documents"
                );
                Fetched::Absent
            }
        }
    }

    /// Notes, or the transcript when `include_transcript` is set.
    pub async fn get_content(&self, document_id: &str, include_transcript: bool) -> DocumentContent {
        if include_transcript {
            DocumentContent::Transcript(self.get_transcript(document_id).await)
        } else {
            DocumentContent::Notes(self.get_notes(document_id).await)
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_transcript(&self, document_id: &str) -> Fetched<Vec<TranscriptSegment>> {
        match self.repository.get_transcript(document_id).await {
            Ok(segments) if segments.is_empty() => Fetched::Absent,
            Ok(segments) => {
                info!(document_id, segments = segments.len(), "Fetched transcript");
                Fetched::Found(segments)
            }
            Err(e) => Fetched::Failed(e),
        }
    }
}

/// Notes carried by an already-fetched document.
///
/// Pre-rendered Markdown wins; otherwise the content tree is rendered.
pub fn notes_of(doc: &Document) -> Fetched<String> {
    if let Some(markdown) = doc.prerendered_notes() {
        return Fetched::Found(markdown.to_string());
    }

    match doc.content_tree() {
        Some(tree) => match serde_json::from_value::<ContentNode>(tree.clone()) {
            Ok(node) => Fetched::Found(MarkdownRenderer::new().render(Some(&node))),
            Err(e) => Fetched::Failed(DomainError::ParseError(format!(
                "Invalid content tree for document {}: {}",
                doc.id, e
            ))),
        },
        None => Fetched::Absent,
    }
}
