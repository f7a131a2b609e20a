// src/application/meeting_finder.rs
use crate::application::document_viewer::{notes_of, DocumentContent};
use crate::application::{matcher, DocumentRepository, DocumentViewer};
use crate::constants::MEETING_SEARCH_WINDOW;
use crate::domain::{Document, DomainError};
use tracing::{info, instrument};

/// The latest 1:1 with a person, together with its notes or transcript.
#[derive(Debug)]
pub struct Meeting {
    pub document: Document,
    pub content: DocumentContent,
}

pub struct MeetingFinder<R: DocumentRepository> {
    viewer: DocumentViewer<R>,
    search_window: usize,
}

impl<R: DocumentRepository> MeetingFinder<R> {
    pub fn new(repository: R) -> Self {
        Self {
            viewer: DocumentViewer::new(repository),
            search_window: MEETING_SEARCH_WINDOW,
        }
    }

    /// Number of recent documents considered when looking for a 1:1.
    pub fn with_search_window(mut self, search_window: usize) -> Self {
        self.search_window = search_window;
        self
    }

    /// Find the most recent 1:1 whose title mentions `person`.
    ///
    /// Listing failures propagate; a missing transcript or notes does not.
    #[instrument(level = "debug", skip(self))]
    pub async fn find_latest_meeting_with(
        &self,
        person: &str,
        include_transcript: bool,
    ) -> Result<Option<Meeting>, DomainError> {
        let documents = self
            .viewer
            .repository()
            .list_documents(self.search_window, 0)
            .await?;

        let Some(document) = matcher::find_latest_meeting_with(documents, person) else {
            info!(person, window = self.search_window, "No 1:1 meeting found");
            return Ok(None);
        };
        info!(person, document_id = %document.id, "Found latest 1:1 meeting");

        let content = if include_transcript {
            DocumentContent::Transcript(self.viewer.get_transcript(&document.id).await)
        } else {
            DocumentContent::Notes(notes_of(&document))
        };

        Ok(Some(Meeting { document, content }))
    }
}
