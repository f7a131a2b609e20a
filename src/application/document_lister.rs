// src/application/document_lister.rs
use crate::application::{matcher, DocumentRepository};
use crate::constants::{DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT};
use crate::domain::{DocumentSummary, DomainError};
use tracing::{debug, info};

pub struct DocumentLister<R: DocumentRepository> {
    repository: R,
}

impl<R: DocumentRepository> DocumentLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List the most recent documents
    ///
    /// # Arguments
    /// * `limit` - Number of documents to fetch, `DEFAULT_LIST_LIMIT` when `None`
    pub async fn list_recent(&self, limit: Option<usize>) -> Result<Vec<DocumentSummary>, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let documents = self.repository.list_documents(limit, 0).await?;
        info!(count = documents.len(), limit, "Listed recent documents");
        Ok(documents.iter().map(|doc| doc.summary()).collect())
    }

    /// Search titles among the `limit` most recent documents
    ///
    /// # Returns
    /// Matching documents in the order the service returned them
    pub async fn search(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<DocumentSummary>, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let documents = self.repository.list_documents(limit, 0).await?;
        debug!(fetched = documents.len(), query, "Searching document titles");

        let matches = matcher::search(documents, query);
        info!(matches = matches.len(), query, "Search complete");
        Ok(matches.iter().map(|doc| doc.summary()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Document;
    use crate::util::testing::MockDocumentRepository;

    fn repository() -> MockDocumentRepository {
        MockDocumentRepository::builder()
            .with_document(Document::new("1", "What is a Tree?", "2024-01-02T00:00:00Z"))
            .with_document(Document::new("2", "What is a Graph?", "2024-01-01T00:00:00Z"))
            .build()
    }

    #[tokio::test]
    async fn given_no_limit_when_listing_documents_then_returns_all_within_default() {
        // Arrange
        let lister = DocumentLister::new(repository());

        // Act
        let result = lister.list_recent(None).await.unwrap();

        // Assert
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "1");
        assert_eq!(result[0].title, "What is a Tree?");
        assert_eq!(result[0].created_at, "2024-01-02T00:00:00Z");
    }

    #[tokio::test]
    async fn given_limit_when_listing_documents_then_truncates() {
        let lister = DocumentLister::new(repository());

        let result = lister.list_recent(Some(1)).await.unwrap();

        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn given_search_query_when_searching_then_returns_filtered_documents() {
        // Arrange
        let lister = DocumentLister::new(repository());

        // Act
        let result = lister.search("tree", None).await.unwrap();

        // Assert
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[tokio::test]
    async fn given_no_match_when_searching_then_returns_empty() {
        let lister = DocumentLister::new(repository());

        let result = lister.search("standup", None).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn given_transport_failure_when_listing_then_propagates_error() {
        let mock = MockDocumentRepository::builder()
            .with_list_failure(401, "unauthorized")
            .build();
        let lister = DocumentLister::new(mock);

        let result = lister.list_recent(None).await;

        assert!(matches!(
            result,
            Err(DomainError::TransportError { status: 401, .. })
        ));
    }
}
