// src/domain/mod.rs
pub mod content;
pub mod document;
pub mod error;
pub mod fetched;

pub use content::{ContentNode, Mark, MarkKind, NodeKind};
pub use document::{Document, DocumentSummary, Panel, TranscriptSegment, TranscriptSource};
pub use error::DomainError;
pub use fetched::Fetched;
