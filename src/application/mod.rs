// src/application/mod.rs
pub mod document_lister;
pub mod document_viewer;
pub mod matcher;
pub mod meeting_finder;

pub use document_lister::DocumentLister;
pub use document_viewer::{DocumentContent, DocumentRepository, DocumentViewer};
pub use meeting_finder::{Meeting, MeetingFinder};
