// src/ports/text.rs
use crate::application::{DocumentContent, Meeting};
use crate::domain::{DocumentSummary, TranscriptSegment, TranscriptSource};
use crate::util::text::format_long_date;

pub const NO_NOTES: &str = "No notes available for this document.";
pub const NO_TRANSCRIPT: &str = "No transcript available for this document.";
pub const NO_DOCUMENTS: &str = "No documents found.";

/// Plain-text output for the CLI commands.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_summaries(&self, summaries: &[DocumentSummary]) -> String {
        if summaries.is_empty() {
            return NO_DOCUMENTS.to_string();
        }
        summaries
            .iter()
            .map(|doc| format!("- {} ({}, created {})", doc.title, doc.id, doc.created_at))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_search_results(&self, query: &str, summaries: &[DocumentSummary]) -> String {
        if summaries.is_empty() {
            return format!("No documents found matching '{}'.", query);
        }
        self.render_summaries(summaries)
    }

    /// Segments separated by a blank line, prefixed by speaker.
    pub fn render_transcript(&self, segments: &[TranscriptSegment]) -> String {
        segments
            .iter()
            .map(|segment| match segment.source {
                TranscriptSource::Microphone => format!("**Me:** {}", segment.text),
                TranscriptSource::System => format!("**System:** {}", segment.text),
                TranscriptSource::Other(_) => segment.text.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Notes or transcript, or the matching "unavailable" message.
    pub fn render_content(&self, content: DocumentContent) -> String {
        match content {
            DocumentContent::Notes(notes) => notes.into_option().unwrap_or_else(|| NO_NOTES.to_string()),
            DocumentContent::Transcript(transcript) => transcript
                .into_option()
                .map(|segments| self.render_transcript(&segments))
                .unwrap_or_else(|| NO_TRANSCRIPT.to_string()),
        }
    }

    pub fn render_meeting(&self, person: &str, meeting: Option<Meeting>) -> String {
        let Some(Meeting { document, content }) = meeting else {
            return format!("No 1:1 meeting found with {}.", person);
        };

        format!(
            "# {}\n\n**Date:** {}\n\n{}",
            document.display_title(),
            format_long_date(&document.created_at),
            self.render_content(content)
        )
    }
}
