// src/domain/document.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const UNTITLED: &str = "Untitled";

/// A meeting document as returned by `get-documents`.
///
/// Content trees are kept as raw JSON and only parsed when notes are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub notes_markdown: Option<String>,
    #[serde(default)]
    pub notes: Option<Value>,
    #[serde(default)]
    pub last_viewed_panel: Option<Panel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    #[serde(default)]
    pub content: Option<Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            created_at: created_at.into(),
            updated_at: None,
            notes_markdown: None,
            notes: None,
            last_viewed_panel: None,
        }
    }

    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => UNTITLED,
        }
    }

    /// Pre-rendered Markdown, if the service supplied a non-empty one.
    pub fn prerendered_notes(&self) -> Option<&str> {
        self.notes_markdown.as_deref().filter(|md| !md.is_empty())
    }

    /// The structured notes tree: the last viewed panel first, then the raw notes.
    pub fn content_tree(&self) -> Option<&Value> {
        self.last_viewed_panel
            .as_ref()
            .and_then(|panel| panel.content.as_ref())
            .or(self.notes.as_ref())
            .filter(|value| !value.is_null())
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id.clone(),
            title: self.display_title().to_string(),
            created_at: self.created_at.clone(),
        }
    }
}

/// The projection shown by list and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TranscriptSource {
    Microphone,
    System,
    Other(String),
}

impl From<String> for TranscriptSource {
    fn from(source: String) -> Self {
        match source.as_str() {
            "microphone" => TranscriptSource::Microphone,
            "system" => TranscriptSource::System,
            _ => TranscriptSource::Other(source),
        }
    }
}

impl From<TranscriptSource> for String {
    fn from(source: TranscriptSource) -> Self {
        match source {
            TranscriptSource::Microphone => "microphone".to_string(),
            TranscriptSource::System => "system".to_string(),
            TranscriptSource::Other(other) => other,
        }
    }
}

impl Default for TranscriptSource {
    fn default() -> Self {
        TranscriptSource::Other(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: TranscriptSource,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default)]
    pub start_timestamp: Option<String>,
    #[serde(default)]
    pub end_timestamp: Option<String>,
}

impl TranscriptSegment {
    pub fn new(source: TranscriptSource, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
            start_timestamp: None,
            end_timestamp: None,
        }
    }
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
