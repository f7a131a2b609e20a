// src/domain/content.rs
//! Granola's rich-text tree, as stored on a document's notes panel.
//!
//! The tree is a ProseMirror-style document: every node carries a `type`,
//! and may carry child `content`, literal `text`, inline `marks` and `attrs`.
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Text,
    Paragraph,
    Heading,
    BulletList,
    ListItem,
    OrderedList,
    CodeBlock,
    HardBreak,
    /// Any kind this crate does not know about (`doc`, `blockquote`, ...)
    Other(String),
}

impl From<String> for NodeKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "text" => NodeKind::Text,
            "paragraph" => NodeKind::Paragraph,
            "heading" => NodeKind::Heading,
            "bulletList" => NodeKind::BulletList,
            "listItem" => NodeKind::ListItem,
            "orderedList" => NodeKind::OrderedList,
            "codeBlock" => NodeKind::CodeBlock,
            "hardBreak" => NodeKind::HardBreak,
            _ => NodeKind::Other(kind),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Text => "text".to_string(),
            NodeKind::Paragraph => "paragraph".to_string(),
            NodeKind::Heading => "heading".to_string(),
            NodeKind::BulletList => "bulletList".to_string(),
            NodeKind::ListItem => "listItem".to_string(),
            NodeKind::OrderedList => "orderedList".to_string(),
            NodeKind::CodeBlock => "codeBlock".to_string(),
            NodeKind::HardBreak => "hardBreak".to_string(),
            NodeKind::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkKind {
    Bold,
    Italic,
    Code,
    Other(String),
}

impl From<String> for MarkKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "bold" => MarkKind::Bold,
            "italic" => MarkKind::Italic,
            "code" => MarkKind::Code,
            _ => MarkKind::Other(kind),
        }
    }
}

impl From<MarkKind> for String {
    fn from(kind: MarkKind) -> Self {
        match kind {
            MarkKind::Bold => "bold".to_string(),
            MarkKind::Italic => "italic".to_string(),
            MarkKind::Code => "code".to_string(),
            MarkKind::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<Mark>>,
    // Kept untyped: malformed attributes must not fail deserialization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Value>,
}

impl ContentNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            content: None,
            text: None,
            marks: None,
            attrs: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(NodeKind::Text)
        }
    }

    pub fn with_children(mut self, children: Vec<ContentNode>) -> Self {
        self.content = Some(children);
        self
    }

    pub fn with_marks(mut self, marks: &[MarkKind]) -> Self {
        self.marks = Some(marks.iter().cloned().map(|kind| Mark { kind }).collect());
        self
    }

    pub fn with_attrs(mut self, attrs: Value) -> Self {
        self.attrs = Some(attrs);
        self
    }

    pub fn children(&self) -> &[ContentNode] {
        self.content.as_deref().unwrap_or(&[])
    }

    pub fn mark_kinds(&self) -> impl Iterator<Item = &MarkKind> {
        self.marks.iter().flatten().map(|mark| &mark.kind)
    }

    /// Heading level from `attrs.level`, taken as given; 1 when missing or not
    /// a non-negative integer.
    pub fn heading_level(&self) -> usize {
        self.attrs
            .as_ref()
            .and_then(|attrs| attrs.get("level"))
            .and_then(Value::as_u64)
            .and_then(|level| usize::try_from(level).ok())
            .unwrap_or(1)
    }
}
