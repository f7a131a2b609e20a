// src/ports/markdown.rs
use crate::domain::{ContentNode, MarkKind, NodeKind};
use tracing::instrument;

/// Renders Granola's rich-text tree to Markdown.
///
/// Pure and deterministic; unknown node kinds render their children only.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "trace", skip(self, tree))]
    pub fn render(&self, tree: Option<&ContentNode>) -> String {
        tree.map_or_else(String::new, |node| self.render_node(node))
    }

    fn render_node(&self, node: &ContentNode) -> String {
        match &node.kind {
            NodeKind::Text => self.render_text(node),
            NodeKind::Paragraph => {
                let inner = self.render_children(node);
                if inner.trim().is_empty() {
                    String::new()
                } else {
                    format!("{inner}\n\n")
                }
            }
            NodeKind::Heading => {
                let level = node.heading_level();
                format!("{} {}\n\n", "#".repeat(level), self.render_children(node))
            }
            NodeKind::BulletList => self.render_children(node),
            NodeKind::ListItem => format!("- {}", self.render_children(node)),
            NodeKind::OrderedList => self.render_ordered_list(node),
            NodeKind::CodeBlock => format!("```\n{}\n```\n\n", self.render_children(node)),
            NodeKind::HardBreak => "\n".to_string(),
            NodeKind::Other(_) => self.render_children(node),
        }
    }

    fn render_children(&self, node: &ContentNode) -> String {
        node.children()
            .iter()
            .map(|child| self.render_node(child))
            .collect()
    }

    /// Marks wrap in the order they appear on the node, innermost first.
    fn render_text(&self, node: &ContentNode) -> String {
        let text = node.text.clone().unwrap_or_default();
        node.mark_kinds().fold(text, |acc, mark| match mark {
            MarkKind::Bold => format!("**{acc}**"),
            MarkKind::Italic => format!("*{acc}*"),
            MarkKind::Code => format!("`{acc}`"),
            MarkKind::Other(_) => acc,
        })
    }

    // Numbering is positional: an item that renders empty still consumes its index.
    fn render_ordered_list(&self, node: &ContentNode) -> String {
        node.children()
            .iter()
            .enumerate()
            .filter_map(|(index, child)| {
                let rendered = self.render_node(child);
                (!rendered.is_empty()).then(|| format!("{}. {}", index + 1, rendered))
            })
            .collect()
    }
}
