// src/ports/mod.rs
pub mod markdown;
pub mod text;

pub use markdown::MarkdownRenderer;
pub use text::TextPresenter;
