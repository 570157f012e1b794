//! Markup rendering abstraction
//!
//! The store validates that the renderer produced output; a `None` from
//! the collaborator is treated as a transform failure, not a panic.

use pulldown_cmark::{html, Options, Parser};

/// Abstract markdown-to-markup renderer
pub trait MarkupRenderer: Send + Sync {
    /// Compile raw markdown to rendered markup.
    ///
    /// Returns `None` when the renderer cannot produce usable output.
    fn compile(&self, raw: &str) -> Option<String>;
}

/// CommonMark renderer backed by pulldown-cmark
#[derive(Debug, Default)]
pub struct CmarkRenderer;

impl CmarkRenderer {
    /// Create a renderer with the default extension set
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_HEADING_ATTRIBUTES
    }
}

impl MarkupRenderer for CmarkRenderer {
    fn compile(&self, raw: &str) -> Option<String> {
        let parser = Parser::new_ext(raw, Self::options());
        let mut out = String::with_capacity(raw.len() * 2);
        html::push_html(&mut out, parser);
        Some(out)
    }
}
