//! Syntax highlighting seam.

/// Post-processes rendered glossary content for syntax highlighting.
///
/// Called once after a terms page is rendered, with the full fragment and the
/// language the code blocks were tagged with. Implementations may rewrite the
/// fragment in place.
pub trait Highlighter {
    /// Highlight code blocks in `html`.
    fn highlight(&self, html: &mut String, language: &str);
}

/// Highlighter that leaves content untouched.
///
/// Used when no highlighter is available; code blocks keep their
/// `language-*` class for a client-side highlighter to pick up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHighlighter;

impl Highlighter for NoopHighlighter {
    fn highlight(&self, _html: &mut String, _language: &str) {}
}
