//! Render output types.

/// Raw text of a rendered code block, keyed by its element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippet {
    /// Element id of the code block.
    pub id: String,
    /// Unescaped text content.
    pub text: String,
}

/// Result of rendering a page body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderResult {
    /// Rendered HTML fragment.
    pub html: String,
    /// Code blocks in document order.
    pub snippets: Vec<CodeSnippet>,
}
