//! Render error types.

/// Error returned when page data cannot be decoded for rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Page data is not a JSON array.
    #[error("page data must be an array, found {0}")]
    NotAnArray(&'static str),
    /// An entry is missing required fields or has the wrong shape.
    #[error("invalid {kind} at index {index}: {source}")]
    InvalidEntry {
        /// Entry kind (e.g., "list section", "term").
        kind: &'static str,
        /// Position of the entry in the page data.
        index: usize,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}
