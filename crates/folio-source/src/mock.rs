//! Mock source implementation for testing.
//!
//! Provides [`MockSource`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::source::{Source, SourceError, SourceErrorKind};

/// Mock source for testing.
///
/// Stores file contents in memory and records every fetch in order. Use the
/// builder methods to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use folio_source::{MockSource, Source};
///
/// let source = MockSource::new().with_file("data/home.json", r#"{"id":"home"}"#);
/// let text = source.fetch("data/home.json").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    files: HashMap<String, String>,
    failures: HashMap<String, SourceErrorKind>,
    fetched: RwLock<Vec<String>>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Make fetching `path` fail with `kind`.
    #[must_use]
    pub fn with_failure(mut self, path: impl Into<String>, kind: SourceErrorKind) -> Self {
        self.failures.insert(path.into(), kind);
        self
    }

    /// Paths fetched so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.read().unwrap().clone()
    }
}

impl Source for MockSource {
    fn fetch(&self, path: &str) -> Result<String, SourceError> {
        self.fetched.write().unwrap().push(path.to_owned());

        if let Some(kind) = self.failures.get(path) {
            return Err(SourceError::new(*kind).with_path(path).with_backend("Mock"));
        }

        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::not_found(path).with_backend("Mock"))
    }
}
