//! Filesystem source.

use std::path::PathBuf;

use crate::source::{Source, SourceError, check_relative};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Reads descriptor files from a local directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl Source for FsSource {
    fn fetch(&self, path: &str) -> Result<String, SourceError> {
        check_relative(path, BACKEND)?;
        let full_path = self.root.join(path);
        tracing::debug!(path = %full_path.display(), "Reading descriptor file");
        std::fs::read_to_string(&full_path)
            .map_err(|e| SourceError::io(e, path).with_backend(BACKEND))
    }
}
