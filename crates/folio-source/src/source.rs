//! Source trait and error types.
//!
//! Provides the core [`Source`] trait for fetching descriptor files, along
//! with [`SourceError`] for unified error handling across backends.
//!
//! # Path Convention
//!
//! All path parameters are **relative paths** joined with `/`, such as
//! `"data/home.json"`. Backends map them onto a directory or a base URL.

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path (absolute, or escaping the source root).
    InvalidPath,
    /// Backend answered with an unexpected status.
    Unavailable,
    /// Operation timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Source error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct SourceError {
    kind: SourceErrorKind,
    path: Option<String>,
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// Create a new source error.
    #[must_use]
    pub fn new(kind: SourceErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> &SourceErrorKind {
        &self.kind
    }

    /// Path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::NotFound).with_path(path)
    }

    /// Create a source error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: impl Into<String>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => SourceErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => SourceErrorKind::PermissionDenied,
            std::io::ErrorKind::TimedOut => SourceErrorKind::Timeout,
            _ => SourceErrorKind::Other,
        };
        Self::new(kind).with_source(err).with_path(path)
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: data/home.json)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            SourceErrorKind::NotFound => "Not found",
            SourceErrorKind::PermissionDenied => "Permission denied",
            SourceErrorKind::InvalidPath => "Invalid path",
            SourceErrorKind::Unavailable => "Unavailable",
            SourceErrorKind::Timeout => "Timeout",
            SourceErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {path})")?;
        }

        Ok(())
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Reject paths that are absolute or climb out of the source root.
pub(crate) fn check_relative(path: &str, backend: &'static str) -> Result<(), SourceError> {
    let escapes = path.starts_with('/') || path.split('/').any(|segment| segment == "..");
    if path.is_empty() || escapes {
        return Err(SourceError::new(SourceErrorKind::InvalidPath)
            .with_path(path)
            .with_backend(backend));
    }
    Ok(())
}

/// Fetches descriptor files by relative path.
///
/// Implementations handle backend-specific details like path joining and
/// transport errors. One call fetches one file; callers decide ordering.
pub trait Source: Send + Sync {
    /// Fetch the full text of the file at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - relative path (e.g., `"data/home.json"`)
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file doesn't exist or can't be read.
    fn fetch(&self, path: &str) -> Result<String, SourceError>;
}
