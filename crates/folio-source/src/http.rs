//! HTTP source for descriptors served as static files.

use std::time::Duration;

use ureq::Agent;

use crate::source::{Source, SourceError, SourceErrorKind, check_relative};

/// Backend identifier for error messages.
const BACKEND: &str = "Http";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Fetches descriptor files with plain HTTP GET relative to a base URL.
pub struct HttpSource {
    agent: Agent,
    base_url: String,
}

impl HttpSource {
    /// Create a source for `base_url` (e.g. `https://example.com/homepage`).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Absolute URL for a relative descriptor path.
    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches("./"))
    }
}

impl Source for HttpSource {
    fn fetch(&self, path: &str) -> Result<String, SourceError> {
        check_relative(path.trim_start_matches("./"), BACKEND)?;
        let url = self.url_for(path);
        tracing::debug!(url = %url, "Fetching descriptor");

        let response = self.agent.get(&url).call().map_err(|e| {
            let kind = if matches!(e, ureq::Error::Timeout(_)) {
                SourceErrorKind::Timeout
            } else {
                SourceErrorKind::Other
            };
            SourceError::new(kind)
                .with_path(path)
                .with_backend(BACKEND)
                .with_source(e)
        })?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(SourceError::not_found(path).with_backend(BACKEND));
        }
        if status >= 400 {
            return Err(SourceError::new(SourceErrorKind::Unavailable)
                .with_path(path)
                .with_backend(BACKEND)
                .with_source(std::io::Error::other(format!("HTTP status {status}"))));
        }

        response.into_body().read_to_string().map_err(|e| {
            SourceError::new(SourceErrorKind::Other)
                .with_path(path)
                .with_backend(BACKEND)
                .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_base() {
        let source = HttpSource::new("https://example.com/homepage/");
        assert_eq!(
            source.url_for("data/home.json"),
            "https://example.com/homepage/data/home.json"
        );
    }

    #[test]
    fn test_url_for_strips_dot_prefix() {
        let source = HttpSource::new("http://localhost:8000");
        assert_eq!(
            source.url_for("./data/glossary.json"),
            "http://localhost:8000/data/glossary.json"
        );
    }

    #[test]
    fn test_fetch_rejects_absolute_path() {
        let source = HttpSource::new("http://localhost:8000");
        let err = source.fetch("/etc/passwd").unwrap_err();
        assert_eq!(err.kind(), &SourceErrorKind::InvalidPath);
    }
}
