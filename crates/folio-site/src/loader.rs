//! Site loading from a descriptor source.
//!
//! Provides [`load_site`] for building a [`Site`] from the files a
//! [`Manifest`] names. Files are fetched one at a time in manifest order, so
//! the menu follows the manifest. A file that fails to fetch or parse is
//! logged and skipped; only an empty result is fatal.

use std::time::Instant;

use folio_source::{Source, SourceError};

use crate::model::PageDescriptor;
use crate::site::Site;

/// Descriptor files tried when a manifest names none.
const FALLBACK_FILES: [&str; 3] = ["home.json", "resources.json", "glossary.json"];

/// List of descriptor files under one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    directory: String,
    files: Vec<String>,
}

impl Manifest {
    /// Create a manifest for `files` under `directory`.
    ///
    /// An empty file list falls back to `home.json`, `resources.json` and
    /// `glossary.json`.
    #[must_use]
    pub fn new(directory: impl Into<String>, files: Vec<String>) -> Self {
        let files = if files.is_empty() {
            FALLBACK_FILES.iter().map(|f| (*f).to_owned()).collect()
        } else {
            files
        };
        Self {
            directory: directory.into().trim_matches('/').to_owned(),
            files,
        }
    }

    /// Directory the files live in.
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Filenames in load order.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Source path for `file`.
    fn path_for(&self, file: &str) -> String {
        if self.directory.is_empty() {
            file.to_owned()
        } else {
            format!("{}/{file}", self.directory)
        }
    }
}

/// Per-file load failure. Logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum ManifestLoadError {
    /// File could not be fetched.
    #[error("Failed to fetch {file}")]
    Fetch {
        /// Manifest filename.
        file: String,
        /// Underlying source error.
        #[source]
        source: SourceError,
    },
    /// File is not a valid page descriptor.
    #[error("Failed to parse {file}")]
    Parse {
        /// Manifest filename.
        file: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Descriptor id was already loaded from an earlier file.
    #[error("Duplicate page id '{id}' in {file}")]
    DuplicateId {
        /// Manifest filename.
        file: String,
        /// Conflicting id.
        id: String,
    },
}

/// Error returned when a site cannot be loaded at all.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Every manifest entry failed.
    #[error("No page descriptors could be loaded from '{directory}' ({} failed)", failures.len())]
    NoContent {
        /// Manifest directory.
        directory: String,
        /// Per-file failures, in manifest order.
        failures: Vec<ManifestLoadError>,
    },
}

fn load_file(
    source: &dyn Source,
    manifest: &Manifest,
    file: &str,
) -> Result<PageDescriptor, ManifestLoadError> {
    let text = source
        .fetch(&manifest.path_for(file))
        .map_err(|source| ManifestLoadError::Fetch {
            file: file.to_owned(),
            source,
        })?;
    serde_json::from_str(&text).map_err(|source| ManifestLoadError::Parse {
        file: file.to_owned(),
        source,
    })
}

/// Load every descriptor a manifest names.
///
/// Entries that do not end in `.json` are ignored.
///
/// # Errors
///
/// Returns [`LoadError::NoContent`] if no descriptor loads.
pub fn load_site(source: &dyn Source, manifest: &Manifest) -> Result<Site, LoadError> {
    let start = Instant::now();
    let mut site = Site::default();
    let mut failures = Vec::new();

    for file in manifest.files() {
        if !file.ends_with(".json") {
            tracing::debug!(file = %file, "Skipping non-JSON manifest entry");
            continue;
        }

        let result = load_file(source, manifest, file).and_then(|page| {
            site.insert(page).map_err(|page| ManifestLoadError::DuplicateId {
                file: file.clone(),
                id: page.id,
            })
        });

        if let Err(e) = result {
            let cause = std::error::Error::source(&e).map(ToString::to_string);
            tracing::warn!(error = %e, cause = ?cause, "Skipping descriptor file");
            failures.push(e);
        }
    }

    if site.is_empty() {
        return Err(LoadError::NoContent {
            directory: manifest.directory().to_owned(),
            failures,
        });
    }

    tracing::info!(
        pages = site.len(),
        skipped = failures.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Site loaded"
    );
    Ok(site)
}

#[cfg(test)]
mod tests {
    use folio_source::{MockSource, SourceErrorKind};
    use pretty_assertions::assert_eq;

    use super::*;

    fn descriptor(id: &str) -> String {
        format!(r#"{{"id": "{id}", "name": "{id}", "title": "{id}", "type": "list", "data": []}}"#)
    }

    fn ids(site: &Site) -> Vec<&str> {
        site.pages().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_load_in_manifest_order() {
        let source = MockSource::new()
            .with_file("data/b.json", descriptor("b"))
            .with_file("data/a.json", descriptor("a"));
        let manifest = Manifest::new("data", vec!["b.json".to_owned(), "a.json".to_owned()]);

        let site = load_site(&source, &manifest).unwrap();

        assert_eq!(ids(&site), vec!["b", "a"]);
        assert_eq!(source.fetched(), vec!["data/b.json", "data/a.json"]);
    }

    #[test]
    fn test_failed_files_are_skipped() {
        let source = MockSource::new()
            .with_file("data/good.json", descriptor("good"))
            .with_file("data/broken.json", "{ not json")
            .with_failure("data/slow.json", SourceErrorKind::Timeout);
        let manifest = Manifest::new(
            "data",
            vec![
                "broken.json".to_owned(),
                "missing.json".to_owned(),
                "slow.json".to_owned(),
                "good.json".to_owned(),
            ],
        );

        let site = load_site(&source, &manifest).unwrap();

        assert_eq!(ids(&site), vec!["good"]);
        // A failure never stops later files from loading
        assert_eq!(source.fetched().len(), 4);
    }

    #[test]
    fn test_no_content_is_fatal() {
        let source = MockSource::new().with_file("data/broken.json", "[]");
        let manifest = Manifest::new(
            "data",
            vec!["broken.json".to_owned(), "gone.json".to_owned()],
        );

        let err = load_site(&source, &manifest).unwrap_err();

        let LoadError::NoContent {
            directory,
            failures,
        } = err;
        assert_eq!(directory, "data");
        assert_eq!(failures.len(), 2);
        assert!(matches!(failures[0], ManifestLoadError::Parse { .. }));
        assert!(matches!(failures[1], ManifestLoadError::Fetch { .. }));
    }

    #[test]
    fn test_duplicate_id_keeps_first_file() {
        let source = MockSource::new()
            .with_file("data/one.json", descriptor("home"))
            .with_file(
                "data/two.json",
                r#"{"id": "home", "name": "Other", "title": "Other", "type": "list"}"#,
            );
        let manifest = Manifest::new("data", vec!["one.json".to_owned(), "two.json".to_owned()]);

        let site = load_site(&source, &manifest).unwrap();

        assert_eq!(site.len(), 1);
        assert_eq!(site.get("home").unwrap().name, "home");
    }

    #[test]
    fn test_non_json_entries_ignored() {
        let source = MockSource::new().with_file("data/home.json", descriptor("home"));
        let manifest = Manifest::new(
            "data",
            vec!["README.md".to_owned(), "home.json".to_owned()],
        );

        let site = load_site(&source, &manifest).unwrap();

        assert_eq!(ids(&site), vec!["home"]);
        assert_eq!(source.fetched(), vec!["data/home.json"]);
    }

    #[test]
    fn test_empty_manifest_uses_fallback_files() {
        let manifest = Manifest::new("/data/", Vec::new());

        assert_eq!(manifest.directory(), "data");
        assert_eq!(
            manifest.files(),
            ["home.json", "resources.json", "glossary.json"]
        );
    }

    #[test]
    fn test_root_directory_paths() {
        let source = MockSource::new().with_file("home.json", descriptor("home"));
        let manifest = Manifest::new("", vec!["home.json".to_owned()]);

        let site = load_site(&source, &manifest).unwrap();

        assert_eq!(ids(&site), vec!["home"]);
    }
}
