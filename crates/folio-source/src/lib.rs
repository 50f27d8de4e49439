//! Descriptor source abstraction for Folio.
//!
//! This crate provides a [`Source`] trait for fetching page descriptor files
//! by relative path. This enables:
//!
//! - **Unit testing** without touching the filesystem or network
//! - **Backend flexibility** (local directory, static HTTP host)
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Source`] trait with a single `fetch()` method
//! - [`FsSource`] for a local content directory
//! - [`HttpSource`] for descriptors served over plain HTTP GET
//! - [`MockSource`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_source::{FsSource, Source};
//!
//! let source = FsSource::new(PathBuf::from("."));
//! let json = source.fetch("data/home.json")?;
//! ```

mod fs;
mod http;
#[cfg(feature = "mock")]
mod mock;
mod source;

pub use fs::FsSource;
pub use http::HttpSource;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use source::{Source, SourceError, SourceErrorKind};
