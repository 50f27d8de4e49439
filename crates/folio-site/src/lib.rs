//! Page descriptors, navigation and page dispatch for Folio.
//!
//! This crate provides:
//! - [`load_site`]: fetch a [`Manifest`] of descriptor files into a [`Site`]
//! - [`build_menu`]: one navigation entry per descriptor, in load order
//! - [`PageRenderer`]: loads a page by id into a [`Surface`], dispatching on
//!   the descriptor's [`PageKind`]
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use folio_site::{Document, Manifest, PageRenderer, RenderOptions, load_site};
//! use folio_source::FsSource;
//!
//! let source = FsSource::new(PathBuf::from("."));
//! let manifest = Manifest::new("data", vec!["home.json".to_owned()]);
//! let site = load_site(&source, &manifest)?;
//!
//! let mut renderer = PageRenderer::new(site, Document::default(), RenderOptions::default());
//! renderer.init("home")?;
//! let _ = renderer.load_page("glossary");
//! # Ok(())
//! # }
//! ```

mod loader;
mod model;
mod navigation;
mod renderer;
mod site;
mod surface;

pub use loader::{LoadError, Manifest, ManifestLoadError, load_site};
pub use model::{PageDescriptor, PageKind};
pub use navigation::{MenuEntry, build_menu};
pub use renderer::{DispatchError, PageRenderer, PageRequest, RenderOptions};
pub use site::Site;
pub use surface::{Document, Surface};
