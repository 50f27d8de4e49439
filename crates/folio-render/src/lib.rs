//! List and glossary page rendering for Folio.
//!
//! This crate turns decoded page data into HTML fragments:
//! - [`render_list_page`]: titled blocks of external links, flat or nested
//! - [`render_terms_page`]: a sorted glossary with a table of contents and
//!   copyable code examples
//!
//! Both renderers are pure: the same input always yields byte-identical
//! output. Page data arrives as raw JSON and is decoded with
//! [`decode_sections`] and [`decode_terms`], which report malformed entries
//! as [`RenderError`].
//!
//! # Example
//!
//! ```
//! use folio_render::{NoopHighlighter, TermsOptions, decode_terms, render_terms_page};
//!
//! let data = serde_json::json!([
//!     {"term": "Closure", "definition": "A function with captured state."}
//! ]);
//! let terms = decode_terms(&data).unwrap();
//! let result = render_terms_page(&terms, &TermsOptions::default(), &NoopHighlighter);
//! assert!(result.html.contains("id=\"closure\""));
//! ```

mod error;
mod highlight;
mod list;
mod model;
mod output;
mod terms;
mod util;

pub use error::RenderError;
pub use highlight::{Highlighter, NoopHighlighter};
pub use list::render_list_page;
pub use model::{
    CodeExample, LinkItem, ListSection, NestedListSection, Section, Subtitle, TermEntry,
    decode_sections, decode_terms,
};
pub use output::{CodeSnippet, RenderResult};
pub use terms::{COPY_LABEL, TermsOptions, render_terms_page, sort_terms};
pub use util::{escape_attr, escape_html, slugify};
