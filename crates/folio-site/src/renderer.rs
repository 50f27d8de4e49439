//! Page dispatch.
//!
//! [`PageRenderer`] owns the loaded [`Site`] and a [`Surface`]. Loading a page
//! is split into [`PageRenderer::begin`], which applies the page chrome and a
//! loading placeholder, and [`PageRenderer::complete`], which renders the
//! content. Each `begin` takes a new request token; a completion whose token
//! is no longer the latest is dropped, so a slow page can never overwrite a
//! page requested after it.
//!
//! Failures never escape as panics. Every [`DispatchError`] is shown in the
//! content region as `<div class="error">…</div>` before it is returned.

use std::time::Instant;

use folio_render::{
    Highlighter, NoopHighlighter, RenderError, RenderResult, TermsOptions, decode_sections,
    decode_terms, escape_html, render_list_page, render_terms_page,
};

use crate::model::{PageDescriptor, PageKind};
use crate::navigation::build_menu;
use crate::site::Site;
use crate::surface::Surface;

/// Placeholder shown between `begin` and `complete`.
const LOADING_HTML: &str = "<div class=\"loading\">Loading content...</div>";

/// Rendering options shared by every page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Code language for terms pages that declare none.
    pub default_language: String,
    /// Emit term definitions as markup (`true`) or escaped text.
    pub trust_definitions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_language: "javascript".to_owned(),
            trust_definitions: true,
        }
    }
}

/// Error shown in place of page content.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No descriptor has the requested id.
    #[error("Page \"{0}\" not found")]
    PageNotFound(String),
    /// Descriptor declares a layout with no renderer.
    #[error("Unknown page type: {0}")]
    UnknownPageType(String),
    /// Page data could not be decoded.
    #[error("Failed to render page content")]
    Render(#[from] RenderError),
}

/// In-flight page load returned by [`PageRenderer::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    token: u64,
    id: String,
}

impl PageRequest {
    /// Monotonic request number.
    #[must_use]
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Requested page id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Loads pages by id into a surface.
pub struct PageRenderer<S> {
    site: Site,
    surface: S,
    options: RenderOptions,
    highlighter: Box<dyn Highlighter>,
    current: Option<String>,
    latest: u64,
}

impl<S: Surface> PageRenderer<S> {
    /// Create a renderer with no syntax highlighting.
    pub fn new(site: Site, surface: S, options: RenderOptions) -> Self {
        Self {
            site,
            surface,
            options,
            highlighter: Box::new(NoopHighlighter),
            current: None,
            latest: 0,
        }
    }

    /// Use `highlighter` for terms pages.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Box<dyn Highlighter>) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Loaded descriptors.
    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Surface being rendered into.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Id of the page most recently begun.
    #[must_use]
    pub fn current_page(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Render the menu, then load `default_id`, or the first page if no
    /// descriptor has that id.
    ///
    /// # Errors
    ///
    /// Returns the [`DispatchError`] of the initial page load. It is already
    /// shown in the content region.
    pub fn init(&mut self, default_id: &str) -> Result<(), DispatchError> {
        let menu = build_menu(&self.site);
        self.surface.set_menu(&menu);

        let id = if self.site.get(default_id).is_some() {
            default_id.to_owned()
        } else if let Some(first) = self.site.first() {
            tracing::info!(default = %default_id, first = %first.id, "Default page missing, using first page");
            first.id.clone()
        } else {
            default_id.to_owned()
        };
        self.load_page(&id)
    }

    /// Load page `id` and render it immediately.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the page is missing, has an unknown type,
    /// or its data is malformed. The error is already shown in the content
    /// region.
    pub fn load_page(&mut self, id: &str) -> Result<(), DispatchError> {
        let request = self.begin(id)?;
        self.complete(&request)
    }

    /// Start loading page `id`.
    ///
    /// Applies the title, subtitle and active menu entry and shows the loading
    /// placeholder. A missing page only replaces the content; title and menu
    /// keep showing the previous page.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::PageNotFound`] if no descriptor has `id`.
    pub fn begin(&mut self, id: &str) -> Result<PageRequest, DispatchError> {
        self.latest += 1;
        let token = self.latest;

        let Some(page) = self.site.get(id) else {
            let err = DispatchError::PageNotFound(id.to_owned());
            tracing::warn!(id = %id, "Page not found");
            show_error(&mut self.surface, &err);
            return Err(err);
        };

        self.surface.set_title(&page.title);
        self.surface.set_subtitle(page.subtitle.as_deref());
        self.surface.set_active(&page.id);
        self.surface.set_content(LOADING_HTML.to_owned(), Vec::new());
        self.current = Some(page.id.clone());

        Ok(PageRequest {
            token,
            id: id.to_owned(),
        })
    }

    /// Render the content for `request`.
    ///
    /// Does nothing if a newer request has begun since.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the page has an unknown type or its data is
    /// malformed. The error is already shown in the content region.
    pub fn complete(&mut self, request: &PageRequest) -> Result<(), DispatchError> {
        if request.token != self.latest {
            tracing::debug!(
                id = %request.id,
                token = request.token,
                latest = self.latest,
                "Dropping stale page load"
            );
            return Ok(());
        }

        let start = Instant::now();
        let result = match self.site.get(&request.id) {
            Some(page) => self.render(page),
            None => Err(DispatchError::PageNotFound(request.id.clone())),
        };

        match result {
            Ok(RenderResult { html, snippets }) => {
                tracing::debug!(
                    id = %request.id,
                    elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Page rendered"
                );
                self.surface.set_content(html, snippets);
                Ok(())
            }
            Err(err) => {
                if let DispatchError::Render(cause) = &err {
                    tracing::error!(id = %request.id, error = %cause, "Failed to render page");
                } else {
                    tracing::warn!(id = %request.id, error = %err, "Page not rendered");
                }
                show_error(&mut self.surface, &err);
                Err(err)
            }
        }
    }

    fn render(&self, page: &PageDescriptor) -> Result<RenderResult, DispatchError> {
        match &page.kind {
            PageKind::List => {
                let sections = decode_sections(&page.data)?;
                Ok(render_list_page(&sections))
            }
            PageKind::Terms => {
                let terms = decode_terms(&page.data)?;
                let options = TermsOptions {
                    language: page
                        .language
                        .clone()
                        .unwrap_or_else(|| self.options.default_language.clone()),
                    trust_definitions: self.options.trust_definitions,
                };
                Ok(render_terms_page(&terms, &options, self.highlighter.as_ref()))
            }
            PageKind::Other(kind) => Err(DispatchError::UnknownPageType(kind.clone())),
        }
    }
}

fn show_error<S: Surface>(surface: &mut S, err: &DispatchError) {
    let html = format!(
        "<div class=\"error\">{}</div>",
        escape_html(&err.to_string())
    );
    surface.set_content(html, Vec::new());
}
