//! `folio render` command implementation.

use std::io::Write;

use clap::Args;

use crate::error::CliError;
use crate::site::{self, SiteArgs};
use crate::template::{PageFiles, Shell};

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub(crate) site: SiteArgs,

    /// Page id to render (default: the configured default page).
    page: Option<String>,

    /// Print only the content fragment instead of a full page.
    #[arg(long)]
    fragment: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// The page is printed even when it fails to render, with the error in
    /// place of the content; the command then exits with the error.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.site.load_config(None)?;
        let site = site::load(&config)?;
        let mut renderer = site::renderer(&config, site);

        let result = match &self.page {
            Some(id) => {
                // Menu state comes from init; its own page load is replaced below
                let _ = renderer.init(&config.site_resolved.default_page);
                renderer.load_page(id)
            }
            None => renderer.init(&config.site_resolved.default_page),
        };

        let doc = renderer.surface();
        let html = if self.fragment {
            doc.content().to_owned()
        } else {
            let files = PageFiles::assign(renderer.site().pages().map(|p| p.id.as_str()));
            Shell {
                files: &files,
                stylesheet: config.output_resolved.stylesheet.as_deref(),
                highlight_script: config.output_resolved.highlight_script.as_deref(),
                revert_ms: config.copy.revert_ms,
            }
            .render(doc)
        };
        std::io::stdout().lock().write_all(html.as_bytes())?;

        Ok(result?)
    }
}
