//! `folio copy` command implementation.

use std::time::{Duration, Instant};

use clap::Args;
use folio_clipboard::{CopyAction, CopyButton, SystemClipboard};
use folio_render::COPY_LABEL;

use crate::error::CliError;
use crate::output::Output;
use crate::site::{self, SiteArgs};

/// Arguments for the copy command.
#[derive(Args)]
pub(crate) struct CopyArgs {
    #[command(flatten)]
    pub(crate) site: SiteArgs,

    /// Page holding the example.
    page: String,

    /// Example id (e.g. `closure-example-0`).
    element_id: String,
}

impl CopyArgs {
    /// Execute the copy command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load_config(None)?;
        let site = site::load(&config)?;
        let mut renderer = site::renderer(&config, site);
        renderer.load_page(&self.page)?;

        let action = CopyAction::new(SystemClipboard)
            .with_revert(Duration::from_millis(config.copy.revert_ms));
        let mut button = CopyButton::new(COPY_LABEL);
        action.trigger(renderer.surface(), &self.element_id, &mut button, Instant::now())?;

        output.success(&format!("{}: {}", self.element_id, button.label()));
        Ok(())
    }
}
