//! `folio build` command implementation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use folio_site::{Document, PageRenderer};

use crate::error::CliError;
use crate::output::Output;
use crate::site::{self, SiteArgs};
use crate::template::{INDEX_FILE, PageFiles, Shell};

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub(crate) site: SiteArgs,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// Writes `index.html` for the default page and one uniquely named file
    /// per page. Pages that fail to render are still written with their error
    /// shown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let start = Instant::now();

        let config = self.site.load_config(self.output_dir)?;
        let site = site::load(&config)?;
        let out_dir = &config.output_resolved.dir;
        let files = PageFiles::assign(site.pages().map(|p| p.id.as_str()));
        let shell = Shell {
            files: &files,
            stylesheet: config.output_resolved.stylesheet.as_deref(),
            highlight_script: config.output_resolved.highlight_script.as_deref(),
            revert_ms: config.copy.revert_ms,
        };

        output.info(&format!("Building {} pages into {}", site.len(), out_dir.display()));
        std::fs::create_dir_all(out_dir)?;

        let mut renderer = site::renderer(&config, site);
        let ids: Vec<String> = renderer.site().pages().map(|p| p.id.clone()).collect();

        if let Err(e) = renderer.init(&config.site_resolved.default_page) {
            output.warning(&format!("index: {e}"));
        }
        write_page(out_dir, INDEX_FILE, &shell, &renderer)?;

        let mut failed = 0usize;
        for id in &ids {
            if let Err(e) = renderer.load_page(id) {
                output.warning(&format!("{id}: {e}"));
                failed += 1;
            }
            if let Some(file) = files.get(id) {
                write_page(out_dir, file, &shell, &renderer)?;
            }
        }

        tracing::info!(
            pages = ids.len(),
            failed,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Build finished"
        );
        output.success(&format!(
            "Built {} pages ({failed} with errors) in {:.2}s",
            ids.len(),
            start.elapsed().as_secs_f64()
        ));
        Ok(())
    }
}

fn write_page(
    out_dir: &Path,
    file: &str,
    shell: &Shell<'_>,
    renderer: &PageRenderer<Document>,
) -> Result<(), CliError> {
    std::fs::write(out_dir.join(file), shell.render(renderer.surface()))?;
    Ok(())
}
