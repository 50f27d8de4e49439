//! Shared config and site loading for commands.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config, SourceLocation};
use folio_site::{Document, Manifest, PageRenderer, RenderOptions, Site, load_site};
use folio_source::{FsSource, HttpSource, Source};

use crate::error::CliError;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory or base URL (overrides config).
    #[arg(short, long, env = "FOLIO_SOURCE")]
    source: Option<String>,

    /// Page shown first (overrides config).
    #[arg(long)]
    default_page: Option<String>,

    /// Enable verbose output (show load and render logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl SiteArgs {
    /// Load config with these overrides and `output_dir`.
    pub(crate) fn load_config(&self, output_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source: self.source.clone(),
            default_page: self.default_page.clone(),
            output_dir,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Open the configured source.
fn open_source(location: &SourceLocation) -> Box<dyn Source> {
    match location {
        SourceLocation::Dir(path) => Box::new(FsSource::new(path.clone())),
        SourceLocation::Url(url) => Box::new(HttpSource::new(url)),
    }
}

/// Load the site the config describes.
pub(crate) fn load(config: &Config) -> Result<Site, CliError> {
    let site_config = &config.site_resolved;
    let source = open_source(&site_config.source);
    let manifest = Manifest::new(site_config.directory.clone(), site_config.files.clone());
    Ok(load_site(source.as_ref(), &manifest)?)
}

/// Create a renderer over `site` with the configured options.
pub(crate) fn renderer(config: &Config, site: Site) -> PageRenderer<Document> {
    let options = RenderOptions {
        default_language: config.site_resolved.language.clone(),
        trust_definitions: config.site_resolved.trust_definitions,
    };
    PageRenderer::new(site, Document::default(), options)
}
