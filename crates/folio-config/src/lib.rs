//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.source`
//! - `site.directory`
//! - `output.highlight_script`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source (directory path or base URL).
    pub source: Option<String>,
    /// Override the page loaded first.
    pub default_page: Option<String>,
    /// Override output directory for generated pages.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Default delay before a copy button reverts its label.
const DEFAULT_REVERT_MS: u64 = 2000;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (source location as a raw string from TOML).
    site: SiteConfigRaw,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Copy button configuration.
    pub copy: CopyConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    source: Option<String>,
    directory: Option<String>,
    files: Vec<String>,
    default_page: Option<String>,
    language: Option<String>,
    trust_definitions: Option<bool>,
}

/// Where descriptor files are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Local directory.
    Dir(PathBuf),
    /// HTTP(S) base URL.
    Url(String),
}

impl SourceLocation {
    /// Interpret a raw source string relative to `base`.
    fn parse(raw: &str, base: &Path) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.trim_end_matches('/').to_owned())
        } else {
            Self::Dir(base.join(raw))
        }
    }
}

/// Resolved site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Root the manifest directory is resolved against.
    pub source: SourceLocation,
    /// Manifest namespace under the source (e.g. `data`).
    pub directory: String,
    /// Descriptor filenames, in menu order (empty means the loader's fallback list).
    pub files: Vec<String>,
    /// Page shown first.
    pub default_page: String,
    /// Code language used when a page declares none.
    pub language: String,
    /// Whether term definitions are emitted as markup (`true`) or escaped.
    pub trust_definitions: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source: SourceLocation::Dir(PathBuf::from(".")),
            directory: "data".to_owned(),
            files: Vec::new(),
            default_page: "home".to_owned(),
            language: "javascript".to_owned(),
            trust_definitions: true,
        }
    }
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    stylesheet: Option<String>,
    highlight_script: Option<String>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Directory generated pages are written to.
    pub dir: PathBuf,
    /// Stylesheet href linked from every page.
    pub stylesheet: Option<String>,
    /// Script href of an external syntax highlighter.
    pub highlight_script: Option<String>,
}

/// Copy button configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// Milliseconds before "Copied!" reverts to the original label.
    pub revert_ms: u64,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            revert_ms: DEFAULT_REVERT_MS,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.source`").
        field: String,
        /// Error message (e.g., "${`FOLIO_SOURCE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.source {
            let base = std::env::current_dir().unwrap_or_default();
            self.site_resolved.source = SourceLocation::parse(source, &base);
        }
        if let Some(default_page) = &settings.default_page {
            self.site_resolved.default_page.clone_from(default_page);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            output: OutputConfigRaw::default(),
            copy: CopyConfig::default(),
            site_resolved: SiteConfig {
                source: SourceLocation::Dir(base.to_path_buf()),
                ..SiteConfig::default()
            },
            output_resolved: OutputConfig {
                dir: base.join("site"),
                ..OutputConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_copy()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        let site = &self.site_resolved;
        require_non_empty(&site.default_page, "site.default_page")?;
        require_non_empty(&site.language, "site.language")?;

        if site.directory.starts_with('/') || site.directory.split('/').any(|s| s == "..") {
            return Err(ConfigError::Validation(
                "site.directory must be a relative path without '..'".to_owned(),
            ));
        }

        for file in &site.files {
            require_non_empty(file, "site.files")?;
            if file.contains('/') || file.contains('\\') {
                return Err(ConfigError::Validation(format!(
                    "site.files entry '{file}' must be a bare filename"
                )));
            }
        }

        Ok(())
    }

    fn validate_copy(&self) -> Result<(), ConfigError> {
        const MAX_REVERT_MS: u64 = 60_000;

        if self.copy.revert_ms == 0 {
            return Err(ConfigError::Validation(
                "copy.revert_ms must be greater than 0".to_owned(),
            ));
        }
        if self.copy.revert_ms > MAX_REVERT_MS {
            return Err(ConfigError::Validation(format!(
                "copy.revert_ms cannot exceed {MAX_REVERT_MS}"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source) = self.site.source {
            self.site.source = Some(expand::expand_env(source, "site.source")?);
        }
        if let Some(ref directory) = self.site.directory {
            self.site.directory = Some(expand::expand_env(directory, "site.directory")?);
        }
        if let Some(ref script) = self.output.highlight_script {
            self.output.highlight_script =
                Some(expand::expand_env(script, "output.highlight_script")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = SiteConfig::default();

        self.site_resolved = SiteConfig {
            source: self
                .site
                .source
                .as_deref()
                .map_or_else(|| SourceLocation::Dir(config_dir.to_path_buf()), |raw| {
                    SourceLocation::parse(raw, config_dir)
                }),
            directory: self
                .site
                .directory
                .as_deref()
                .map_or(defaults.directory, |d| d.trim_matches('/').to_owned()),
            files: self.site.files.clone(),
            default_page: self.site.default_page.clone().unwrap_or(defaults.default_page),
            language: self.site.language.clone().unwrap_or(defaults.language),
            trust_definitions: self.site.trust_definitions.unwrap_or(true),
        };

        self.output_resolved = OutputConfig {
            dir: config_dir.join(self.output.dir.as_deref().unwrap_or("site")),
            stylesheet: self.output.stylesheet.clone(),
            highlight_script: self.output.highlight_script.clone(),
        };
    }
}
