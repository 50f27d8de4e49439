//! CLI error types.

use folio_clipboard::CopyError;
use folio_config::ConfigError;
use folio_site::{DispatchError, LoadError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Dispatch(#[from] DispatchError),

    #[error("{0}")]
    Copy(#[from] CopyError),
}
