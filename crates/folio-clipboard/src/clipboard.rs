//! Clipboard backends.

/// Clipboard write error.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Platform clipboard rejected the write or could not be opened.
    #[error("Clipboard unavailable: {0}")]
    Backend(#[from] arboard::Error),
    /// Platform has no primary selection.
    #[error("Primary selection is not supported on this platform")]
    SelectionUnsupported,
}

/// Destination for copied text.
pub trait Clipboard {
    /// Write `text` to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the clipboard cannot be written.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Write `text` to the selection-based fallback.
    ///
    /// Only tried after [`Clipboard::write_text`] fails.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the selection cannot be written.
    fn write_selection(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the platform clipboard via `arboard`.
///
/// A handle is opened per write. On Linux the fallback writes the primary
/// selection; other platforms have no fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    fn write_selection(&self, text: &str) -> Result<(), ClipboardError> {
        use arboard::{LinuxClipboardKind, SetExtLinux};

        let mut clipboard = arboard::Clipboard::new()?;
        clipboard
            .set()
            .clipboard(LinuxClipboardKind::Primary)
            .text(text)?;
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn write_selection(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::SelectionUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClipboardError::SelectionUnsupported.to_string(),
            "Primary selection is not supported on this platform"
        );
        assert!(
            ClipboardError::Backend(arboard::Error::ClipboardNotSupported)
                .to_string()
                .starts_with("Clipboard unavailable: ")
        );
    }
}
