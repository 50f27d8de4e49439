//! Copy action.

use std::time::{Duration, Instant};

use folio_site::Surface;

use crate::button::CopyButton;
use crate::clipboard::{Clipboard, ClipboardError};

/// Delay before a copied button reverts.
pub const DEFAULT_REVERT: Duration = Duration::from_millis(2000);

/// Copy failure. The button is left unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// No element with the requested id on the surface.
    #[error("No copyable element with id '{0}'")]
    MissingElement(String),
    /// Both the clipboard and the selection fallback failed.
    #[error("Failed to copy text")]
    Clipboard(#[source] ClipboardError),
}

/// Copies element text to a clipboard and drives the button feedback.
#[derive(Debug)]
pub struct CopyAction<C> {
    clipboard: C,
    revert: Duration,
}

impl<C: Clipboard> CopyAction<C> {
    /// Create an action that reverts buttons after [`DEFAULT_REVERT`].
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            revert: DEFAULT_REVERT,
        }
    }

    /// Set the revert delay.
    #[must_use]
    pub fn with_revert(mut self, revert: Duration) -> Self {
        self.revert = revert;
        self
    }

    /// Clipboard the action writes to.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Copy the text of `element_id` and mark `button` copied.
    ///
    /// Tries [`Clipboard::write_text`], then [`Clipboard::write_selection`].
    /// Triggering a button that is already copied restarts its revert timer.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if the element is missing or both writes fail.
    pub fn trigger(
        &self,
        surface: &dyn Surface,
        element_id: &str,
        button: &mut CopyButton,
        now: Instant,
    ) -> Result<(), CopyError> {
        let Some(text) = surface.text_content(element_id) else {
            tracing::warn!(element_id = %element_id, "Copy target not found");
            return Err(CopyError::MissingElement(element_id.to_owned()));
        };

        if let Err(e) = self.clipboard.write_text(text) {
            tracing::debug!(error = %e, "Clipboard write failed, trying selection");
            if let Err(e) = self.clipboard.write_selection(text) {
                tracing::error!(element_id = %element_id, error = %e, "Failed to copy text");
                return Err(CopyError::Clipboard(e));
            }
        }

        button.mark_copied(now, self.revert);
        tracing::debug!(element_id = %element_id, bytes = text.len(), "Copied");
        Ok(())
    }
}
