//! Copy button state.

use std::time::{Duration, Instant};

/// Label shown while a copy is acknowledged.
pub const COPIED_LABEL: &str = "Copied!";

/// State of one example's copy button.
///
/// While copied, the button shows [`COPIED_LABEL`] and carries the `copied`
/// flag. The label it showed before the first copy is kept, so restarting the
/// revert timer never loses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyButton {
    label: String,
    original: Option<String>,
    revert_at: Option<Instant>,
}

impl CopyButton {
    /// Create a button showing `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            original: None,
            revert_at: None,
        }
    }

    /// Current label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the button shows the copied state.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.revert_at.is_some()
    }

    /// When the button reverts, if it is in the copied state.
    #[must_use]
    pub fn revert_at(&self) -> Option<Instant> {
        self.revert_at
    }

    /// Enter the copied state, reverting `revert` after `now`.
    ///
    /// If already copied, only the deadline moves.
    pub(crate) fn mark_copied(&mut self, now: Instant, revert: Duration) {
        if self.original.is_none() {
            let original = std::mem::replace(&mut self.label, COPIED_LABEL.to_owned());
            self.original = Some(original);
        }
        self.revert_at = Some(now + revert);
    }

    /// Revert to the original label once the deadline has passed.
    ///
    /// Returns `true` if the button reverted.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(deadline) if now >= deadline => {
                if let Some(original) = self.original.take() {
                    self.label = original;
                }
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVERT: Duration = Duration::from_millis(2000);

    #[test]
    fn test_mark_and_revert() {
        let start = Instant::now();
        let mut button = CopyButton::new("Copy Code");

        button.mark_copied(start, REVERT);

        assert_eq!(button.label(), "Copied!");
        assert!(button.is_copied());
        assert!(!button.tick(start + Duration::from_millis(1999)));
        assert!(button.tick(start + REVERT));
        assert_eq!(button.label(), "Copy Code");
        assert!(!button.is_copied());
    }

    #[test]
    fn test_restart_keeps_original_label() {
        let start = Instant::now();
        let mut button = CopyButton::new("Copy Code");

        button.mark_copied(start, REVERT);
        button.mark_copied(start + Duration::from_millis(1500), REVERT);

        // First deadline no longer applies
        assert!(!button.tick(start + REVERT));
        assert_eq!(button.label(), "Copied!");

        assert!(button.tick(start + Duration::from_millis(3500)));
        assert_eq!(button.label(), "Copy Code");
        // Reverts exactly once
        assert!(!button.tick(start + Duration::from_millis(9000)));
    }

    #[test]
    fn test_tick_on_idle_button() {
        let mut button = CopyButton::new("Copy Code");

        assert!(!button.tick(Instant::now()));
        assert_eq!(button.label(), "Copy Code");
        assert_eq!(button.revert_at(), None);
    }
}
