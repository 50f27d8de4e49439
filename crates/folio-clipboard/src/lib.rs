//! Copy-to-clipboard for Folio code examples.
//!
//! [`CopyAction::trigger`] reads an example's text from a
//! [`Surface`](folio_site::Surface), writes it to a [`Clipboard`], and flips
//! the example's [`CopyButton`] to "Copied!" until its revert deadline.
//! Time is passed in explicitly, so button state can be driven by any event
//! loop (or by tests) through [`CopyButton::tick`].

mod action;
mod button;
mod clipboard;

pub use action::{CopyAction, CopyError, DEFAULT_REVERT};
pub use button::{COPIED_LABEL, CopyButton};
pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
