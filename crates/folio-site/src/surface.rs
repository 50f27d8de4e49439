//! Display surface the page renderer writes into.
//!
//! [`Surface`] is the seam between dispatch and presentation. [`Document`]
//! is the in-memory implementation used by the static site generator and by
//! tests.

use std::collections::HashMap;

use folio_render::CodeSnippet;

use crate::navigation::MenuEntry;

/// Regions a page renderer updates.
pub trait Surface {
    /// Replace the navigation menu.
    fn set_menu(&mut self, menu: &[MenuEntry]);

    /// Mark the menu entry for `id` active and clear every other entry.
    fn set_active(&mut self, id: &str);

    /// Replace the page heading.
    fn set_title(&mut self, title: &str);

    /// Replace the line under the heading. `None` clears it.
    fn set_subtitle(&mut self, subtitle: Option<&str>);

    /// Replace the content region.
    ///
    /// `snippets` are the raw texts of copyable code blocks in `html`.
    fn set_content(&mut self, html: String, snippets: Vec<CodeSnippet>);

    /// Text of the element with `id`, as a copy action would read it.
    fn text_content(&self, id: &str) -> Option<&str>;
}

/// In-memory surface.
#[derive(Debug, Default, Clone)]
pub struct Document {
    menu: Vec<MenuEntry>,
    active: Option<String>,
    title: String,
    subtitle: Option<String>,
    content: String,
    snippets: HashMap<String, String>,
}

impl Document {
    /// Current menu entries.
    #[must_use]
    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    /// Id of the active menu entry.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Current heading.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current subtitle.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Current content markup.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Surface for Document {
    fn set_menu(&mut self, menu: &[MenuEntry]) {
        self.menu = menu.to_vec();
        if let Some(active) = &self.active
            && !self.menu.iter().any(|entry| &entry.id == active)
        {
            self.active = None;
        }
    }

    fn set_active(&mut self, id: &str) {
        self.active = self
            .menu
            .iter()
            .any(|entry| entry.id == id)
            .then(|| id.to_owned());
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn set_subtitle(&mut self, subtitle: Option<&str>) {
        self.subtitle = subtitle.map(ToOwned::to_owned);
    }

    fn set_content(&mut self, html: String, snippets: Vec<CodeSnippet>) {
        self.content = html;
        self.snippets = snippets.into_iter().map(|s| (s.id, s.text)).collect();
    }

    fn text_content(&self, id: &str) -> Option<&str> {
        self.snippets.get(id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn menu() -> Vec<MenuEntry> {
        ["home", "glossary"]
            .into_iter()
            .map(|id| MenuEntry {
                id: id.to_owned(),
                label: id.to_owned(),
            })
            .collect()
    }

    #[test]
    fn test_only_one_entry_active() {
        let mut doc = Document::default();
        doc.set_menu(&menu());

        doc.set_active("home");
        doc.set_active("glossary");

        assert_eq!(doc.active(), Some("glossary"));
    }

    #[test]
    fn test_unknown_active_id_clears_active() {
        let mut doc = Document::default();
        doc.set_menu(&menu());
        doc.set_active("home");

        doc.set_active("missing");

        assert_eq!(doc.active(), None);
    }

    #[test]
    fn test_content_replaces_snippets() {
        let mut doc = Document::default();
        doc.set_content(
            "<pre id=\"a\"></pre>".to_owned(),
            vec![CodeSnippet {
                id: "a".to_owned(),
                text: "let x = 1;".to_owned(),
            }],
        );
        assert_eq!(doc.text_content("a"), Some("let x = 1;"));

        doc.set_content(String::new(), Vec::new());

        assert_eq!(doc.text_content("a"), None);
        assert_eq!(doc.content(), "");
    }

    #[test]
    fn test_subtitle_cleared_by_none() {
        let mut doc = Document::default();
        doc.set_subtitle(Some("Sub"));
        doc.set_subtitle(None);

        assert_eq!(doc.subtitle(), None);
    }
}
