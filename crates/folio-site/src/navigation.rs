//! Navigation menu.

use crate::site::Site;

/// One menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Page id the entry loads.
    pub id: String,
    /// Label shown in the menu.
    pub label: String,
}

/// Build one menu entry per descriptor, in load order.
#[must_use]
pub fn build_menu(site: &Site) -> Vec<MenuEntry> {
    site.pages()
        .map(|page| MenuEntry {
            id: page.id.clone(),
            label: page.name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::model::{PageDescriptor, PageKind};

    fn page(id: &str, name: &str) -> PageDescriptor {
        PageDescriptor {
            id: id.to_owned(),
            name: name.to_owned(),
            title: format!("{name} title"),
            subtitle: None,
            kind: PageKind::List,
            language: None,
            data: Value::Null,
        }
    }

    #[test]
    fn test_menu_follows_load_order() {
        let site = Site::from_pages([page("home", "Home"), page("glossary", "Glossary")]);

        let menu = build_menu(&site);

        assert_eq!(
            menu,
            vec![
                MenuEntry {
                    id: "home".to_owned(),
                    label: "Home".to_owned(),
                },
                MenuEntry {
                    id: "glossary".to_owned(),
                    label: "Glossary".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_menu_uses_name_not_title() {
        let site = Site::from_pages([page("a", "Short")]);

        assert_eq!(build_menu(&site)[0].label, "Short");
    }

    #[test]
    fn test_empty_site_has_empty_menu() {
        assert!(build_menu(&Site::default()).is_empty());
    }
}
