//! Loaded descriptor set.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::model::PageDescriptor;

/// Descriptors keyed by id, in load order.
///
/// Immutable once built; the first descriptor inserted for an id wins.
#[derive(Debug, Default, Clone)]
pub struct Site {
    pages: IndexMap<String, PageDescriptor>,
}

impl Site {
    /// Build a site from descriptors, skipping duplicate ids.
    pub fn from_pages(pages: impl IntoIterator<Item = PageDescriptor>) -> Self {
        let mut site = Self::default();
        for page in pages {
            if let Err(page) = site.insert(page) {
                tracing::warn!(id = %page.id, "Duplicate page id, keeping first");
            }
        }
        site
    }

    /// Insert a descriptor, handing it back if the id is already taken.
    pub(crate) fn insert(&mut self, page: PageDescriptor) -> Result<(), PageDescriptor> {
        match self.pages.entry(page.id.clone()) {
            Entry::Occupied(_) => Err(page),
            Entry::Vacant(slot) => {
                slot.insert(page);
                Ok(())
            }
        }
    }

    /// Look up a descriptor by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PageDescriptor> {
        self.pages.get(id)
    }

    /// Descriptors in load order.
    pub fn pages(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages.values()
    }

    /// First loaded descriptor.
    #[must_use]
    pub fn first(&self) -> Option<&PageDescriptor> {
        self.pages.first().map(|(_, page)| page)
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no descriptor is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::model::PageKind;

    fn page(id: &str, name: &str) -> PageDescriptor {
        PageDescriptor {
            id: id.to_owned(),
            name: name.to_owned(),
            title: name.to_owned(),
            subtitle: None,
            kind: PageKind::List,
            language: None,
            data: Value::Null,
        }
    }

    #[test]
    fn test_keeps_insertion_order() {
        let site = Site::from_pages([page("b", "B"), page("a", "A"), page("c", "C")]);

        let ids: Vec<&str> = site.pages().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(site.first().unwrap().id, "b");
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let site = Site::from_pages([page("home", "First"), page("home", "Second")]);

        assert_eq!(site.len(), 1);
        assert_eq!(site.get("home").unwrap().name, "First");
    }

    #[test]
    fn test_empty_site() {
        let site = Site::default();

        assert!(site.is_empty());
        assert!(site.first().is_none());
        assert!(site.get("home").is_none());
    }
}
