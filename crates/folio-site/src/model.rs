//! Page descriptor model.

use serde::Deserialize;
use serde_json::Value;

/// Layout a descriptor asks for.
///
/// Unknown layouts still load; they fail at dispatch time instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PageKind {
    /// Link lists (`"list"`).
    List,
    /// Glossary of terms (`"terms"`).
    Terms,
    /// Any other declared type.
    Other(String),
}

impl From<String> for PageKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "list" => Self::List,
            "terms" => Self::Terms,
            _ => Self::Other(value),
        }
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Terms => f.write_str("terms"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

/// One page's content and metadata, loaded from one JSON file.
///
/// `data` is kept as raw JSON; its shape depends on `kind` and is decoded by
/// the page renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageDescriptor {
    /// Unique key.
    pub id: String,
    /// Menu label.
    pub name: String,
    /// Page heading.
    pub title: String,
    /// Optional line under the heading.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Layout selector.
    #[serde(rename = "type")]
    pub kind: PageKind,
    /// Code language for glossary examples.
    #[serde(default)]
    pub language: Option<String>,
    /// Sections or term entries.
    #[serde(default)]
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_full_descriptor() {
        let json = r#"{
            "id": "glossary",
            "name": "Glossary",
            "title": "Terms",
            "subtitle": "Words we use",
            "type": "terms",
            "language": "rust",
            "data": [{"term": "Borrow"}]
        }"#;

        let page: PageDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(page.id, "glossary");
        assert_eq!(page.kind, PageKind::Terms);
        assert_eq!(page.subtitle.as_deref(), Some("Words we use"));
        assert_eq!(page.language.as_deref(), Some("rust"));
        assert!(page.data.is_array());
    }

    #[test]
    fn test_parse_minimal_descriptor() {
        let json = r#"{"id": "home", "name": "Home", "title": "Welcome", "type": "list"}"#;

        let page: PageDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(page.kind, PageKind::List);
        assert!(page.subtitle.is_none());
        assert!(page.data.is_null());
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let json = r#"{"id": "x", "name": "X", "title": "X", "type": "gallery"}"#;

        let page: PageDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(page.kind, PageKind::Other("gallery".to_owned()));
        assert_eq!(page.kind.to_string(), "gallery");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let json = r#"{"name": "X", "title": "X", "type": "list"}"#;
        assert!(serde_json::from_str::<PageDescriptor>(json).is_err());
    }
}
