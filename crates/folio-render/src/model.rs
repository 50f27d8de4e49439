//! Content model for page data.
//!
//! Page data is stored as raw JSON on the descriptor and decoded here once the
//! page kind is known. List sections carry a `type` tag; entries with an
//! unrecognized or missing tag are dropped without error.

use serde::Deserialize;
use serde_json::Value;

use crate::error::RenderError;

/// External link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkItem {
    /// Link target.
    pub url: String,
    /// Link label.
    pub text: String,
}

/// Flat list of links under one heading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListSection {
    /// Section heading.
    pub title: String,
    /// Links in display order.
    pub content: Vec<LinkItem>,
}

/// Sub-heading with its own links inside a nested list section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subtitle {
    /// Sub-heading text.
    pub title: String,
    /// Links in display order.
    pub content: Vec<LinkItem>,
}

/// List section grouped under sub-headings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NestedListSection {
    /// Section heading.
    pub title: String,
    /// Sub-headings in display order.
    pub subtitles: Vec<Subtitle>,
}

/// One section of a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// `"type": "list"`.
    List(ListSection),
    /// `"type": "nested-list"`.
    NestedList(NestedListSection),
}

/// Code example attached to a glossary term.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeExample {
    /// Description shown above the code.
    #[serde(default)]
    pub text: String,
    /// Source code, rendered escaped.
    pub code: String,
}

/// Glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TermEntry {
    /// Term being defined.
    pub term: String,
    /// Definition markup (trusted unless configured otherwise).
    #[serde(default)]
    pub definition: String,
    /// Flags formatted as `"Name: Description"`.
    #[serde(default)]
    pub flags: Vec<String>,
    /// Code examples in display order.
    #[serde(default)]
    pub examples: Vec<CodeExample>,
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn as_entries(data: &Value) -> Result<&[Value], RenderError> {
    data.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| RenderError::NotAnArray(json_type_name(data)))
}

fn decode_entry<T: serde::de::DeserializeOwned>(
    value: &Value,
    kind: &'static str,
    index: usize,
) -> Result<T, RenderError> {
    T::deserialize(value).map_err(|source| RenderError::InvalidEntry {
        kind,
        index,
        source,
    })
}

/// Decode list page data into sections.
///
/// Sections whose `type` is neither `"list"` nor `"nested-list"` are skipped.
///
/// # Errors
///
/// Returns [`RenderError`] if `data` is not an array or a recognized section
/// is malformed.
pub fn decode_sections(data: &Value) -> Result<Vec<Section>, RenderError> {
    let mut sections = Vec::new();
    for (index, value) in as_entries(data)?.iter().enumerate() {
        match value.get("type").and_then(Value::as_str) {
            Some("list") => sections.push(Section::List(decode_entry(
                value,
                "list section",
                index,
            )?)),
            Some("nested-list") => sections.push(Section::NestedList(decode_entry(
                value,
                "nested-list section",
                index,
            )?)),
            other => {
                tracing::debug!(index, section_type = ?other, "Skipping unrecognized section");
            }
        }
    }
    Ok(sections)
}

/// Decode terms page data into glossary entries, in source order.
///
/// # Errors
///
/// Returns [`RenderError`] if `data` is not an array or an entry is malformed.
pub fn decode_terms(data: &Value) -> Result<Vec<TermEntry>, RenderError> {
    as_entries(data)?
        .iter()
        .enumerate()
        .map(|(index, value)| decode_entry(value, "term", index))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_sections_both_kinds() {
        let data = json!([
            {"type": "list", "title": "Docs", "content": [{"url": "https://a", "text": "A"}]},
            {"type": "nested-list", "title": "Tools", "subtitles": [
                {"title": "Editors", "content": [{"url": "https://b", "text": "B"}]}
            ]}
        ]);

        let sections = decode_sections(&data).unwrap();

        assert_eq!(sections.len(), 2);
        assert!(matches!(&sections[0], Section::List(s) if s.title == "Docs"));
        assert!(matches!(&sections[1], Section::NestedList(s) if s.subtitles.len() == 1));
    }

    #[test]
    fn test_decode_sections_skips_unknown_types() {
        let data = json!([
            {"type": "carousel", "title": "Ignored"},
            {"title": "No type"},
            {"type": "list", "title": "Kept", "content": []}
        ]);

        let sections = decode_sections(&data).unwrap();

        assert_eq!(
            sections,
            vec![Section::List(ListSection {
                title: "Kept".to_owned(),
                content: vec![],
            })]
        );
    }

    #[test]
    fn test_decode_sections_malformed_known_type() {
        let data = json!([{"type": "list", "title": "Broken"}]);

        let err = decode_sections(&data).unwrap_err();

        assert!(matches!(
            err,
            RenderError::InvalidEntry {
                kind: "list section",
                index: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_sections_not_array() {
        let err = decode_sections(&json!({"type": "list"})).unwrap_err();
        assert_eq!(err.to_string(), "page data must be an array, found an object");
    }

    #[test]
    fn test_decode_terms_defaults() {
        let data = json!([{"term": "Bare"}]);

        let terms = decode_terms(&data).unwrap();

        assert_eq!(
            terms,
            vec![TermEntry {
                term: "Bare".to_owned(),
                definition: String::new(),
                flags: vec![],
                examples: vec![],
            }]
        );
    }

    #[test]
    fn test_decode_terms_missing_term() {
        let data = json!([{"term": "Ok"}, {"definition": "orphan"}]);

        let err = decode_terms(&data).unwrap_err();

        assert!(matches!(
            err,
            RenderError::InvalidEntry {
                kind: "term",
                index: 1,
                ..
            }
        ));
    }
}
