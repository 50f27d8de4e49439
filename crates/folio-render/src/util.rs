//! Shared helpers for HTML output.

use std::borrow::Cow;

/// Escape text for use as element content.
///
/// Produces the same result as assigning `text` to an element's text content
/// and reading back its markup: `&`, `<` and `>` are escaped.
///
/// # Examples
///
/// ```
/// use folio_render::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// Derive an anchor-safe identifier from a display string.
///
/// Lowercases the input, replaces every character outside `[a-z0-9]` with
/// `-`, then collapses runs of `-` into one. Leading and trailing dashes are
/// kept, so the function is idempotent.
///
/// # Examples
///
/// ```
/// use folio_render::slugify;
///
/// assert_eq!(slugify("C++ Templates"), "c-templates");
/// assert_eq!(slugify("c-templates"), "c-templates");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        let c = if c.is_ascii_lowercase() || c.is_ascii_digit() {
            c
        } else {
            '-'
        };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_symbols() {
        assert_eq!(slugify("C++ Templates"), "c-templates");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for input in ["C++ Templates", "Hello, World!", "--x--", "Ünïcode Term", ""] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_slugify_keeps_edge_dashes() {
        assert_eq!(slugify("C++"), "c-");
        assert_eq!(slugify(" leading"), "-leading");
    }

    #[test]
    fn test_slugify_non_ascii_becomes_dash() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn test_slugify_digits_preserved() {
        assert_eq!(slugify("HTTP/2 Push"), "http-2-push");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b < c > d"), "a &amp; b &lt; c &gt; d");
        assert_eq!(escape_html("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a\"b"), "a&quot;b");
        assert_eq!(escape_attr("x<y"), "x&lt;y");
    }
}
