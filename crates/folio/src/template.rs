//! HTML page shell for static output.
//!
//! Wraps a rendered [`Document`] in a complete page: navigation, heading,
//! content, optional stylesheet and highlighter script, and the inline
//! script that drives copy buttons in the browser.

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use folio_render::{escape_attr, escape_html, slugify};
use folio_site::Document;

/// Filename of the default page.
pub(crate) const INDEX_FILE: &str = "index.html";

/// Output filename for every page id.
///
/// Names come from the slugified id. `index.html` is reserved for the default
/// page, and a name already taken gets a `-2`, `-3`, ... suffix, so every id
/// maps to its own file.
#[derive(Debug, Default)]
pub(crate) struct PageFiles {
    files: HashMap<String, String>,
}

impl PageFiles {
    /// Assign filenames to `ids` in order.
    pub(crate) fn assign<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut taken = HashSet::from([INDEX_FILE.to_owned()]);
        let mut files = HashMap::new();
        for id in ids {
            let mut stem = slugify(id);
            if stem.is_empty() || stem == "-" {
                stem = "page".to_owned();
            }
            let mut file = format!("{stem}.html");
            let mut n = 2;
            while !taken.insert(file.clone()) {
                file = format!("{stem}-{n}.html");
                n += 1;
            }
            files.insert(id.to_owned(), file);
        }
        Self { files }
    }

    /// Filename for `id`, if it was assigned.
    pub(crate) fn get(&self, id: &str) -> Option<&str> {
        self.files.get(id).map(String::as_str)
    }
}

/// Page shell settings shared by every page of a build.
pub(crate) struct Shell<'a> {
    pub(crate) files: &'a PageFiles,
    pub(crate) stylesheet: Option<&'a str>,
    pub(crate) highlight_script: Option<&'a str>,
    pub(crate) revert_ms: u64,
}

impl Shell<'_> {
    /// Render `doc` as a complete HTML page.
    pub(crate) fn render(&self, doc: &Document) -> String {
        let mut html = String::with_capacity(doc.content().len() + 4096);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(doc.title()));
        if let Some(href) = self.stylesheet {
            let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{}\">", escape_attr(href));
        }
        html.push_str("</head>\n<body>\n");

        render_nav(&mut html, doc, self.files);

        html.push_str("<header class=\"page-header\">\n");
        let _ = writeln!(html, "<h1 id=\"page-title\">{}</h1>", escape_html(doc.title()));
        if let Some(subtitle) = doc.subtitle() {
            let _ = writeln!(html, "<p id=\"page-subtitle\">{}</p>", escape_html(subtitle));
        }
        html.push_str("</header>\n");

        html.push_str("<main id=\"content\">\n");
        html.push_str(doc.content());
        html.push_str("</main>\n");

        if let Some(src) = self.highlight_script {
            let _ = writeln!(html, "<script src=\"{}\"></script>", escape_attr(src));
        }
        let _ = writeln!(
            html,
            "<script>\n{}</script>",
            COPY_SCRIPT.replace("REVERT_MS", &self.revert_ms.to_string())
        );
        html.push_str("</body>\n</html>\n");
        html
    }
}

fn render_nav(html: &mut String, doc: &Document, files: &PageFiles) {
    html.push_str("<nav class=\"navigation\">\n<ul class=\"nav-list\">\n");
    for entry in doc.menu() {
        let Some(file) = files.get(&entry.id) else {
            tracing::warn!(id = %entry.id, "No output file for menu entry");
            continue;
        };
        let class = if doc.active() == Some(entry.id.as_str()) {
            "nav-link active"
        } else {
            "nav-link"
        };
        let _ = writeln!(
            html,
            "<li><a href=\"{}\" class=\"{class}\" data-page=\"{}\">{}</a></li>",
            escape_attr(file),
            escape_attr(&entry.id),
            escape_html(&entry.label),
        );
    }
    html.push_str("</ul>\n</nav>\n");
}

/// Browser side of the copy action: clipboard first, selection copy as
/// fallback, one revert timer per button restarted on every click.
const COPY_SCRIPT: &str = r#"document.addEventListener("click", function (event) {
  var button = event.target.closest(".copy-btn");
  if (!button) return;
  var target = document.getElementById(button.dataset.copyTarget);
  if (!target) return;
  var text = target.textContent;
  function copied() {
    if (!button.dataset.label) button.dataset.label = button.textContent;
    button.textContent = "Copied!";
    button.classList.add("copied");
    clearTimeout(button.revertTimer);
    button.revertTimer = setTimeout(function () {
      button.textContent = button.dataset.label;
      delete button.dataset.label;
      button.classList.remove("copied");
    }, REVERT_MS);
  }
  function fallback() {
    var range = document.createRange();
    range.selectNodeContents(target);
    var selection = window.getSelection();
    selection.removeAllRanges();
    selection.addRange(range);
    var ok = false;
    try { ok = document.execCommand("copy"); } catch (e) { ok = false; }
    selection.removeAllRanges();
    if (ok) copied(); else console.error("Failed to copy text");
  }
  if (navigator.clipboard) {
    navigator.clipboard.writeText(text).then(copied, fallback);
  } else {
    fallback();
  }
});
"#;
