//! Link list page rendering.

use std::fmt::Write;

use crate::model::{LinkItem, ListSection, NestedListSection, Section};
use crate::output::RenderResult;
use crate::util::{escape_attr, escape_html};

/// Render every section of a list page, in order.
pub fn render_list_page(sections: &[Section]) -> RenderResult {
    let mut html = String::with_capacity(1024);
    for section in sections {
        match section {
            Section::List(list) => render_list(&mut html, list),
            Section::NestedList(nested) => render_nested_list(&mut html, nested),
        }
    }
    RenderResult {
        html,
        snippets: Vec::new(),
    }
}

fn render_list(html: &mut String, section: &ListSection) {
    html.push_str("<div class=\"list-section\">\n");
    let _ = writeln!(html, "<h3>{}</h3>", escape_html(&section.title));
    render_links(html, &section.content);
    html.push_str("</div>\n");
}

fn render_nested_list(html: &mut String, section: &NestedListSection) {
    html.push_str("<div class=\"list-section nested-list-section\">\n");
    let _ = writeln!(html, "<h3>{}</h3>", escape_html(&section.title));
    for subtitle in &section.subtitles {
        let _ = writeln!(html, "<h4>{}</h4>", escape_html(&subtitle.title));
        render_links(html, &subtitle.content);
    }
    html.push_str("</div>\n");
}

/// Links open in a new browsing context.
fn render_links(html: &mut String, items: &[LinkItem]) {
    html.push_str("<div class=\"list-content\">\n");
    for item in items {
        let _ = writeln!(
            html,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_attr(&item.url),
            escape_html(&item.text),
        );
    }
    html.push_str("</div>\n");
}
