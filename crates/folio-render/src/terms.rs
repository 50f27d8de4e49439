//! Glossary page rendering.
//!
//! A terms page is a table of contents followed by one block per term, both
//! in case-insensitive alphabetical order. Anchors come from [`slugify`], so
//! TOC links and block ids always agree. Example code is escaped; definitions
//! are trusted markup unless [`TermsOptions::trust_definitions`] is off.

use std::borrow::Cow;
use std::fmt::Write;

use icu_collator::{Collator, CollatorPreferences};
use icu_collator::options::{CollatorOptions, Strength};

use crate::highlight::Highlighter;
use crate::model::{CodeExample, TermEntry};
use crate::output::{CodeSnippet, RenderResult};
use crate::util::{escape_attr, escape_html, slugify};

/// Label shown on copy buttons.
pub const COPY_LABEL: &str = "Copy Code";

/// Options for [`render_terms_page`].
#[derive(Debug, Clone)]
pub struct TermsOptions {
    /// Language tag for code blocks.
    pub language: String,
    /// Emit definitions as markup (`true`) or as escaped text.
    pub trust_definitions: bool,
}

impl Default for TermsOptions {
    fn default() -> Self {
        Self {
            language: "javascript".to_owned(),
            trust_definitions: true,
        }
    }
}

/// Sort a copy of `terms` by term with root-locale collation, ignoring case.
///
/// Punctuation sorts before letters and accented letters sort next to their
/// base letter. The sort is stable, so terms that differ only in case keep
/// their source order.
pub fn sort_terms(terms: &[TermEntry]) -> Vec<&TermEntry> {
    let mut sorted: Vec<&TermEntry> = terms.iter().collect();

    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(CollatorPreferences::default(), options) {
        Ok(collator) => sorted.sort_by(|a, b| collator.compare(&a.term, &b.term)),
        Err(e) => {
            tracing::warn!(error = %e, "Collator unavailable, sorting by lowercase code point");
            sorted.sort_by_cached_key(|entry| entry.term.to_lowercase());
        }
    }
    sorted
}

/// Render a glossary page and run `highlighter` over the result.
pub fn render_terms_page(
    terms: &[TermEntry],
    options: &TermsOptions,
    highlighter: &dyn Highlighter,
) -> RenderResult {
    let sorted = sort_terms(terms);
    let mut html = String::with_capacity(4096);
    let mut snippets = Vec::new();

    render_toc(&mut html, &sorted);
    for entry in &sorted {
        render_term(&mut html, &mut snippets, entry, options);
    }

    highlighter.highlight(&mut html, &options.language);

    RenderResult { html, snippets }
}

fn render_toc(html: &mut String, sorted: &[&TermEntry]) {
    html.push_str("<div class=\"table-of-contents\">\n");
    html.push_str("<h2>Table of Contents</h2>\n");
    html.push_str("<ul class=\"toc-list\">\n");
    for entry in sorted {
        let _ = writeln!(
            html,
            "<li><a href=\"#{}\">{}</a></li>",
            escape_attr(&slugify(&entry.term)),
            escape_html(&entry.term),
        );
    }
    html.push_str("</ul>\n</div>\n");
}

fn render_term(
    html: &mut String,
    snippets: &mut Vec<CodeSnippet>,
    entry: &TermEntry,
    options: &TermsOptions,
) {
    let id = slugify(&entry.term);
    let definition = if options.trust_definitions {
        Cow::Borrowed(entry.definition.as_str())
    } else {
        escape_html(&entry.definition)
    };

    let _ = writeln!(html, "<div class=\"term-block\" id=\"{}\">", escape_attr(&id));
    let _ = writeln!(
        html,
        "<div class=\"term-header\">\n<h3 class=\"term-title\">{}</h3>\n</div>",
        escape_html(&entry.term),
    );
    html.push_str("<div class=\"term-content\">\n");
    let _ = writeln!(html, "<div class=\"term-definition\">{definition}</div>");

    if !entry.flags.is_empty() {
        html.push_str("<div class=\"term-flags\">\n");
        for flag in &entry.flags {
            render_flag(html, flag);
        }
        html.push_str("</div>\n");
    }

    if !entry.examples.is_empty() {
        html.push_str("<div class=\"term-examples\">\n");
        for (index, example) in entry.examples.iter().enumerate() {
            let example_id = format!("{id}-example-{index}");
            render_example(html, &example_id, example, &options.language);
            snippets.push(CodeSnippet {
                id: example_id,
                text: example.code.clone(),
            });
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</div>\n");
}

/// Split on the first `": "` into a bold label and a description.
fn render_flag(html: &mut String, flag: &str) {
    match flag.split_once(": ") {
        Some((name, description)) => {
            let _ = writeln!(
                html,
                "<span class=\"flag\"><strong>{}</strong>: {}</span>",
                escape_html(name),
                escape_html(description),
            );
        }
        None => {
            let _ = writeln!(html, "<span class=\"flag\">{}</span>", escape_html(flag));
        }
    }
}

fn render_example(html: &mut String, example_id: &str, example: &CodeExample, language: &str) {
    let id = escape_attr(example_id);
    html.push_str("<div class=\"example\">\n<div class=\"example-header\">\n");
    let _ = writeln!(
        html,
        "<span class=\"example-text\">{}</span>",
        escape_html(&example.text),
    );
    let _ = writeln!(
        html,
        "<button class=\"copy-btn\" type=\"button\" data-copy-target=\"{id}\">{COPY_LABEL}</button>",
    );
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<pre class=\"example-code\" id=\"{id}\"><code class=\"language-{}\">{}</code></pre>",
        escape_attr(language),
        escape_html(&example.code),
    );
    html.push_str("</div>\n");
}
