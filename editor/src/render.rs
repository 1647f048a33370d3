//! Markdown preview rendering.
//!
//! Stateless: the preview pane re-renders the whole buffer on every change.
//! GitHub-flavored extensions (tables, strikethrough, task lists) are
//! enabled to match what authors expect from board documents.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render a markdown document to an HTML fragment.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from the document before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
