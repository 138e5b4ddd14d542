//! Markdown renderer backed by `pulldown-cmark`.

use pulldown_cmark::{CowStr, Event, Options, Parser, escape::escape_html, html};
use tracing::debug;

use crate::message_content::domain::{CURSOR_PLACEHOLDER, MarkdownNode};
use crate::message_content::ports::MarkdownRenderer;

const CURSOR_HTML: &str = r#"<span class="cursor"></span>"#;

/// Renders markdown nodes to HTML.
///
/// Raw HTML in the text is escaped unless the node allows it. The streaming
/// cursor marker becomes a `cursor` span. LaTeX is not typeset here; nodes
/// that ask for it are tagged with `data-latex` for the host to pick up.
#[derive(Debug, Clone)]
pub struct PulldownMarkdownRenderer {
    cursor_placeholder: String,
    options: Options,
}

impl PulldownMarkdownRenderer {
    /// Creates a renderer with tables and strikethrough enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor_placeholder: CURSOR_PLACEHOLDER.to_owned(),
            options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
        }
    }

    /// Uses a different cursor marker.
    #[must_use]
    pub fn with_cursor_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.cursor_placeholder = placeholder.into();
        self
    }

    fn push_text<'a>(&self, text: CowStr<'a>, events: &mut Vec<Event<'a>>) {
        let marker = self.cursor_placeholder.as_str();
        if marker.is_empty() || !text.contains(marker) {
            events.push(Event::Text(text));
            return;
        }

        let pieces: Vec<String> = text.split(marker).map(str::to_owned).collect();
        for (index, piece) in pieces.into_iter().enumerate() {
            if index > 0 {
                events.push(Event::Html(CowStr::Borrowed(CURSOR_HTML)));
            }
            if !piece.is_empty() {
                events.push(Event::Text(CowStr::from(piece)));
            }
        }
    }
}

impl Default for PulldownMarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for PulldownMarkdownRenderer {
    fn render(&self, node: &MarkdownNode) -> String {
        let allow_html = node.allow_html.unwrap_or(false);
        let mut events = Vec::new();
        for event in Parser::new_ext(&node.text, self.options) {
            match event {
                Event::Html(raw) if !allow_html => events.push(Event::Text(raw)),
                Event::Text(text) => self.push_text(text, &mut events),
                other => events.push(other),
            }
        }

        let mut body = String::with_capacity(node.text.len());
        html::push_html(&mut body, events.into_iter());
        format!(
            r#"<div class="markdown"{}>{body}</div>"#,
            wrapper_attributes(node)
        )
    }
}

fn wrapper_attributes(node: &MarkdownNode) -> String {
    let mut attributes = String::new();
    if node.latex == Some(true) {
        attributes.push_str(r#" data-latex="true""#);
    }
    if !node.ref_elements.is_empty() {
        let ids = node
            .ref_elements
            .iter()
            .map(|element| element.id.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        attributes.push_str(r#" data-refs=""#);
        if let Err(error) = escape_html(&mut attributes, &ids) {
            debug!(%error, "failed to escape element references");
        }
        attributes.push('"');
    }
    attributes
}
