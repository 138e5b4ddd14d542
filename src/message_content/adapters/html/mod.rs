//! HTML view adapter built on `minijinja` templates.
//!
//! The markup mirrors the chat client's message layout so that existing
//! stylesheets apply unchanged.

mod inlined;
mod templates;

pub use inlined::HtmlInlinedElementsRenderer;

use minijinja::{Environment, context};
use serde::Serialize;

use super::PulldownMarkdownRenderer;
use crate::message_content::domain::{Alignment, ContentBlock, TimestampBlock, ViewNode, ViewTree};
use crate::message_content::ports::{
    InlinedElementsRenderer, MarkdownRenderer, ViewRenderResult, ViewRenderer,
};

/// Renders a [`ViewTree`] to an HTML fragment.
///
/// Markdown nodes and inlined elements are delegated to the supplied
/// renderers; the surrounding layout comes from templates.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use chatview::message_content::adapters::{ElementContentPreparer, HtmlViewRenderer};
/// use chatview::message_content::domain::{MessageContentProps, Step};
/// use chatview::message_content::ports::ViewRenderer;
/// use chatview::message_content::services::MessageContentService;
/// use chrono::Utc;
///
/// let service = MessageContentService::new(Arc::new(ElementContentPreparer));
/// let props = MessageContentProps::new(
///     Step::new("s1", "assistant_message").with_output("**hi**"),
///     Arc::from(Vec::new()),
/// );
/// let tree = service.render(&props, &Utc);
/// let html = HtmlViewRenderer::with_defaults()
///     .and_then(|renderer| renderer.render(&tree))
///     .expect("html");
/// assert!(html.contains("<strong>hi</strong>"));
/// ```
#[derive(Debug)]
pub struct HtmlViewRenderer<M, I> {
    env: Environment<'static>,
    markdown: M,
    inlined: I,
}

impl HtmlViewRenderer<PulldownMarkdownRenderer, HtmlInlinedElementsRenderer> {
    /// Creates a renderer using the bundled markdown and element renderers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::message_content::error::ViewRenderError`] if a
    /// built-in template fails to compile.
    pub fn with_defaults() -> ViewRenderResult<Self> {
        Self::new(
            PulldownMarkdownRenderer::new(),
            HtmlInlinedElementsRenderer::new()?,
        )
    }
}

impl<M, I> HtmlViewRenderer<M, I>
where
    M: MarkdownRenderer,
    I: InlinedElementsRenderer,
{
    /// Creates a renderer around the given collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`crate::message_content::error::ViewRenderError`] if a
    /// built-in template fails to compile.
    pub fn new(markdown: M, inlined: I) -> ViewRenderResult<Self> {
        let mut env = Environment::new();
        env.add_template(templates::MESSAGE_NAME, templates::MESSAGE)?;
        env.add_template(templates::CONTENT_NAME, templates::CONTENT)?;
        env.add_template(templates::TIMESTAMP_NAME, templates::TIMESTAMP)?;
        Ok(Self {
            env,
            markdown,
            inlined,
        })
    }

    fn render_node(&self, node: &ViewNode) -> ViewRenderResult<String> {
        match node {
            ViewNode::Content(block) => self.render_content(block),
            ViewNode::InlinedElements(elements) => Ok(self.inlined.render(elements)),
            ViewNode::Timestamp(block) => self.render_timestamp(block),
        }
    }

    fn render_content(&self, block: &ContentBlock) -> ViewRenderResult<String> {
        let input = block
            .input
            .as_ref()
            .map(|markdown| self.markdown.render(markdown));
        let output = block.output.as_ref().map(|section| OutputContext {
            label: section.label.clone(),
            html: self.markdown.render(&section.markdown),
        });
        let template = self.env.get_template(templates::CONTENT_NAME)?;
        Ok(template.render(context! { input, output })?)
    }

    fn render_timestamp(&self, block: &TimestampBlock) -> ViewRenderResult<String> {
        let template = self.env.get_template(templates::TIMESTAMP_NAME)?;
        Ok(template.render(context! {
            text => &block.text,
            align => alignment_class(block.alignment),
        })?)
    }
}

impl<M, I> ViewRenderer for HtmlViewRenderer<M, I>
where
    M: MarkdownRenderer,
    I: InlinedElementsRenderer,
{
    fn render(&self, tree: &ViewTree) -> ViewRenderResult<String> {
        let nodes = tree
            .nodes()
            .iter()
            .map(|node| self.render_node(node))
            .collect::<ViewRenderResult<Vec<_>>>()?;
        let template = self.env.get_template(templates::MESSAGE_NAME)?;
        Ok(template.render(context! { nodes })?)
    }
}

#[derive(Serialize)]
struct OutputContext {
    label: Option<String>,
    html: String,
}

const fn alignment_class(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Start => "self-start",
        Alignment::End => "self-end",
    }
}
