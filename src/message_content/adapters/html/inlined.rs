//! HTML renderer for inlined elements.

use minijinja::{Environment, context};
use tracing::warn;

use super::templates;
use crate::message_content::domain::MessageElement;
use crate::message_content::ports::{InlinedElementsRenderer, ViewRenderResult};

/// Renders inlined elements as images, links or labels.
#[derive(Debug)]
pub struct HtmlInlinedElementsRenderer {
    env: Environment<'static>,
}

impl HtmlInlinedElementsRenderer {
    /// Creates the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::message_content::error::ViewRenderError`] if the
    /// built-in template fails to compile.
    pub fn new() -> ViewRenderResult<Self> {
        let mut env = Environment::new();
        env.add_template(templates::INLINED_NAME, templates::INLINED)?;
        Ok(Self { env })
    }
}

impl InlinedElementsRenderer for HtmlInlinedElementsRenderer {
    fn render(&self, elements: &[MessageElement]) -> String {
        if elements.is_empty() {
            return String::new();
        }
        self.env
            .get_template(templates::INLINED_NAME)
            .and_then(|template| template.render(context! { elements }))
            .unwrap_or_else(|error| {
                warn!(%error, count = elements.len(), "inlined elements omitted");
                String::new()
            })
    }
}
