//! Rendering ports: markdown text, inlined elements and whole view trees.

use crate::message_content::{
    domain::{MarkdownNode, MessageElement, ViewTree},
    error::ViewRenderError,
};

/// Result type for view rendering operations.
pub type ViewRenderResult<T> = Result<T, ViewRenderError>;

/// Port for rendering prepared markdown text.
#[cfg_attr(test, mockall::automock)]
pub trait MarkdownRenderer: Send + Sync {
    /// Renders one markdown node to markup.
    fn render(&self, node: &MarkdownNode) -> String;
}

/// Port for rendering the elements shown below the output.
pub trait InlinedElementsRenderer: Send + Sync {
    /// Renders the elements to markup. An empty slice renders nothing.
    fn render(&self, elements: &[MessageElement]) -> String;
}

/// Port for turning a complete view tree into markup.
pub trait ViewRenderer: Send + Sync {
    /// Renders the tree.
    ///
    /// # Errors
    ///
    /// Returns [`ViewRenderError`] if the markup cannot be produced.
    fn render(&self, tree: &ViewTree) -> ViewRenderResult<String>;
}
