//! Framework-agnostic view tree produced by the message content view.
//!
//! The host view layer walks the tree and maps each node onto its own
//! widgets. Nodes appear in display order, top to bottom.

use super::MessageElement;

/// Horizontal placement of the timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Leading edge; used for messages from others.
    Start,
    /// Trailing edge; used for the viewer's own messages.
    End,
}

impl Alignment {
    /// Picks the alignment for a message authored by the viewer or not.
    #[must_use]
    pub const fn for_author(is_user_message: bool) -> Self {
        if is_user_message { Self::End } else { Self::Start }
    }
}

/// Text handed to the markdown renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownNode {
    /// Prepared markdown text.
    pub text: String,
    /// Whether raw HTML is rendered.
    pub allow_html: Option<bool>,
    /// Whether LaTeX is rendered.
    pub latex: Option<bool>,
    /// Elements linked from the text.
    pub ref_elements: Vec<MessageElement>,
}

/// The output half of a content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSection {
    /// Label shown above the output, if any.
    pub label: Option<String>,
    /// The output text.
    pub markdown: MarkdownNode,
}

/// Input above output, stacked vertically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Input text, when displayed.
    pub input: Option<MarkdownNode>,
    /// Output text, when displayed.
    pub output: Option<OutputSection>,
}

/// Formatted creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampBlock {
    /// Display text, never empty.
    pub text: String,
    /// Placement.
    pub alignment: Alignment,
}

/// A node of the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    /// Input and output text.
    Content(ContentBlock),
    /// Elements rendered below the output, possibly none.
    InlinedElements(Vec<MessageElement>),
    /// Creation time.
    Timestamp(TimestampBlock),
}

/// Ordered list of nodes. An empty tree renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewTree {
    nodes: Vec<ViewNode>,
}

impl ViewTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a node below the existing ones.
    pub fn push(&mut self, node: ViewNode) {
        self.nodes.push(node);
    }

    /// Returns the nodes in display order.
    #[must_use]
    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    /// Returns `true` if nothing is rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the content block, if rendered.
    #[must_use]
    pub fn content(&self) -> Option<&ContentBlock> {
        self.nodes.iter().find_map(|node| match node {
            ViewNode::Content(block) => Some(block),
            ViewNode::InlinedElements(_) | ViewNode::Timestamp(_) => None,
        })
    }

    /// Returns the inlined elements, if the block is rendered.
    #[must_use]
    pub fn inlined_elements(&self) -> Option<&[MessageElement]> {
        self.nodes.iter().find_map(|node| match node {
            ViewNode::InlinedElements(elements) => Some(elements.as_slice()),
            ViewNode::Content(_) | ViewNode::Timestamp(_) => None,
        })
    }

    /// Returns the timestamp block, if rendered.
    #[must_use]
    pub fn timestamp(&self) -> Option<&TimestampBlock> {
        self.nodes.iter().find_map(|node| match node {
            ViewNode::Timestamp(block) => Some(block),
            ViewNode::Content(_) | ViewNode::InlinedElements(_) => None,
        })
    }
}

impl IntoIterator for ViewTree {
    type Item = ViewNode;
    type IntoIter = std::vec::IntoIter<ViewNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
