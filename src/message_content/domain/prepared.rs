//! Output of content preparation.

use super::MessageElement;

/// Text ready for markdown rendering, with the step's elements partitioned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedContent {
    /// Prepared markdown text.
    pub text: String,
    /// Elements rendered below the text.
    pub inlined_elements: Vec<MessageElement>,
    /// Elements linked from the text by name.
    pub ref_elements: Vec<MessageElement>,
}

impl PreparedContent {
    /// Creates prepared content with no elements.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            inlined_elements: Vec::new(),
            ref_elements: Vec::new(),
        }
    }
}
