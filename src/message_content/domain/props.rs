//! Inputs of the message content view.

use super::{MessageElement, SectionSelector, Step};
use crate::message_content::error::StepDecodeError;
use serde::Deserialize;
use std::sync::Arc;

/// Everything the message content view reads for one render.
///
/// `elements` is shared by reference: the memoization comparator treats two
/// element lists as equal only when they are the same allocation.
#[derive(Debug, Clone)]
pub struct MessageContentProps {
    /// Elements of the conversation; the preparer picks the ones for this step.
    pub elements: Arc<[MessageElement]>,
    /// The step to render.
    pub message: Step,
    /// Whether raw HTML in the text is rendered.
    pub allow_html: Option<bool>,
    /// Whether LaTeX in the text is rendered.
    pub latex: Option<bool>,
    /// Sections to render; `None` renders both.
    pub sections: Option<SectionSelector>,
    /// Whether the step was authored by the viewer.
    pub is_user_message: bool,
}

impl MessageContentProps {
    /// Creates props with default options.
    #[must_use]
    pub const fn new(message: Step, elements: Arc<[MessageElement]>) -> Self {
        Self {
            elements,
            message,
            allow_html: None,
            latex: None,
            sections: None,
            is_user_message: false,
        }
    }

    /// Decodes props from the JSON payload sent by the chat client.
    ///
    /// # Errors
    ///
    /// Returns [`StepDecodeError::Json`] if the payload is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatview::message_content::domain::MessageContentProps;
    ///
    /// let props = MessageContentProps::from_json(
    ///     r#"{"message": {"id": "s1", "type": "assistant_message", "output": "hi"},
    ///         "sections": ["output"], "isUserMessage": true}"#,
    /// ).expect("valid payload");
    /// assert!(props.is_user_message);
    /// assert!(props.elements.is_empty());
    /// ```
    pub fn from_json(payload: &str) -> Result<Self, StepDecodeError> {
        let decoded: PropsPayload = serde_json::from_str(payload)?;
        Ok(Self {
            elements: Arc::from(decoded.elements),
            message: decoded.message,
            allow_html: decoded.allow_html,
            latex: decoded.latex,
            sections: decoded.sections,
            is_user_message: decoded.is_user_message,
        })
    }

    /// Sets whether raw HTML is rendered.
    #[must_use]
    pub const fn with_allow_html(mut self, allow_html: bool) -> Self {
        self.allow_html = Some(allow_html);
        self
    }

    /// Sets whether LaTeX is rendered.
    #[must_use]
    pub const fn with_latex(mut self, latex: bool) -> Self {
        self.latex = Some(latex);
        self
    }

    /// Restricts the rendered sections.
    #[must_use]
    pub const fn with_sections(mut self, sections: SectionSelector) -> Self {
        self.sections = Some(sections);
        self
    }

    /// Marks the step as authored by the viewer.
    #[must_use]
    pub const fn with_user_message(mut self, is_user_message: bool) -> Self {
        self.is_user_message = is_user_message;
        self
    }

    /// Returns the selected sections, defaulting to both.
    #[must_use]
    pub fn effective_sections(&self) -> SectionSelector {
        self.sections.unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropsPayload {
    #[serde(default)]
    elements: Vec<MessageElement>,
    message: Step,
    #[serde(default)]
    allow_html: Option<bool>,
    #[serde(default)]
    latex: Option<bool>,
    #[serde(default)]
    sections: Option<SectionSelector>,
    #[serde(default)]
    is_user_message: bool,
}
