//! Elements attached to a step: images, files, text snippets and the like.
//!
//! The element shape is owned by the chat client. Only the fields that the
//! content preparation and inline rendering read are modelled here.

use super::{ElementId, StepId};
use serde::{Deserialize, Serialize};

/// Where an element is displayed relative to the step that owns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementDisplay {
    /// Rendered inline below the step output.
    #[default]
    Inline,
    /// Rendered in a side panel and linked from the text by name.
    Side,
    /// Rendered on its own page and linked from the text by name.
    Page,
}

impl ElementDisplay {
    /// Returns `true` for displays that are referenced from the text by a link.
    #[must_use]
    pub const fn is_reference(self) -> bool {
        matches!(self, Self::Side | Self::Page)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Side => "side",
            Self::Page => "page",
        }
    }
}

/// An element attached to a step.
///
/// # Examples
///
/// ```
/// use chatview::message_content::domain::{ElementDisplay, MessageElement, StepId};
///
/// let chart = MessageElement::new("el-1", "chart", ElementDisplay::Side)
///     .with_for_id(StepId::new("step-1"));
/// assert!(chart.is_scoped_to(&StepId::new("step-1")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageElement {
    /// Unique element identifier.
    pub id: ElementId,
    /// Display name, also used to reference the element from text.
    pub name: String,
    /// Display mode.
    #[serde(default)]
    pub display: ElementDisplay,
    /// Step the element belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_id: Option<StepId>,
    /// Element type tag (`image`, `file`, `text`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Location of the element payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// MIME type of the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

impl MessageElement {
    /// Creates an element with no owning step, type or payload location.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, display: ElementDisplay) -> Self {
        Self {
            id: ElementId::new(id),
            name: name.into(),
            display,
            for_id: None,
            kind: String::new(),
            url: None,
            mime: None,
        }
    }

    /// Sets the owning step.
    #[must_use]
    pub fn with_for_id(mut self, for_id: StepId) -> Self {
        self.for_id = Some(for_id);
        self
    }

    /// Sets the element type tag.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the payload location.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the payload MIME type.
    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Returns `true` if the element belongs to the given step.
    #[must_use]
    pub fn is_scoped_to(&self, step_id: &StepId) -> bool {
        self.for_id.as_ref() == Some(step_id)
    }
}
