//! The step record rendered by the message content view.
//!
//! A step is either a chat message (`user_message`, `assistant_message`, ...)
//! or an intermediate run step such as a tool call. Its shape follows the
//! camelCase JSON produced by the chat client.

use super::{CreatedAt, ShowInput, StepId};
use crate::message_content::error::StepDecodeError;
use serde::{Deserialize, Deserializer, Serialize};

/// A chat step as delivered by the client.
///
/// # Examples
///
/// ```
/// use chatview::message_content::domain::{ShowInput, Step};
///
/// let step = Step::new("step-1", "tool")
///     .with_input("{\"query\": 1}")
///     .with_output("result")
///     .with_show_input(ShowInput::from_language("json"));
///
/// assert!(!step.is_message());
/// assert!(step.has_input());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Step identifier.
    pub id: StepId,
    /// Step type tag, for example `assistant_message` or `tool`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Output text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub output: String,
    /// Input text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub input: String,
    /// Language used to prepare the output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Whether the step is still receiving tokens.
    #[serde(default)]
    pub streaming: bool,
    /// Whether, and how, the input is shown.
    #[serde(default)]
    pub show_input: ShowInput,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<CreatedAt>,
    /// Display name of the step author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Thread the step belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    /// Parent step, for nested steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<StepId>,
}

impl Step {
    /// Creates an empty step of the given type.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: StepId::new(id),
            kind: kind.into(),
            output: String::new(),
            input: String::new(),
            language: None,
            streaming: false,
            show_input: ShowInput::Hidden,
            created_at: None,
            name: None,
            thread_id: None,
            parent_id: None,
        }
    }

    /// Decodes a step from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`StepDecodeError::Json`] if the payload is not a valid step.
    pub fn from_json(payload: &str) -> Result<Self, StepDecodeError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Sets the output text.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the input text.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the output language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Marks the step as streaming or complete.
    #[must_use]
    pub const fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    /// Sets the input visibility.
    #[must_use]
    pub fn with_show_input(mut self, show_input: impl Into<ShowInput>) -> Self {
        self.show_input = show_input.into();
        self
    }

    /// Sets the creation time.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<CreatedAt>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Sets the author name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns `true` for chat messages, as opposed to run steps.
    #[must_use]
    pub fn is_message(&self) -> bool {
        self.kind.contains("message")
    }

    /// Returns `true` if the input text is non-empty.
    #[must_use]
    pub fn has_input(&self) -> bool {
        !self.input.is_empty()
    }

    /// Returns `true` if the output text is non-empty.
    #[must_use]
    pub fn has_output(&self) -> bool {
        !self.output.is_empty()
    }

    /// Returns the fields that decide what the view renders.
    #[must_use]
    pub fn render_snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            id: &self.id,
            output: &self.output,
            input: &self.input,
            language: self.language.as_deref(),
            streaming: self.streaming,
            show_input: &self.show_input,
            kind: &self.kind,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The render-relevant projection of a [`Step`].
///
/// Two steps with equal snapshots produce the same content; fields outside
/// the snapshot (timestamps, names, thread links) never force a re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSnapshot<'a> {
    /// Step identifier.
    pub id: &'a StepId,
    /// Output text.
    pub output: &'a str,
    /// Input text.
    pub input: &'a str,
    /// Output language.
    pub language: Option<&'a str>,
    /// Streaming flag.
    pub streaming: bool,
    /// Input visibility.
    pub show_input: &'a ShowInput,
    /// Step type tag.
    pub kind: &'a str,
}
