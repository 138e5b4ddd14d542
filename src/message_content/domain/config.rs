//! Rendering configuration.

use super::DEFAULT_TIME_FORMAT;
use serde::{Deserialize, Serialize};

/// Marker appended to in-flight text; renderers replace it with a cursor.
pub const CURSOR_PLACEHOLDER: &str = "\u{200B}";

/// Label shown above the output of run steps that also display their input.
pub const DEFAULT_OUTPUT_LABEL: &str = "Output";

/// Configuration for the message content view.
///
/// Missing fields fall back to their defaults when deserialised.
///
/// # Examples
///
/// ```
/// use chatview::message_content::domain::{MessageContentConfig, CURSOR_PLACEHOLDER};
///
/// let config: MessageContentConfig =
///     serde_json::from_str(r#"{"outputLabel": "Result"}"#).expect("valid config");
/// assert_eq!(config.output_label, "Result");
/// assert_eq!(config.cursor_placeholder, CURSOR_PLACEHOLDER);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageContentConfig {
    /// Marker appended to streaming text.
    pub cursor_placeholder: String,
    /// Text of the output label.
    pub output_label: String,
    /// `chrono` format string for the timestamp.
    pub time_format: String,
}

impl Default for MessageContentConfig {
    fn default() -> Self {
        Self {
            cursor_placeholder: CURSOR_PLACEHOLDER.to_owned(),
            output_label: DEFAULT_OUTPUT_LABEL.to_owned(),
            time_format: DEFAULT_TIME_FORMAT.to_owned(),
        }
    }
}
