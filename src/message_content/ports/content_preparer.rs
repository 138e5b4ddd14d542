//! Content preparation port.
//!
//! Preparation resolves element references in the raw text and partitions
//! the step's elements into inlined and referenced ones.

use crate::message_content::domain::{MessageElement, PreparedContent, StepId};

/// Port for turning raw step text into markdown ready for rendering.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Only consider elements scoped to `step_id`
/// - Leave a placeholder cursor marker in `content` untouched
/// - Be pure: equal inputs produce equal outputs
pub trait ContentPreparer: Send + Sync {
    /// Prepares `content` for the step `step_id`.
    ///
    /// `language`, when present, asks for the text to be presented as code
    /// in that language.
    fn prepare(
        &self,
        elements: &[MessageElement],
        step_id: &StepId,
        content: &str,
        language: Option<&str>,
    ) -> PreparedContent;
}
