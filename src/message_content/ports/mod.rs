//! Port trait definitions for the message content view.
//!
//! Ports define the collaborators the view needs from its host: content
//! preparation and markup rendering. Adapters implement these ports.

pub mod content_preparer;
pub mod renderer;

pub use content_preparer::ContentPreparer;
pub use renderer::{InlinedElementsRenderer, MarkdownRenderer, ViewRenderResult, ViewRenderer};
