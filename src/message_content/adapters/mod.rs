//! Adapter implementations for the message content ports.
//!
//! - [`ElementContentPreparer`]: links element names and fences code
//! - [`PulldownMarkdownRenderer`]: markdown to HTML via `pulldown-cmark`
//! - [`HtmlViewRenderer`]: view tree to HTML via `minijinja`

pub mod html;
pub mod markdown;
pub mod preparer;

pub use html::{HtmlInlinedElementsRenderer, HtmlViewRenderer};
pub use markdown::PulldownMarkdownRenderer;
pub use preparer::ElementContentPreparer;
