//! Application services for the message content view.
//!
//! Services combine the domain rules with the content preparation port to
//! produce view trees, and decide when a render can be skipped.

mod memo;
mod render;

pub use memo::{MemoizedMessageContent, props_equal};
pub use render::MessageContentService;
