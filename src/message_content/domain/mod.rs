//! Domain types for the message content view.
//!
//! This module contains pure value types with no rendering dependencies.
//! Everything here is recomputed per render; nothing is persisted.

mod config;
mod element;
mod ids;
mod prepared;
mod props;
mod section;
mod show_input;
mod step;
mod timestamp;
mod view;

pub use config::{CURSOR_PLACEHOLDER, DEFAULT_OUTPUT_LABEL, MessageContentConfig};
pub use element::{ElementDisplay, MessageElement};
pub use ids::{ElementId, StepId};
pub use prepared::PreparedContent;
pub use props::MessageContentProps;
pub use section::{ContentSection, SectionSelector};
pub use show_input::ShowInput;
pub use step::{RenderSnapshot, Step};
pub use timestamp::{CreatedAt, DEFAULT_TIME_FORMAT, TimestampError, format_time};
pub use view::{
    Alignment, ContentBlock, MarkdownNode, OutputSection, TimestampBlock, ViewNode, ViewTree,
};
