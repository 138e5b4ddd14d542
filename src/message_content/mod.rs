//! Rendering of a single chat step's input, output and attachments.
//!
//! This module maps a step and its elements onto a framework-agnostic
//! [`domain::ViewTree`]: which sections show, what text goes to the markdown
//! renderer, which elements are inlined, and the local timestamp. It also
//! decides when a re-render can be skipped.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Value types ([`domain::Step`], [`domain::ShowInput`], [`domain::SectionSelector`], [`domain::ViewTree`], etc.)
//! - **Ports**: Collaborator traits ([`ports::ContentPreparer`], [`ports::MarkdownRenderer`], [`ports::InlinedElementsRenderer`], [`ports::ViewRenderer`])
//! - **Adapters**: Default collaborators ([`adapters::ElementContentPreparer`], [`adapters::PulldownMarkdownRenderer`], [`adapters::HtmlViewRenderer`])
//! - **Services**: The view itself ([`services::MessageContentService`]) and re-render suppression ([`services::MemoizedMessageContent`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chatview::message_content::adapters::ElementContentPreparer;
//! use chatview::message_content::domain::{MessageContentProps, ShowInput, Step, ViewNode};
//! use chatview::message_content::services::MessageContentService;
//! use chrono::Utc;
//!
//! let step = Step::new("step-1", "tool")
//!     .with_input("{\"city\": \"Paris\"}")
//!     .with_output("18°C")
//!     .with_show_input(ShowInput::from_language("json"));
//! let props = MessageContentProps::new(step, Arc::from(Vec::new()));
//!
//! let service = MessageContentService::new(Arc::new(ElementContentPreparer));
//! let tree = service.render(&props, &Utc);
//!
//! let content = tree.content().expect("content block");
//! assert!(content.input.is_some());
//! assert_eq!(
//!     content.output.as_ref().and_then(|output| output.label.as_deref()),
//!     Some("Output"),
//! );
//! assert!(matches!(tree.nodes().get(1), Some(ViewNode::InlinedElements(_))));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
