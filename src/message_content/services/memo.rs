//! Re-render suppression for the message content view.

use chrono::{Local, TimeZone};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::MessageContentService;
use crate::message_content::domain::{MessageContentProps, ViewTree};
use crate::message_content::ports::ContentPreparer;

/// Returns `true` when `next` renders exactly like `prev`.
///
/// Compares `allow_html` and `latex` by value, `elements` by identity, the
/// effective sections by membership and the step's render snapshot by value.
/// `is_user_message` and step fields outside the snapshot are ignored.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use chatview::message_content::domain::{MessageContentProps, Step};
/// use chatview::message_content::services::props_equal;
///
/// let elements = Arc::from(Vec::new());
/// let step = Step::new("s1", "assistant_message").with_output("hi");
/// let prev = MessageContentProps::new(step.clone(), Arc::clone(&elements));
/// let next = MessageContentProps::new(step.with_name("Assistant"), elements);
/// assert!(props_equal(&prev, &next));
/// ```
#[must_use]
pub fn props_equal(prev: &MessageContentProps, next: &MessageContentProps) -> bool {
    prev.allow_html == next.allow_html
        && prev.latex == next.latex
        && Arc::ptr_eq(&prev.elements, &next.elements)
        && prev.effective_sections() == next.effective_sections()
        && prev.message.render_snapshot() == next.message.render_snapshot()
}

/// A message content slot that only re-renders when its props change.
///
/// Holds the props of the last real render and the tree it produced.
/// Skipped renders keep comparing against those props.
#[derive(Debug)]
pub struct MemoizedMessageContent<P, Tz = Local>
where
    P: ContentPreparer,
    Tz: TimeZone,
{
    service: MessageContentService<P>,
    viewer_tz: Tz,
    rendered_props: Option<MessageContentProps>,
    tree: ViewTree,
    render_count: usize,
}

impl<P> MemoizedMessageContent<P, Local>
where
    P: ContentPreparer,
{
    /// Creates a slot rendering timestamps on the machine's local clock.
    #[must_use]
    pub const fn local(service: MessageContentService<P>) -> Self {
        Self::new(service, Local)
    }
}

impl<P, Tz> MemoizedMessageContent<P, Tz>
where
    P: ContentPreparer,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    /// Creates an empty slot.
    #[must_use]
    pub const fn new(service: MessageContentService<P>, viewer_tz: Tz) -> Self {
        Self {
            service,
            viewer_tz,
            rendered_props: None,
            tree: ViewTree::new(),
            render_count: 0,
        }
    }

    /// Returns the tree for `props`, re-rendering only if they differ from
    /// the props of the last render.
    pub fn render(&mut self, props: MessageContentProps) -> &ViewTree {
        let unchanged = self
            .rendered_props
            .as_ref()
            .is_some_and(|prev| props_equal(prev, &props));

        if unchanged {
            debug!(step_id = %props.message.id, "props unchanged; render skipped");
        } else {
            debug!(
                step_id = %props.message.id,
                renders = self.render_count,
                "rendering message content"
            );
            self.tree = self.service.render(&props, &self.viewer_tz);
            self.rendered_props = Some(props);
            self.render_count = self.render_count.saturating_add(1);
        }
        &self.tree
    }

    /// Forces the next [`Self::render`] to recompute the tree.
    pub fn invalidate(&mut self) {
        self.rendered_props = None;
    }

    /// Returns the last rendered tree.
    #[must_use]
    pub const fn tree(&self) -> &ViewTree {
        &self.tree
    }

    /// Returns how many times the tree was actually computed.
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.render_count
    }
}
