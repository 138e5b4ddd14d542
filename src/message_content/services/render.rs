//! The message content view: props in, view tree out.

use chrono::{Local, TimeZone};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

use crate::message_content::domain::{
    Alignment, ContentBlock, ContentSection, MarkdownNode, MessageContentConfig,
    MessageContentProps, OutputSection, PreparedContent, TimestampBlock, ViewNode, ViewTree,
    format_time,
};
use crate::message_content::ports::ContentPreparer;

/// Maps message content props to a view tree.
///
/// Rendering is a pure function of the props, the viewer's time zone and
/// the preparer. Nothing is cached here; see
/// [`super::MemoizedMessageContent`] for re-render suppression.
#[derive(Debug)]
pub struct MessageContentService<P>
where
    P: ContentPreparer,
{
    preparer: Arc<P>,
    config: MessageContentConfig,
}

impl<P> Clone for MessageContentService<P>
where
    P: ContentPreparer,
{
    fn clone(&self) -> Self {
        Self {
            preparer: Arc::clone(&self.preparer),
            config: self.config.clone(),
        }
    }
}

impl<P> MessageContentService<P>
where
    P: ContentPreparer,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(preparer: Arc<P>) -> Self {
        Self::with_config(preparer, MessageContentConfig::default())
    }

    /// Creates a service with an explicit configuration.
    #[must_use]
    pub const fn with_config(preparer: Arc<P>, config: MessageContentConfig) -> Self {
        Self { preparer, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &MessageContentConfig {
        &self.config
    }

    /// Renders the props with timestamps on the machine's local clock.
    #[must_use]
    pub fn render_local(&self, props: &MessageContentProps) -> ViewTree {
        self.render(props, &Local)
    }

    /// Renders the props with timestamps on the clock of `viewer_tz`.
    ///
    /// The tree holds, in order: the content block when there is anything
    /// to show, the inlined elements whenever the output section is
    /// selected, and the timestamp when it is non-empty and content is shown.
    #[must_use]
    pub fn render<Tz>(&self, props: &MessageContentProps, viewer_tz: &Tz) -> ViewTree
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let message = &props.message;
        trace!(step_id = %message.id, kind = %message.kind, "rendering message content");

        let output_content = self.with_cursor(&message.output, message.streaming);
        let PreparedContent {
            text: output_text,
            inlined_elements,
            ref_elements: output_refs,
        } = self.preparer.prepare(
            &props.elements,
            &message.id,
            &output_content,
            message.language.as_deref(),
        );

        let sections = props.effective_sections();
        let display_input = sections.contains(ContentSection::Input)
            && message.has_input()
            && message.show_input.is_shown();
        let display_output = sections.contains(ContentSection::Output);
        let is_message = message.is_message();
        let has_body = display_input || (display_output && !output_text.is_empty());

        let output = display_output.then(|| OutputSection {
            label: (!is_message && display_input && message.has_output())
                .then(|| self.config.output_label.clone()),
            markdown: MarkdownNode {
                text: output_text,
                allow_html: props.allow_html,
                latex: props.latex,
                ref_elements: output_refs,
            },
        });

        let input = display_input.then(|| {
            let input_content = self.with_cursor(&message.input, message.streaming);
            let prepared = self.preparer.prepare(
                &props.elements,
                &message.id,
                &input_content,
                message.show_input.language(),
            );
            MarkdownNode {
                text: prepared.text,
                allow_html: props.allow_html,
                latex: props.latex,
                ref_elements: prepared.ref_elements,
            }
        });

        let mut tree = ViewTree::new();
        if has_body {
            tree.push(ViewNode::Content(ContentBlock { input, output }));
        }
        if display_output {
            tree.push(ViewNode::InlinedElements(inlined_elements));
        }

        let timestamp = format_time(
            message.created_at.as_ref(),
            viewer_tz,
            &self.config.time_format,
        );
        if has_body && !timestamp.is_empty() {
            tree.push(ViewNode::Timestamp(TimestampBlock {
                text: timestamp,
                alignment: Alignment::for_author(props.is_user_message),
            }));
        }
        tree
    }

    fn with_cursor(&self, text: &str, streaming: bool) -> String {
        if streaming && !text.is_empty() {
            format!("{text}{}", self.config.cursor_placeholder)
        } else {
            text.to_owned()
        }
    }
}
