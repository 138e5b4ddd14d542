//! Shared world state for message content BDD scenarios.

use std::sync::Arc;

use chatview::message_content::{
    adapters::ElementContentPreparer,
    domain::{MessageContentProps, MessageElement, SectionSelector, Step, ViewTree},
    services::MessageContentService,
};
use eyre::eyre;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestContentService = MessageContentService<ElementContentPreparer>;

/// Scenario world for message content behaviour tests.
pub struct MessageWorld {
    pub service: TestContentService,
    pub step: Option<Step>,
    pub elements: Vec<MessageElement>,
    pub sections: Option<SectionSelector>,
    pub is_user_message: bool,
    pub tree: Option<ViewTree>,
    pub html: Option<String>,
    pub render_count: Option<usize>,
}

impl MessageWorld {
    /// Creates a world with no step and nothing rendered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: MessageContentService::new(Arc::new(ElementContentPreparer)),
            step: None,
            elements: Vec::new(),
            sections: None,
            is_user_message: false,
            tree: None,
            html: None,
            render_count: None,
        }
    }

    /// Returns the step under test.
    pub fn step_mut(&mut self) -> Result<&mut Step, eyre::Report> {
        self.step
            .as_mut()
            .ok_or_else(|| eyre!("scenario did not declare a step"))
    }

    /// Assembles the props from the scenario state.
    pub fn props(&self) -> Result<MessageContentProps, eyre::Report> {
        let step = self
            .step
            .clone()
            .ok_or_else(|| eyre!("scenario did not declare a step"))?;
        let elements: Arc<[MessageElement]> = self.elements.clone().into();
        let mut props =
            MessageContentProps::new(step, elements).with_user_message(self.is_user_message);
        props.sections = self.sections;
        Ok(props)
    }

    /// Returns the last rendered tree.
    pub fn tree(&self) -> Result<&ViewTree, eyre::Report> {
        self.tree
            .as_ref()
            .ok_or_else(|| eyre!("message content was not rendered"))
    }
}

impl Default for MessageWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MessageWorld {
    MessageWorld::default()
}
