//! Unit tests for the message content module.
//!
//! Tests are organised by concern: decoding, timestamps, the view mapping,
//! memoization and the bundled adapters.


use std::sync::Mutex;

use crate::message_content::domain::{MessageElement, PreparedContent, StepId};
use crate::message_content::ports::ContentPreparer;

/// Arguments of one call to [`RecordingPreparer::prepare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PrepareCall {
    pub step_id: StepId,
    pub content: String,
    pub language: Option<String>,
}

/// Preparer that echoes its content and records every call.
#[derive(Debug, Default)]
pub(super) struct RecordingPreparer {
    calls: Mutex<Vec<PrepareCall>>,
    inlined: Vec<MessageElement>,
}

impl RecordingPreparer {
    pub fn with_inlined(inlined: Vec<MessageElement>) -> Self {
        Self {
            calls: Mutex::default(),
            inlined,
        }
    }

    pub fn calls(&self) -> Vec<PrepareCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl ContentPreparer for RecordingPreparer {
    fn prepare(
        &self,
        _elements: &[MessageElement],
        step_id: &StepId,
        content: &str,
        language: Option<&str>,
    ) -> PreparedContent {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(PrepareCall {
                step_id: step_id.clone(),
                content: content.to_owned(),
                language: language.map(ToOwned::to_owned),
            });
        }
        PreparedContent {
            text: content.to_owned(),
            inlined_elements: self.inlined.clone(),
            ref_elements: Vec::new(),
        }
    }
}
