//! Error types for decoding client payloads and rendering views.
//!
//! Rendering the view model itself never fails; these errors only arise at
//! the edges, when JSON comes in or HTML goes out.

use thiserror::Error;

/// Errors raised while decoding steps, elements or props from JSON.
#[derive(Debug, Error)]
pub enum StepDecodeError {
    /// The payload is not valid JSON for the expected shape.
    #[error("invalid message content payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while turning a view tree into markup.
#[derive(Debug, Error)]
pub enum ViewRenderError {
    /// A template failed to compile or render.
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}
