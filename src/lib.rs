//! Chatview: view models for chat message rendering.
//!
//! This crate turns chat steps (messages and intermediate run steps) into
//! framework-agnostic view trees that a host UI layer can draw, together
//! with default adapters that produce HTML.
//!
//! # Architecture
//!
//! Chatview follows hexagonal architecture principles:
//!
//! - **Domain**: Pure view-model logic with no rendering dependencies
//! - **Ports**: Abstract trait interfaces for the host's collaborators
//! - **Adapters**: Concrete implementations of ports (markdown, HTML templates)
//!
//! # Modules
//!
//! - [`message_content`]: Input/output text, inlined elements and timestamp of one step

pub mod message_content;
