//! Step definitions for message content view scenarios.

mod given;
mod then;
mod when;
pub mod world;
