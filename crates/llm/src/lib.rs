//! Client for the generative-AI completion service.

mod ai_types;
mod client;
mod error;
#[cfg(test)]
mod tests;

pub use client::{DEFAULT_MODEL, LlmClient};
pub use error::LlmError;
