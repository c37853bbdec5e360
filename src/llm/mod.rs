//! LLM client abstraction and the OpenRouter implementation.
//!
//! The pipeline only ever needs one operation from a model provider: turn an
//! ordered message list into one completion, within an explicit timeout.
//! [`LLMClient`] captures exactly that, so tests can substitute scripted
//! fakes and the transport can be swapped without touching the pipeline.

/// The [`LLMClient`] trait.
pub mod client;
/// OpenRouter transport.
pub mod openrouter;

pub use client::LLMClient;
pub use openrouter::OpenRouterClient;
