use crate::types::{ChatMessage, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Generic LLM client trait for provider abstraction.
///
/// All completions go through `chat`: the caller supplies the full ordered
/// message list, an output token cap, and an explicit timeout. A transport
/// failure, a non-2xx status, or an empty choice list all surface as
/// `AppError::Llm`.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Issue one chat completion and return its text content.
    async fn chat(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<String>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}
