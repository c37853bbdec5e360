use crate::llm::client::LLMClient;
use crate::types::{AppError, ChatMessage, Result};
use crate::utils::config::LlmConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Chat-completions client for OpenRouter (or any OpenAI-compatible API).
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenRouterClient {
    /// Client for the configured endpoint and model.
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl LLMClient for OpenRouterClient {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<String> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
            "max_tokens": max_tokens,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("completion request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::Llm(format!("completion request failed: {}", e)))?;

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("invalid completion response: {}", e)))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AppError::Llm("completion returned no choices".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
