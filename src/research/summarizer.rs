//! Query-focused condensation of high-volume tool output.

use crate::llm::LLMClient;
use crate::types::ChatMessage;
use std::sync::Arc;
use std::time::Duration;

/// Inputs shorter than this are returned unchanged without a model call.
pub const MIN_SUMMARIZE_LEN: usize = 50;
/// Character budget for the text handed to the model.
pub const MAX_INPUT_CHARS: usize = 3500;

const SUMMARIZE_TIMEOUT: Duration = Duration::from_secs(60);
const SUMMARIZE_MAX_TOKENS: u32 = 700;

const SUMMARIZER_SYSTEM_PROMPT: &str = "\
You are a research assistant. Given the following TEXT, produce a summary, \
highlight key points, and organize findings in bullet points. Only use \
information from the text.";

/// Condenses extraction output before synthesis.
pub struct Summarizer {
    llm: Arc<dyn LLMClient>,
}

impl Summarizer {
    /// Summarizer over the given model client.
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self { llm }
    }

    /// Condense `text` with respect to the user's query.
    ///
    /// Trivial input is passed through untouched, and a failing model call
    /// degrades to the (truncated) original text rather than an error.
    pub async fn summarize(&self, text: &str, user_query: &str) -> String {
        if text.chars().count() < MIN_SUMMARIZE_LEN {
            return text.to_string();
        }

        let truncated = truncate_chars(text, MAX_INPUT_CHARS);
        let prompt = format!(
            "{}\n\nTEXT:\n{}\n\nUserInstruction: {}",
            SUMMARIZER_SYSTEM_PROMPT, truncated, user_query
        );

        let messages = [ChatMessage::user(prompt)];
        match self
            .llm
            .chat(&messages, SUMMARIZE_MAX_TOKENS, SUMMARIZE_TIMEOUT)
            .await
        {
            Ok(summary) => summary.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "summarization failed, returning raw text");
                truncated.to_string()
            }
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
