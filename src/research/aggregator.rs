//! Synthesis of tool outcomes into one answer.

use crate::llm::LLMClient;
use crate::memory::recent_turns;
use crate::research::executor::ResultMap;
use crate::types::{ChatMessage, ConversationTurn};
use std::sync::Arc;
use std::time::Duration;

const AGGREGATE_TIMEOUT: Duration = Duration::from_secs(60);
const AGGREGATE_MAX_TOKENS: u32 = 1024;

const AGGREGATOR_SYSTEM_PROMPT: &str = "\
You are a research assistant. Synthesize the tool results below into one \
coherent answer that directly addresses the user's query. Do not merely \
concatenate or summarize: combine the sources, preserve source-specific \
details, and draw comparisons where their content overlaps. Tool results \
that report errors should be acknowledged briefly, not hidden.";

/// The synthesis stage.
pub struct Aggregator {
    llm: Arc<dyn LLMClient>,
}

impl Aggregator {
    /// Aggregator over the given model client.
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self { llm }
    }

    /// Produce the final answer, or a fixed error answer if the synthesis
    /// call itself fails. Never an error: this stage's output is always
    /// what the user sees.
    pub async fn aggregate(
        &self,
        query: &str,
        history: &[ConversationTurn],
        results: &ResultMap,
    ) -> String {
        let mut messages = vec![ChatMessage::system(AGGREGATOR_SYSTEM_PROMPT)];

        for turn in recent_turns(history) {
            messages.push(ChatMessage::user(turn.query.clone()));
            messages.push(ChatMessage::assistant(turn.answer.clone()));
        }

        messages.push(ChatMessage::user(format!(
            "Query: {}\n\nTool results:\n{}",
            query,
            format_results(results)
        )));

        match self
            .llm
            .chat(&messages, AGGREGATE_MAX_TOKENS, AGGREGATE_TIMEOUT)
            .await
        {
            Ok(answer) => answer.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "aggregation call failed");
                format!("Failed to synthesize tool results into an answer: {}", e)
            }
        }
    }
}

/// Flatten the result map as `tool: outcome` lines, in map order.
fn format_results(results: &ResultMap) -> String {
    results
        .iter()
        .map(|(tool, outcome)| format!("{}: {}", tool, outcome))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_results_in_map_order() {
        let mut results = ResultMap::new();
        results.insert("wikipedia", "**Wikipedia Summary for [X](u)**".to_string());
        results.insert("arxiv", "[arXiv]\nTitle: T".to_string());

        let block = format_results(&results);
        let wiki_pos = block.find("wikipedia:").unwrap();
        let arxiv_pos = block.find("arxiv:").unwrap();
        assert!(wiki_pos < arxiv_pos);
        assert!(block.contains("wikipedia: **Wikipedia Summary for [X](u)**"));
    }
}
