//! Tool-selection planning.
//!
//! One model call proposes which knowledge sources to consult and with
//! what sub-query. The output is plan text, never a direct answer; turning
//! it into a validated plan is the parser's job.

use crate::llm::LLMClient;
use crate::memory::recent_turns;
use crate::types::{ChatMessage, ConversationTurn, Result};
use std::sync::Arc;
use std::time::Duration;

const PLAN_TIMEOUT: Duration = Duration::from_secs(30);
const PLAN_MAX_TOKENS: u32 = 512;

const PLANNER_SYSTEM_PROMPT: &str = "\
You are the tool-selection stage of a research assistant. You never answer \
the user directly; you only decide which knowledge sources to consult.";

const PLANNING_INSTRUCTION: &str = r#"Select the tools to answer the query above.

Available tools:
- opendeepsearch: live web search for recent, dynamic, or commercial information
- wikipedia: encyclopedic summaries of stable facts, entities and concepts
- arxiv: abstract lookup for a paper when the query contains an arXiv id or arxiv.org link
- pdf_parse: text extraction when the query contains a .pdf URL
- web_fetch: text extraction when the query contains any other http(s) URL

Respond with ONLY a JSON array, no prose and no code fences:
[{"tool": "<tool name>", "prompt": "<sub-query for that tool>"}]

Use one entry per source worth consulting, in the order they should be read."#;

/// The tool-selection stage.
pub struct Planner {
    llm: Arc<dyn LLMClient>,
}

impl Planner {
    /// Planner over the given model client.
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self { llm }
    }

    /// Produce raw plan text for a query.
    ///
    /// Transport failures propagate: without a plan there is nothing to
    /// execute, so this error terminates the request.
    pub async fn propose(&self, query: &str, history: &[ConversationTurn]) -> Result<String> {
        let messages = build_messages(query, history);
        let raw = self.llm.chat(&messages, PLAN_MAX_TOKENS, PLAN_TIMEOUT).await?;
        tracing::debug!(raw = %raw, "planner output");
        Ok(raw)
    }
}

fn build_messages(query: &str, history: &[ConversationTurn]) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(PLANNER_SYSTEM_PROMPT)];

    for turn in recent_turns(history) {
        messages.push(ChatMessage::user(turn.query.clone()));
        messages.push(ChatMessage::assistant(turn.answer.clone()));
    }

    messages.push(ChatMessage::user(query));
    messages.push(ChatMessage::user(PLANNING_INSTRUCTION));
    messages
}
