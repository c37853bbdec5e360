//! Plan execution with per-call failure isolation.

use crate::research::summarizer::Summarizer;
use crate::tools::ToolRegistry;
use crate::types::{ToolName, ToolPlan};
use std::sync::Arc;

/// Tool outcomes in the order their tool names first appeared in the plan.
///
/// At most one outcome is retained per tool name: a duplicate entry
/// overwrites the earlier outcome but keeps the original position.
#[derive(Debug, Default)]
pub struct ResultMap {
    entries: Vec<(String, String)>,
}

impl ResultMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, keeping the key's original position.
    pub fn insert(&mut self, tool: &str, outcome: String) {
        match self.entries.iter_mut().find(|(name, _)| name == tool) {
            Some((_, existing)) => *existing = outcome,
            None => self.entries.push((tool.to_string(), outcome)),
        }
    }

    /// The outcome stored under `tool`, if any.
    pub fn get(&self, tool: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == tool)
            .map(|(_, outcome)| outcome.as_str())
    }

    /// `(tool, outcome)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no outcomes are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The plan-execution stage.
pub struct Executor {
    registry: Arc<ToolRegistry>,
    summarizer: Summarizer,
}

impl Executor {
    /// Executor dispatching into `registry`.
    pub fn new(registry: Arc<ToolRegistry>, summarizer: Summarizer) -> Self {
        Self {
            registry,
            summarizer,
        }
    }

    /// Run a validated plan, producing one outcome per distinct tool name.
    ///
    /// Calls run independently; any individual failure has already been
    /// folded into tagged text by the tool contract, so execution itself
    /// never fails. Extraction tools (pdf_parse, web_fetch) are condensed
    /// against the original user query, not the per-tool prompt.
    ///
    /// Outcomes are keyed by the canonical tool name, so case variants of
    /// the same tool collapse into one slot. Only names that do not resolve
    /// keep their raw spelling as the key.
    pub async fn execute(&self, plan: &ToolPlan, user_query: &str) -> ResultMap {
        let mut results = ResultMap::new();

        for call in plan {
            let prompt = if call.prompt.is_empty() {
                user_query
            } else {
                call.prompt.as_str()
            };

            let key = match ToolName::resolve(&call.tool) {
                Some(name) => name.as_str(),
                None => call.tool.as_str(),
            };
            let outcome = self.run_call(&call.tool, prompt, user_query).await;
            tracing::info!(tool = %key, outcome_len = outcome.len(), "tool call finished");
            results.insert(key, outcome);
        }

        results
    }

    async fn run_call(&self, tool_name: &str, prompt: &str, user_query: &str) -> String {
        let Some(name) = ToolName::resolve(tool_name) else {
            tracing::warn!(tool = %tool_name, "plan named an unsupported tool");
            return format!("[Executor] Tool not supported: {}", tool_name);
        };

        let Some(tool) = self.registry.get(name) else {
            return format!("[Executor] Tool not supported: {}", tool_name);
        };

        let raw = tool.invoke(prompt).await;

        match name {
            ToolName::PdfParse | ToolName::WebFetch => {
                self.summarizer.summarize(&raw, user_query).await
            }
            _ => raw,
        }
    }
}
