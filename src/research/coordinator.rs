//! Pipeline coordination: plan, execute, aggregate, remember.

use crate::llm::LLMClient;
use crate::memory::SessionStore;
use crate::research::aggregator::Aggregator;
use crate::research::executor::Executor;
use crate::research::parser::parse_plan;
use crate::research::planner::Planner;
use crate::research::summarizer::Summarizer;
use crate::tools::ToolRegistry;
use crate::types::{AppError, ConversationTurn, Result, ToolPlan};
use std::sync::Arc;

/// Drives one query through the full pipeline.
///
/// Stages run strictly sequentially; each stage's output gates the next.
/// Planner and parser failures terminate the request with an explanatory
/// message. Everything after the plan is validated degrades per-call: the
/// executor and aggregator always produce text.
pub struct ResearchCoordinator {
    planner: Planner,
    executor: Executor,
    aggregator: Aggregator,
    store: Arc<dyn SessionStore>,
}

impl ResearchCoordinator {
    /// Wire all four stages over one model client, registry, and store.
    pub fn new(
        llm: Arc<dyn LLMClient>,
        registry: Arc<ToolRegistry>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            planner: Planner::new(llm.clone()),
            executor: Executor::new(registry, Summarizer::new(llm.clone())),
            aggregator: Aggregator::new(llm),
            store,
        }
    }

    /// Answer one query within a session.
    ///
    /// Always returns displayable text: either the synthesized answer or a
    /// terminating error message. Completed answers are appended to the
    /// session history; terminating errors are not.
    pub async fn assist(&self, session_id: &str, query: &str) -> String {
        let history = self.store.history(session_id);

        let plan = match self.plan(session_id, query, &history).await {
            Ok(plan) => plan,
            Err(AppError::PlanParse { raw, .. }) => {
                return format!(
                    "Tool selection LLM returned invalid JSON or error. Raw output:\n{}",
                    raw
                );
            }
            Err(e) => return format!("Tool selection failed: {}", e),
        };

        let results = self.executor.execute(&plan, query).await;
        let answer = self.aggregator.aggregate(query, &history, &results).await;

        self.store.append(session_id, query, &answer);
        answer
    }

    async fn plan(
        &self,
        session_id: &str,
        query: &str,
        history: &[ConversationTurn],
    ) -> Result<ToolPlan> {
        let raw = self.planner.propose(query, history).await?;
        let plan = parse_plan(&raw)?;
        tracing::info!(
            session = session_id,
            tools = ?plan.iter().map(|c| c.tool.as_str()).collect::<Vec<_>>(),
            "tool plan validated"
        );
        Ok(plan)
    }
}
