//! OpenDeepSearch tool.
//!
//! Calls an externally hosted OpenDeepSearch endpoint for live web search.
//! The endpoint needs four pieces of configuration (URL plus three
//! credentials); anything less short-circuits to a tagged unavailability
//! message without touching the network.

use crate::tools::registry::Tool;
use crate::types::ToolName;
use crate::utils::config::SearchConfig;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Live web search via a hosted OpenDeepSearch endpoint.
pub struct OpenDeepSearchTool {
    http: reqwest::Client,
    config: SearchConfig,
}

impl OpenDeepSearchTool {
    /// Tool over the given endpoint configuration, complete or not.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn fetch(&self, query: &str) -> Result<Value, String> {
        let url = self.config.api_url.as_deref().unwrap_or_default();

        let response = self
            .http
            .post(url)
            .header("X-API-KEY", self.config.api_key.as_deref().unwrap_or_default())
            .header(
                "serper-api-key",
                self.config.serper_key.as_deref().unwrap_or_default(),
            )
            .header(
                "openrouter-api-key",
                self.config.openrouter_key.as_deref().unwrap_or_default(),
            )
            .json(&serde_json::json!({ "query": query }))
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        response.json().await.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl Tool for OpenDeepSearchTool {
    fn name(&self) -> ToolName {
        ToolName::Opendeepsearch
    }

    async fn invoke(&self, query: &str) -> String {
        if !self.config.is_configured() {
            tracing::warn!("OpenDeepSearch not configured, skipping call");
            return "[OpenDeepSearch] Not configured: set ODP_API_URL, ODP_API_KEY, \
                    ODP_SERPER_KEY and ODP_OPENROUTER_KEY to enable web search."
                .to_string();
        }

        tracing::debug!(query, "OpenDeepSearch request");
        match self.fetch(query).await {
            Ok(payload) => format!("[OpenDeepSearch Used]\n{}", flatten_payload(&payload)),
            Err(e) => {
                tracing::warn!(error = %e, "OpenDeepSearch call failed");
                format!("[OpenDeepSearch] Error: {}", e)
            }
        }
    }
}

/// Flatten the endpoint's loosely shaped JSON into displayable text.
///
/// Objects are probed for the conventional answer-bearing keys before
/// falling back to pretty-printed JSON; arrays flatten element-wise.
pub fn flatten_payload(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            for key in ["result", "summary", "text", "answer"] {
                if let Some(Value::String(s)) = map.get(key) {
                    return s.trim().to_string();
                }
            }
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Value::Array(items) => items
            .iter()
            .map(flatten_payload)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_prefers_result_key() {
        let payload = json!({"result": "  the answer  ", "summary": "ignored"});
        assert_eq!(flatten_payload(&payload), "the answer");
    }

    #[test]
    fn test_flatten_probes_keys_in_order() {
        let payload = json!({"answer": "from answer", "other": 1});
        assert_eq!(flatten_payload(&payload), "from answer");
    }

    #[test]
    fn test_flatten_object_without_known_keys_pretty_prints() {
        let payload = json!({"hits": 3});
        assert!(flatten_payload(&payload).contains("\"hits\": 3"));
    }

    #[test]
    fn test_flatten_array_joins_lines() {
        let payload = json!(["one", "two"]);
        assert_eq!(flatten_payload(&payload), "one\ntwo");
    }

    #[tokio::test]
    async fn test_unconfigured_tool_short_circuits() {
        let tool = OpenDeepSearchTool::new(SearchConfig::default());
        let outcome = tool.invoke("anything").await;
        assert!(outcome.starts_with("[OpenDeepSearch] Not configured"));
    }
}
