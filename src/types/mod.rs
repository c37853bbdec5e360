//! Core types: API payloads, tool plans, conversation turns, and errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// Body of `POST /assist`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssistRequest {
    /// The user's question.
    pub query: String,
    /// Session to continue; omit to start a fresh one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Fixed "ok" while the server is up.
    pub status: String,
    /// The configured model identifier.
    pub model: String,
}

// ============= Chat Message Types =============

/// One message in a chat-completions conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who speaks this message.
    pub role: MessageRole,
    /// The message text.
    pub content: String,
}

impl ChatMessage {
    /// A system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// An assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Chat-completions speaker roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

// ============= Conversation Types =============

/// One completed (query, answer) exchange within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// What the user asked.
    pub query: String,
    /// What the pipeline answered.
    pub answer: String,
    /// When the turn completed.
    pub created_at: DateTime<Utc>,
}

impl ConversationTurn {
    /// A turn stamped with the current time.
    pub fn new(query: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            answer: answer.into(),
            created_at: Utc::now(),
        }
    }
}

// ============= Tool Plan Types =============

/// The closed set of knowledge sources the planner may select.
///
/// Unknown names in a plan are not a parse error; they surface as a
/// "tool not supported" outcome at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ToolName {
    Opendeepsearch,
    Wikipedia,
    Arxiv,
    PdfParse,
    WebFetch,
}

impl ToolName {
    /// Every member of the enumeration, in registry order.
    pub const ALL: [ToolName; 5] = [
        ToolName::Opendeepsearch,
        ToolName::Wikipedia,
        ToolName::Arxiv,
        ToolName::PdfParse,
        ToolName::WebFetch,
    ];

    /// The canonical snake_case name, as the planner is told to spell it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::Opendeepsearch => "opendeepsearch",
            ToolName::Wikipedia => "wikipedia",
            ToolName::Arxiv => "arxiv",
            ToolName::PdfParse => "pdf_parse",
            ToolName::WebFetch => "web_fetch",
        }
    }

    /// Resolve a raw plan entry name against the closed enumeration.
    pub fn resolve(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "opendeepsearch" => Some(ToolName::Opendeepsearch),
            "wikipedia" => Some(ToolName::Wikipedia),
            "arxiv" => Some(ToolName::Arxiv),
            "pdf_parse" => Some(ToolName::PdfParse),
            "web_fetch" => Some(ToolName::WebFetch),
            _ => None,
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One planned tool invocation as proposed by the planning model.
///
/// `tool` is kept as the raw string from the plan so that unsupported
/// names still occupy a slot in the result map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedCall {
    /// Raw tool name as the planner spelled it.
    pub tool: String,
    /// Sub-query for the tool; empty means "use the user's query".
    #[serde(default)]
    pub prompt: String,
}

/// Validated, ordered execution plan. Non-empty by construction.
pub type ToolPlan = Vec<PlannedCall>;

// ============= Error Types =============

/// Application-level errors.
///
/// `Llm` and `PlanParse` are the request-terminating tier; everything a
/// tool can fail at is folded into tagged outcome text instead and never
/// surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Model transport failure, non-2xx status, or empty completion.
    #[error("LLM error: {0}")]
    Llm(String),

    /// Planner output could not become a valid plan; carries the raw text.
    #[error("invalid tool plan: {reason}")]
    PlanParse {
        /// What made the text unusable.
        reason: String,
        /// The planner's verbatim output.
        raw: String,
    },

    /// Missing or malformed environment configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected request payload.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Anything that should not happen.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Llm(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::PlanParse { reason, .. } => {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, reason)
            }
            AppError::Config(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name_resolve_known() {
        assert_eq!(
            ToolName::resolve("opendeepsearch"),
            Some(ToolName::Opendeepsearch)
        );
        assert_eq!(ToolName::resolve(" Wikipedia "), Some(ToolName::Wikipedia));
        assert_eq!(ToolName::resolve("pdf_parse"), Some(ToolName::PdfParse));
    }

    #[test]
    fn test_tool_name_resolve_unknown() {
        assert_eq!(ToolName::resolve("google"), None);
        assert_eq!(ToolName::resolve(""), None);
    }

    #[test]
    fn test_tool_name_roundtrip() {
        for tool in ToolName::ALL {
            assert_eq!(ToolName::resolve(tool.as_str()), Some(tool));
        }
    }

    #[test]
    fn test_planned_call_prompt_defaults_to_empty() {
        let call: PlannedCall = serde_json::from_str(r#"{"tool": "wikipedia"}"#).unwrap();
        assert_eq!(call.tool, "wikipedia");
        assert!(call.prompt.is_empty());
    }
}
