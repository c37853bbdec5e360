//! # A.T.L.A.S - Agentic Tool-planning & Lookup Aggregation Server
//!
//! A conversational research assistant that answers a query by deciding
//! which external knowledge sources are relevant, invoking them, and
//! synthesizing their results into one coherent answer via a language
//! model, tolerating partial and total failure of every external
//! dependency along the way.
//!
//! ## Pipeline
//!
//! ```text
//! query + session ──▶ Planner ──▶ PlanParser ──▶ Executor ──▶ Aggregator ──▶ answer
//!                      (LLM)      (validate)    (per-tool      (LLM)
//!                                                isolation)
//! ```
//!
//! The planning model's output is untrusted, loosely structured text; it
//! is parsed leniently but validated strictly before anything executes.
//! Tool calls degrade individually to tagged error strings, so the final
//! synthesis step always has displayable text for every planned call.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use atlas::{
//!     llm::OpenRouterClient, memory::InMemorySessionStore,
//!     research::ResearchCoordinator, tools::ToolRegistry,
//!     utils::config::Config,
//! };
//! use std::sync::Arc;
//!
//! let config = Config::from_env()?;
//! let coordinator = ResearchCoordinator::new(
//!     Arc::new(OpenRouterClient::new(&config.llm)),
//!     Arc::new(ToolRegistry::with_default_tools(config.search.clone())),
//!     Arc::new(InMemorySessionStore::new()),
//! );
//!
//! let answer = coordinator.assist("session-1", "latest GPU price trends").await;
//! println!("{}", answer);
//! ```
//!
//! ## Modules
//!
//! - [`research`] - the planning/execution/aggregation pipeline
//! - [`tools`] - knowledge-source tools behind one infallible contract
//! - [`llm`] - model client abstraction and OpenRouter transport
//! - [`memory`] - per-session conversation history
//! - [`api`] - axum handlers and routes
//! - [`types`] - plans, turns, messages, and error handling

#![warn(missing_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// LLM client abstraction and transport.
pub mod llm;
/// Per-session conversation memory.
pub mod memory;
/// The tool-planning and result-aggregation pipeline.
pub mod research;
/// Knowledge-source tools and registry.
pub mod tools;
/// Core types (plans, messages, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use llm::{LLMClient, OpenRouterClient};
pub use memory::{InMemorySessionStore, SessionStore};
pub use research::{Executor, Planner, ResearchCoordinator, ResultMap, Summarizer};
pub use tools::{Tool, ToolRegistry};
pub use types::{AppError, Result, ToolName};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Environment-driven configuration
    pub config: Arc<Config>,
    /// The assist pipeline
    pub coordinator: Arc<ResearchCoordinator>,
}
