//! The tool-planning and result-aggregation pipeline.
//!
//! One request flows through four strictly sequential stages:
//!
//! 1. [`planner`] - a model call proposes which tools to run, as JSON
//! 2. [`parser`] - the raw model text becomes a validated [`crate::types::ToolPlan`]
//! 3. [`executor`] - each planned call runs with per-call failure isolation
//! 4. [`aggregator`] - a second model call synthesizes one answer
//!
//! [`summarizer`] condenses high-volume extraction output (PDF, web) between
//! stages 3 and 4. [`coordinator`] wires the stages together and maps the
//! two error tiers: planner/parser failures terminate the request with an
//! explanatory message; everything downstream degrades to tagged text that
//! stays visible in the final answer.

pub mod aggregator;
pub mod coordinator;
pub mod executor;
pub mod parser;
pub mod planner;
pub mod summarizer;

pub use coordinator::ResearchCoordinator;
pub use executor::{Executor, ResultMap};
pub use parser::parse_plan;
pub use planner::Planner;
pub use summarizer::Summarizer;
