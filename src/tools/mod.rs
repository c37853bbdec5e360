//! Knowledge-source tools.
//!
//! Each external source sits behind the same contract: a query string in,
//! tagged human-readable text out. Tools never fail: configuration gaps,
//! transport errors, and parse failures all come back as labeled strings,
//! so a downstream synthesis step always has something to show for every
//! planned call.
//!
//! # Available Tools
//!
//! - [`search`] - OpenDeepSearch endpoint (live web search)
//! - [`wikipedia`] - Encyclopedic summary lookup with search fallback
//! - [`arxiv`] - Paper abstract lookup by arXiv identifier
//! - [`document`] - PDF and web page text extraction
//! - [`registry`] - Tool registration and dispatch

pub mod arxiv;
pub mod document;
/// The [`Tool`] contract and [`ToolRegistry`].
pub mod registry;
pub mod search;
pub mod wikipedia;

pub use registry::{Tool, ToolRegistry};
