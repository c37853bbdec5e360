//! HTTP API handlers and routes.
//!
//! # Endpoints
//!
//! - `POST /assist` - run one query through the pipeline; the answer is
//!   streamed back as a single SSE `response` event followed by `done`
//! - `GET /health` - liveness probe with the configured model identifier

pub mod handlers;
/// Router construction.
pub mod routes;
