//! Request handlers for each endpoint.

/// `POST /assist`.
pub mod assist;
/// `GET /health`.
pub mod health;
