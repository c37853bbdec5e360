use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router; state is attached by the caller.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/assist", post(crate::api::handlers::assist::assist))
        .route("/health", get(crate::api::handlers::health::health))
}
