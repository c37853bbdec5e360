use crate::{
    AppState,
    types::{AppError, AssistRequest, Result},
};
use axum::{
    Json,
    extract::State,
    response::sse::{Event, Sse},
};
use futures::Stream;
use std::convert::Infallible;
use uuid::Uuid;

/// Run one query through the research pipeline
#[utoipa::path(
    post,
    path = "/assist",
    request_body = AssistRequest,
    responses(
        (status = 200, description = "Answer streamed as SSE"),
        (status = 400, description = "Empty query")
    ),
    tag = "assist"
)]
pub async fn assist(
    State(state): State<AppState>,
    Json(payload): Json<AssistRequest>,
) -> Result<Sse<impl Stream<Item = std::result::Result<Event, Infallible>>>> {
    let query = payload.query.trim().to_string();
    if query.is_empty() {
        return Err(AppError::InvalidInput("query must not be empty".to_string()));
    }

    let session_id = payload
        .session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    tracing::info!(session = %session_id, query = %query, "assist request");

    // The whole pipeline runs before the stream is handed back: the answer
    // is emitted as one chunk plus a completion signal.
    let answer = state.coordinator.assist(&session_id, &query).await;

    let stream = async_stream::stream! {
        yield Ok(Event::default().event("response").data(answer));
        yield Ok(Event::default().event("done").data(session_id));
    };

    Ok(Sse::new(stream))
}
