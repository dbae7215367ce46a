//! Message queue handlers

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::config::AppState;

/// POST /queue-message
pub async fn queue_message(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> &'static str {
    info!("Queued message: {}", payload);
    state.queue.enqueue(payload);
    "Message queued successfully"
}

/// GET /queued-messages
///
/// Reading the queue empties it: each message reaches exactly one poller.
pub async fn drain_queued_messages(
    State(state): State<AppState>,
) -> Json<Vec<Value>> {
    info!("GET /queued-messages");
    Json(state.queue.drain())
}
