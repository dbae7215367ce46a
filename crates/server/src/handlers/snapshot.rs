//! AI-chat snapshot handlers

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::debug;

use crate::config::AppState;
use crate::models::ChatSnapshot;

/// POST /set-chat
///
/// Always acknowledges, even for a payload the relay cannot understand;
/// best-effort pushers must not break on a format mismatch.
pub async fn set_chat(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> &'static str {
    state.ai_chat.set(payload);
    "Chat history received"
}

/// GET /get-chat
pub async fn get_chat(State(state): State<AppState>) -> Json<ChatSnapshot> {
    debug!("GET /get-chat");
    Json(state.ai_chat.get())
}
