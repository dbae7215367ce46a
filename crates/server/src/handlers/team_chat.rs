//! Team chat handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::config::AppState;
use crate::error::Result;
use crate::models::TeamChatEntry;

#[derive(Debug, Deserialize)]
pub struct SendTeamChatRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub message: String,
}

/// GET /get-team-chat
pub async fn get_team_chat(
    State(state): State<AppState>,
) -> Json<Vec<TeamChatEntry>> {
    Json(state.team_chat.get_all())
}

/// POST /send-team-chat
pub async fn send_team_chat(
    State(state): State<AppState>,
    Json(req): Json<SendTeamChatRequest>,
) -> Result<&'static str> {
    info!("POST /send-team-chat - {}", req.username);

    state.team_chat.append(&req.username, &req.message)?;
    Ok("Team message received")
}
