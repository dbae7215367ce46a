//! User management handlers: login, profiles, heartbeat

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AppState;
use crate::error::{Error, Result};
use crate::models::Profile;
use crate::profiles::ProfileUpdate;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub username: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub success: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct HeartbeatRequest {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatResponse {
    pub online_users: Vec<String>,
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    if req.username.is_empty() {
        return Err(Error::MissingField("username"));
    }

    state.presence.touch(&req.username);
    let profile = state.profiles.ensure_default(&req.username);

    info!("User {} logged in", req.username);
    Ok(Json(LoginResponse {
        success: true,
        profile,
    }))
}

/// POST /update-profile
pub async fn update_profile(
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<OkResponse>> {
    info!("POST /update-profile - {}", req.username);

    state.profiles.update(
        &req.username,
        ProfileUpdate {
            name: req.name,
            description: req.description,
            avatar: req.avatar,
        },
    )?;
    state.presence.touch(&req.username);

    Ok(Json(OkResponse { success: true }))
}

/// GET /get-profiles
///
/// Profiles restricted to users the sweep still considers online.
pub async fn get_profiles(
    State(state): State<AppState>,
) -> Json<HashMap<String, Profile>> {
    info!("GET /get-profiles");

    let online = state.presence.list_online();
    Json(state.profiles.get_all_for(&online))
}

/// POST /heartbeat
pub async fn heartbeat(
    State(state): State<AppState>,
    Json(req): Json<HeartbeatRequest>,
) -> Json<HeartbeatResponse> {
    if let Some(username) = req.username.as_deref().filter(|u| !u.is_empty()) {
        state.presence.touch(username);
        debug!("heartbeat from {}", username);
    }

    Json(HeartbeatResponse {
        online_users: state.presence.list_online(),
    })
}
