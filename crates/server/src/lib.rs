//! In-memory presence and relay server
//!
//! Clients push state (chat snapshots, presence heartbeats, queued
//! messages) over HTTP and poll to read it back. Nothing is persisted;
//! the process holds all state for its lifetime.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod presence;
pub mod profiles;
pub mod queue;
pub mod snapshot;
pub mod team_chat;

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{AppState, RelayConfig};
use handlers::{
    // Message queue
    drain_queued_messages,
    // AI-chat snapshot
    get_chat,
    // User management
    get_profiles,
    // Team chat
    get_team_chat,
    heartbeat,
    login,
    queue_message,
    send_team_chat,
    set_chat,
    update_profile,
};

pub async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // Already set, ignore
    }

    let config = RelayConfig::from_env();

    info!("=== Relay Server ===");
    info!(
        "Presence timeout {:?}, sweep every {:?}",
        config.user_timeout, config.sweep_interval
    );
    info!("Team chat capacity: {} entries", config.team_chat_capacity);

    let state = AppState::new(&config);

    // Stale presence entries are removed on a schedule, never on read
    let sweeper = state.presence.clone();
    let sweep_interval = config.sweep_interval;
    tokio::spawn(async move {
        presence::sweep_task(sweeper, sweep_interval).await;
    });

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Relay server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the relay router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        // User management
        .route("/login", post(login))
        .route("/update-profile", post(update_profile))
        .route("/get-profiles", get(get_profiles))
        .route("/heartbeat", post(heartbeat))
        // Team chat
        .route("/get-team-chat", get(get_team_chat))
        .route("/send-team-chat", post(send_team_chat))
        // AI-chat snapshot
        .route("/set-chat", post(set_chat))
        .route("/get-chat", get(get_chat))
        // Message queue
        .route("/queue-message", post(queue_message))
        .route("/queued-messages", get(drain_queued_messages))
        // Health check
        .route("/health", get(health_check))
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK - Relay Server"
}
