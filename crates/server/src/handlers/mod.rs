//! HTTP handlers for the relay server
//!
//! Each handler extracts its parameters, calls into the owning component,
//! and serializes the result. The two endpoints that clients poll in a
//! tight loop (`/get-chat`, `/heartbeat`) log at debug level only.

pub mod queue;
pub mod snapshot;
pub mod team_chat;
pub mod users;

// Re-export AppState from config
pub use crate::config::AppState;

// User management
pub use users::{get_profiles, heartbeat, login, update_profile};

// Team chat
pub use team_chat::{get_team_chat, send_team_chat};

// AI-chat snapshot
pub use snapshot::{get_chat, set_chat};

// Message queue
pub use queue::{drain_queued_messages, queue_message};
