use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user profile, keyed by username
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub description: String,
    pub avatar: String,
    pub color: String,
}

/// A single team chat entry
///
/// Immutable once appended. The flag fields are only serialized when set,
/// so plain messages stay plain on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamChatEntry {
    /// Epoch milliseconds; collision-tolerant, not a strict sequence
    pub id: i64,
    pub username: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Set on a message that was recognized as a dice command
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_command: bool,
    /// Set on the synthesized System entry describing a roll outcome
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_system: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// The single replaceable AI-chat snapshot served to all readers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatSnapshot {
    pub chat: Vec<Value>,
    pub extra_html: String,
}
