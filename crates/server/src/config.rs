//! Relay server configuration and shared state

use std::sync::Arc;
use std::time::Duration;

use crate::presence::PresenceTracker;
use crate::profiles::ProfileStore;
use crate::queue::MessageQueue;
use crate::snapshot::ChatRelay;
use crate::team_chat::TeamChatLog;

/// Configuration for the relay server
#[derive(Clone, Debug)]
pub struct RelayConfig {
    /// Port to listen on
    pub port: u16,
    /// How long a user stays online after their last request
    pub user_timeout: Duration,
    /// How often stale presence entries are swept
    pub sweep_interval: Duration,
    /// The team chat retains at most this many entries
    pub team_chat_capacity: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            user_timeout: Duration::from_secs(10),
            sweep_interval: Duration::from_secs(5),
            team_chat_capacity: 100,
        }
    }
}

impl RelayConfig {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = std::env::var("RELAY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.port = port;
        }
        config
    }
}

/// App state shared across all handlers
///
/// Constructed once at process start and torn down at process stop. Each
/// component guards its own state; no operation touches two components, so
/// there are no cross-component locks.
#[derive(Clone)]
pub struct AppState {
    pub presence: Arc<PresenceTracker>,
    pub profiles: Arc<ProfileStore>,
    pub ai_chat: Arc<ChatRelay>,
    pub team_chat: Arc<TeamChatLog>,
    pub queue: Arc<MessageQueue>,
}

impl AppState {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            presence: Arc::new(PresenceTracker::new(config.user_timeout)),
            profiles: Arc::new(ProfileStore::new()),
            ai_chat: Arc::new(ChatRelay::new()),
            team_chat: Arc::new(TeamChatLog::new(config.team_chat_capacity)),
            queue: Arc::new(MessageQueue::new()),
        }
    }
}
