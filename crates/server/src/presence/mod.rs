//! Online-user tracking
//!
//! Maps username -> last-seen time. A background task sweeps entries older
//! than the configured timeout; reads never expire entries themselves, so
//! staleness of up to one sweep interval is expected.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

pub struct PresenceTracker {
    timeout: chrono::Duration,
    last_seen: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl PresenceTracker {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout: chrono::Duration::from_std(timeout)
                .unwrap_or_else(|_| chrono::Duration::seconds(10)),
            last_seen: RwLock::new(HashMap::new()),
        }
    }

    /// Mark a user as active now. Inserts or refreshes; idempotent.
    pub fn touch(&self, username: &str) {
        self.last_seen.write().insert(username.to_string(), Utc::now());
    }

    /// Usernames that have not been swept yet
    pub fn list_online(&self) -> Vec<String> {
        self.last_seen.read().keys().cloned().collect()
    }

    /// Drop every entry whose last activity is older than the timeout,
    /// as of `now`
    pub fn sweep(&self, now: DateTime<Utc>) {
        let mut map = self.last_seen.write();
        let before = map.len();
        map.retain(|_, last| now.signed_duration_since(*last) <= self.timeout);
        let removed = before - map.len();
        if removed > 0 {
            debug!("swept {} stale presence entries", removed);
        }
    }

    #[cfg(test)]
    fn set_last_seen(&self, username: &str, at: DateTime<Utc>) {
        self.last_seen.write().insert(username.to_string(), at);
    }
}

/// Periodic sweep loop, spawned from `run()` for the process lifetime
pub async fn sweep_task(tracker: Arc<PresenceTracker>, every: Duration) {
    let mut interval = tokio::time::interval(every);
    loop {
        interval.tick().await;
        tracker.sweep(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PresenceTracker {
        PresenceTracker::new(Duration::from_secs(10))
    }

    #[test]
    fn touch_makes_user_online() {
        let presence = tracker();
        presence.touch("frodo");
        assert_eq!(presence.list_online(), vec!["frodo".to_string()]);
    }

    #[test]
    fn touch_is_idempotent() {
        let presence = tracker();
        presence.touch("frodo");
        presence.touch("frodo");
        assert_eq!(presence.list_online().len(), 1);
    }

    #[test]
    fn sweep_removes_only_stale_entries() {
        let presence = tracker();
        let now = Utc::now();
        presence.set_last_seen("stale", now - chrono::Duration::seconds(11));
        presence.set_last_seen("fresh", now - chrono::Duration::seconds(5));

        presence.sweep(now);

        assert_eq!(presence.list_online(), vec!["fresh".to_string()]);
    }

    #[test]
    fn entry_at_exact_timeout_survives() {
        let presence = tracker();
        let now = Utc::now();
        presence.set_last_seen("edge", now - chrono::Duration::seconds(10));

        presence.sweep(now);
        assert_eq!(presence.list_online().len(), 1);

        presence.sweep(now + chrono::Duration::milliseconds(1));
        assert!(presence.list_online().is_empty());
    }

    #[test]
    fn sweep_is_a_noop_on_active_users() {
        let presence = tracker();
        presence.touch("frodo");
        presence.touch("sam");
        presence.sweep(Utc::now());
        assert_eq!(presence.list_online().len(), 2);
    }
}
