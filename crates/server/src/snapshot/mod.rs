//! AI-chat snapshot relay
//!
//! One writer (a browser extension scraping an AI chat page) pushes the
//! entire conversation plus a status HTML blob; any number of pollers read
//! it back. The snapshot is replaced wholesale, never merged, and the two
//! fields always change together.

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{info, warn};

use crate::models::ChatSnapshot;

#[derive(Default)]
pub struct ChatRelay {
    snapshot: RwLock<ChatSnapshot>,
}

impl ChatRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot from a pushed payload
    ///
    /// Accepts `{chat: [...], extra_html: "..."}` or, for older pushers, a
    /// bare message array (which leaves `extra_html` untouched). Anything
    /// else is logged and dropped; the caller still sees success.
    pub fn set(&self, payload: Value) {
        match payload {
            Value::Object(mut body) => match body.remove("chat") {
                Some(Value::Array(chat)) => {
                    let extra_html = match body.remove("extra_html") {
                        Some(Value::String(html)) => html,
                        _ => String::new(),
                    };
                    info!(
                        "Received chat history ({} msgs) and status data",
                        chat.len()
                    );
                    *self.snapshot.write() = ChatSnapshot { chat, extra_html };
                }
                _ => warn!("Received invalid chat history format"),
            },
            Value::Array(chat) => {
                info!("Received legacy chat history ({} msgs)", chat.len());
                self.snapshot.write().chat = chat;
            }
            _ => warn!("Received invalid chat history format"),
        }
    }

    /// The current snapshot; empty until the first write
    pub fn get(&self) -> ChatSnapshot {
        self.snapshot.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn starts_empty() {
        let relay = ChatRelay::new();
        let snapshot = relay.get();
        assert!(snapshot.chat.is_empty());
        assert_eq!(snapshot.extra_html, "");
    }

    #[test]
    fn structured_payload_replaces_both_fields() {
        let relay = ChatRelay::new();
        relay.set(json!({
            "chat": [{"role": "user", "text": "hi"}],
            "extra_html": "<table/>"
        }));

        let snapshot = relay.get();
        assert_eq!(snapshot.chat.len(), 1);
        assert_eq!(snapshot.extra_html, "<table/>");
    }

    #[test]
    fn structured_payload_without_html_clears_it() {
        let relay = ChatRelay::new();
        relay.set(json!({"chat": [], "extra_html": "old"}));
        relay.set(json!({"chat": [{"text": "new"}]}));
        assert_eq!(relay.get().extra_html, "");
    }

    #[test]
    fn bare_array_keeps_previous_status_blob() {
        let relay = ChatRelay::new();
        relay.set(json!({"chat": [{"text": "a"}], "extra_html": "<b/>"}));
        relay.set(json!([{"text": "b"}, {"text": "c"}]));

        let snapshot = relay.get();
        assert_eq!(snapshot.chat.len(), 2);
        assert_eq!(snapshot.extra_html, "<b/>");
    }

    #[test]
    fn malformed_payload_is_ignored() {
        let relay = ChatRelay::new();
        relay.set(json!({"chat": [{"text": "kept"}], "extra_html": "kept"}));

        relay.set(json!("nonsense"));
        relay.set(json!({"chat": "not an array"}));
        relay.set(json!(42));

        let snapshot = relay.get();
        assert_eq!(snapshot.chat.len(), 1);
        assert_eq!(snapshot.extra_html, "kept");
    }
}
