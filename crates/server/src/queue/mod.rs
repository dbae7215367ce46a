//! Fire-and-forget message queue
//!
//! Payloads are opaque to the relay. Reading the queue empties it in the
//! same step, so each payload is delivered to exactly one drain call.

use parking_lot::Mutex;
use serde_json::Value;

#[derive(Default)]
pub struct MessageQueue {
    pending: Mutex<Vec<Value>>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, payload: Value) {
        self.pending.lock().push(payload);
    }

    /// Return everything queued so far and empty the queue in one step
    pub fn drain(&self) -> Vec<Value> {
        std::mem::take(&mut *self.pending.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drain_preserves_insertion_order() {
        let queue = MessageQueue::new();
        queue.enqueue(json!({"n": 1}));
        queue.enqueue(json!({"n": 2}));
        assert_eq!(queue.drain(), vec![json!({"n": 1}), json!({"n": 2})]);
    }

    #[test]
    fn drains_never_overlap() {
        let queue = MessageQueue::new();
        queue.enqueue(json!("early"));
        assert_eq!(queue.drain(), vec![json!("early")]);

        queue.enqueue(json!("late"));
        assert_eq!(queue.drain(), vec![json!("late")]);
        assert!(queue.drain().is_empty());
    }
}
