//! Team chat log
//!
//! Append-only and size-bounded: the log retains the newest entries and
//! discards the oldest. Messages that parse as dice commands are expanded
//! into a command/result pair on append.

pub mod dice;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::TeamChatEntry;

/// Reserved author for synthesized roll-result entries
const SYSTEM_AUTHOR: &str = "System";

pub struct TeamChatLog {
    capacity: usize,
    entries: Mutex<Vec<TeamChatEntry>>,
}

impl TeamChatLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Append a message, expanding dice commands into a command/result pair
    ///
    /// Both entries of a pair are pushed under one lock acquisition, so a
    /// reader never sees the command without its System result.
    pub fn append(&self, username: &str, message: &str) -> Result<()> {
        if username.is_empty() {
            return Err(Error::MissingField("username"));
        }
        if message.is_empty() {
            return Err(Error::MissingField("message"));
        }

        let now = Utc::now();
        let id = now.timestamp_millis();

        let mut entries = self.entries.lock();
        match dice::parse_roll(message) {
            Some(roll) => {
                info!("{} rolled {} ({})", username, roll.total, roll.details);
                entries.push(TeamChatEntry {
                    id,
                    username: username.to_string(),
                    message: message.to_string(),
                    timestamp: now,
                    is_command: true,
                    is_system: false,
                });
                entries.push(TeamChatEntry {
                    id: id + 1,
                    username: SYSTEM_AUTHOR.to_string(),
                    message: format!(
                        "🎲 {} rolled {} ({})",
                        username, roll.total, roll.details
                    ),
                    timestamp: now,
                    is_command: false,
                    is_system: true,
                });
            }
            None => entries.push(TeamChatEntry {
                id,
                username: username.to_string(),
                message: message.to_string(),
                timestamp: now,
                is_command: false,
                is_system: false,
            }),
        }

        // Keep only the newest `capacity` entries
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
        }
        Ok(())
    }

    /// The retained log, oldest first
    pub fn get_all(&self) -> Vec<TeamChatEntry> {
        self.entries.lock().clone()
    }
}
