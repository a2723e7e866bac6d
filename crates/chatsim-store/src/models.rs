//! Domain model structs kept in memory and persisted as log lines.
//!
//! Both structs derive `Serialize` and `Deserialize` so they can be handed to
//! other layers without an intermediate DTO.

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A single chat message.  Immutable once built; the timestamp always has
/// whole-second precision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    sender: String,
    content: String,
    timestamp: DateTime<Local>,
}

impl Message {
    /// Build a message stamped with the local clock.
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_timestamp(sender, content, Local::now())
    }

    /// Build a message with an explicit timestamp (used when reading logs).
    pub fn with_timestamp(
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp: truncate_to_seconds(timestamp),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

fn truncate_to_seconds(ts: DateTime<Local>) -> DateTime<Local> {
    // with_nanosecond(0) is always in range
    ts.with_nanosecond(0).unwrap_or(ts)
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A named room and its history in sending order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    name: String,
    messages: Vec<Message>,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_history(name, Vec::new())
    }

    /// Build a room from an already ordered history.  The order is kept as
    /// is, never re-sorted by timestamp.
    pub fn with_history(name: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            name: name.into(),
            messages,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
