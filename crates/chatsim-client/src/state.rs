//! Session state owned by the command loop.
//!
//! [`ChatState`] owns the room registry and the log store.  It is the only
//! place the registry is mutated, and the only caller of the store.

use thiserror::Error;
use tracing::{info, warn};

use chatsim_store::log_store::validate_room_name;
use chatsim_store::{LogStore, Message, Room, RoomRegistry, StoreError};

#[derive(Error, Debug)]
pub enum StateError {
    #[error("You must join a room first using /join <room>")]
    NoRoomJoined,

    #[error("Invalid room name '{0}': names cannot be empty or contain path separators")]
    InvalidRoomName(String),
}

/// Result of a successful join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Created,
    Existing,
}

/// Result of a send.  The message is always kept in memory; `persist_error`
/// reports whether writing it to the room log failed.
#[derive(Debug)]
pub struct SendOutcome {
    pub room: String,
    pub persist_error: Option<StoreError>,
}

/// Central session state.
pub struct ChatState {
    /// Name stamped on every sent message.
    pub username: String,

    /// All rooms known to this session.
    pub registry: RoomRegistry,

    /// Log files backing the rooms.
    pub store: LogStore,

    /// Room that `send` and `history` act on.  `None` until the first join.
    pub current_room: Option<String>,
}

impl ChatState {
    /// Create a state with an empty registry.
    pub fn new(username: impl Into<String>, store: LogStore) -> Self {
        Self {
            username: username.into(),
            registry: RoomRegistry::new(),
            store,
            current_room: None,
        }
    }

    /// Create a state whose registry is rebuilt from the store's directory.
    ///
    /// A directory that cannot be read yields an empty registry.
    pub fn load(username: impl Into<String>, store: LogStore) -> Self {
        let mut state = Self::new(username, store);
        match state.store.load_all() {
            Ok(registry) => state.registry = registry,
            Err(e) => warn!(error = %e, "starting with an empty room registry"),
        }
        state
    }

    /// Join `room`, creating it if it is not yet known.
    ///
    /// A room new to this session picks up any log file already on disk; if
    /// that log holds messages the room counts as existing.
    pub fn join(&mut self, room: &str) -> Result<JoinOutcome, StateError> {
        validate_room_name(room).map_err(|_| StateError::InvalidRoomName(room.to_string()))?;

        let outcome = if self.registry.contains(room) {
            JoinOutcome::Existing
        } else {
            let history = self.store.load_one(room).unwrap_or_else(|e| {
                warn!(room, error = %e, "failed to read existing room log");
                Vec::new()
            });
            let seeded = !history.is_empty();
            self.registry.insert_if_absent(Room::with_history(room, history));
            if seeded {
                info!(room, "room loaded from existing log");
                JoinOutcome::Existing
            } else {
                info!(room, "room created");
                JoinOutcome::Created
            }
        };

        self.current_room = Some(room.to_string());
        Ok(outcome)
    }

    /// Send `content` to the current room as the session user.
    pub fn send(&mut self, content: &str) -> Result<SendOutcome, StateError> {
        let room_name = self.current_room.clone().ok_or(StateError::NoRoomJoined)?;
        let message = Message::new(self.username.as_str(), content);

        let persist_error = match self.store.append(&room_name, &message) {
            Ok(()) => None,
            Err(e) => {
                warn!(room = %room_name, error = %e, "message not persisted");
                Some(e)
            }
        };

        match self.registry.get_mut(&room_name) {
            Some(room) => room.push(message),
            None => {
                let mut room = Room::new(room_name.as_str());
                room.push(message);
                self.registry.insert_if_absent(room);
            }
        }

        Ok(SendOutcome {
            room: room_name,
            persist_error,
        })
    }

    /// The current room, with its history.
    pub fn history(&self) -> Result<&Room, StateError> {
        self.current_room
            .as_deref()
            .and_then(|name| self.registry.get(name))
            .ok_or(StateError::NoRoomJoined)
    }

    /// Names of all known rooms, alphabetically.
    pub fn list_rooms(&self) -> Vec<&str> {
        self.registry.names().collect()
    }
}
