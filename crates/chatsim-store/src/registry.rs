//! In-memory room registry.

use std::collections::BTreeMap;

use crate::models::Room;

/// All rooms known to the running client, keyed by name.
///
/// Rooms are only ever added; an existing room is never replaced.
#[derive(Debug, Default, Clone)]
pub struct RoomRegistry {
    rooms: BTreeMap<String, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    /// Insert `room` unless a room with the same name exists.  Returns `true`
    /// if the room was inserted.
    pub fn insert_if_absent(&mut self, room: Room) -> bool {
        if self.rooms.contains_key(room.name()) {
            return false;
        }
        self.rooms.insert(room.name().to_string(), room);
        true
    }

    /// Room names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
