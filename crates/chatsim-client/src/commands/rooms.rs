use chatsim_shared::constants::{ALERT, CHECK, PLUS, ROOM};
use chatsim_shared::style::{Color, Palette};

use crate::state::{ChatState, JoinOutcome};

pub fn join(state: &mut ChatState, palette: &Palette, room: &str) -> Result<String, String> {
    if room.is_empty() {
        return Err("Usage: /join <room>".to_string());
    }
    let text = match state.join(room).map_err(|e| e.to_string())? {
        JoinOutcome::Created => format!("{PLUS} Created new room: {ROOM} {room}"),
        JoinOutcome::Existing => format!("{CHECK} Joined existing room: {ROOM} {room}"),
    };
    Ok(palette.paint(Color::Green, &text))
}

pub fn list_rooms(state: &ChatState, palette: &Palette) -> String {
    let names = state.list_rooms();
    if names.is_empty() {
        return palette.paint(Color::Yellow, &format!("{ALERT} No rooms available yet."));
    }

    let mut lines = vec![palette.paint(Color::Magenta, &format!("{ROOM} Available Rooms:"))];
    lines.extend(names.iter().map(|name| format!("  - {ROOM} {name}")));
    lines.join("\n")
}
