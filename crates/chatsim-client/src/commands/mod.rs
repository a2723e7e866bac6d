//! Command parsing and handlers.
//!
//! Handlers take the session state and return the text to show the user:
//! `Ok` for normal output, `Err` for an alert.

pub mod messaging;
pub mod parser;
pub mod rooms;

use chatsim_shared::style::Palette;

pub use parser::Command;

use crate::state::ChatState;
use crate::ui;

/// Run a parsed command.  `Exit` and `Empty` produce no output.
pub fn execute(
    state: &mut ChatState,
    palette: &Palette,
    command: &Command,
) -> Result<String, String> {
    match command {
        Command::Join(room) => rooms::join(state, palette, room),
        Command::Rooms => Ok(rooms::list_rooms(state, palette)),
        Command::History => messaging::history(state, palette),
        Command::Send(content) => messaging::send(state, palette, content),
        Command::Help => Ok(ui::help(palette)),
        Command::Exit | Command::Empty => Ok(String::new()),
    }
}
