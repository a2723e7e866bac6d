use chatsim_shared::constants::{HISTORY, PROMPT, ROOM};
use chatsim_shared::style::{Color, Palette};
use chatsim_store::codec::{self, LineStyle};

use crate::state::ChatState;

pub fn send(state: &mut ChatState, palette: &Palette, content: &str) -> Result<String, String> {
    let outcome = state.send(content).map_err(|e| e.to_string())?;

    let mut text = palette.paint(
        Color::Green,
        &format!("{PROMPT} Message sent to {ROOM} {}", outcome.room),
    );
    if let Some(e) = outcome.persist_error {
        text.push('\n');
        text.push_str(&crate::ui::alert(
            palette,
            &format!("Message kept in memory but not saved to disk: {e}"),
        ));
    }
    Ok(text)
}

pub fn history(state: &ChatState, palette: &Palette) -> Result<String, String> {
    let room = state.history().map_err(|_| "No room joined yet!".to_string())?;
    let style = if palette.is_enabled() {
        LineStyle::Ansi
    } else {
        LineStyle::Plain
    };

    let mut lines = vec![palette.paint(
        Color::Blue,
        &format!("{HISTORY} Chat History for '{}':", room.name()),
    )];
    lines.extend(
        room.messages()
            .iter()
            .map(|m| format!("{PROMPT} {}", codec::encode(m, style))),
    );
    lines.push(palette.paint(Color::Cyan, "----------------------------------"));
    Ok(lines.join("\n"))
}
