//! Parse one input line into a [`Command`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Join(String),
    History,
    Rooms,
    Help,
    Send(String),
    Empty,
}

impl Command {
    /// Parse a line with its newline already removed.
    ///
    /// Only the exact command words are commands, matched byte for byte, so
    /// `" /exit"` is a message.  Any other non-blank line, including unknown
    /// `/words`, is a message too.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Self::Empty;
        }
        match line {
            "/exit" => return Self::Exit,
            "/history" => return Self::History,
            "/rooms" => return Self::Rooms,
            "/help" => return Self::Help,
            "/join" => return Self::Join(String::new()),
            _ => {}
        }
        if let Some(room) = line.strip_prefix("/join ") {
            return Self::Join(room.trim().to_string());
        }
        Self::Send(line.to_string())
    }
}
