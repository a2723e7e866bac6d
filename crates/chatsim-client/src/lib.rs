pub mod commands;
pub mod config;
pub mod state;
pub mod ui;

use std::io::{self, BufRead, Write};

use tracing_subscriber::{fmt, EnvFilter};

use chatsim_shared::style::Palette;
use chatsim_store::{LineStyle, LogStore};

use crate::commands::Command;
use crate::config::{validate_username, ClientConfig};
use crate::state::ChatState;

/// Entry point of the `chatsim` binary.
pub fn run() -> anyhow::Result<()> {
    // stderr only, warn unless RUST_LOG says otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("chatsim_client_lib=warn,chatsim_store=warn,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(?config, "Loaded configuration");

    let palette = Palette::new(config.color);
    let style = if config.styled_logs {
        LineStyle::Ansi
    } else {
        LineStyle::Plain
    };
    let store = LogStore::new(config.log_dir.clone()).with_style(style);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    writeln!(output, "{}", ui::banner(&palette))?;

    let username = match config.username {
        Some(name) => name,
        None => match prompt_username(&palette, &mut input, &mut output)? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let mut state = ChatState::load(username, store);
    tracing::info!(
        user = %state.username,
        rooms = state.registry.len(),
        "Starting chat session"
    );

    writeln!(output)?;
    writeln!(output, "{}", ui::help(&palette))?;
    run_session(&mut state, &palette, &mut input, &mut output)?;
    Ok(())
}

/// Ask for a username until a valid one is entered.  `None` on end of input.
pub fn prompt_username<R: BufRead, W: Write>(
    palette: &Palette,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    loop {
        write!(output, "{}", ui::username_prompt(palette))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match validate_username(&line) {
            Ok(name) => return Ok(Some(name)),
            Err(e) => writeln!(output, "{}", ui::alert(palette, &e))?,
        }
    }
}

/// Read commands until `/exit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut ChatState,
    palette: &Palette,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        write!(output, "{}", ui::prompt(palette))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let command = Command::parse(&line);
        if command == Command::Exit {
            break;
        }

        match commands::execute(state, palette, &command) {
            Ok(text) if text.is_empty() => {}
            Ok(text) => writeln!(output, "{text}")?,
            Err(alert) => writeln!(output, "{}", ui::alert(palette, &alert))?,
        }
    }

    writeln!(output, "{}", ui::goodbye(palette))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;

    fn run_script(state: &mut ChatState, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_session(state, &Palette::new(false), &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_transcript() {
        let dir = TempDir::new().unwrap();
        let mut state = ChatState::new("alice", LogStore::new(dir.path()));

        let out = run_script(
            &mut state,
            "hello?\n/join general\nfirst\n\nsecond\n/rooms\n/history\n/exit\nignored\n",
        );

        assert!(out.contains("You must join a room first"));
        assert!(out.contains("Created new room: 🏠 general"));
        assert!(out.contains("  - 🏠 general"));
        assert!(out.contains("] alice: first"));
        assert!(out.trim_end().ends_with("Goodbye!"));
        assert_eq!(state.history().unwrap().len(), 2);
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = TempDir::new().unwrap();
        let mut first = ChatState::load("alice", LogStore::new(dir.path()));
        run_script(&mut first, "/join general\nA\nB\n");

        let mut second = ChatState::load("bob", LogStore::new(dir.path()));
        let out = run_script(&mut second, "/join general\n/history\n");

        assert!(out.contains("Joined existing room: 🏠 general"));
        let messages = second.history().unwrap().messages();
        let contents: Vec<&str> = messages.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["A", "B"]);
    }

    #[test]
    fn test_prompt_username_retries() {
        let mut input = Cursor::new(b"\n  \nbad]name\ncarol\n".to_vec());
        let mut output = Vec::new();
        let name = prompt_username(&Palette::new(false), &mut input, &mut output).unwrap();

        assert_eq!(name.as_deref(), Some("carol"));
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter your username").count(), 4);
    }

    #[test]
    fn test_prompt_username_end_of_input() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert!(prompt_username(&Palette::new(false), &mut input, &mut output)
            .unwrap()
            .is_none());
    }
}
