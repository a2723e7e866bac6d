//! Console text: banner, help, prompts and alerts.
//!
//! Everything here returns a `String` so the session loop decides where it is
//! written.

use chatsim_shared::constants::{ALERT, APP_NAME, PROMPT, STAR, WAVE};
use chatsim_shared::style::{Color, Palette};

const RULE: &str = "====================================";

pub fn banner(palette: &Palette) -> String {
    let title = format!(
        "     {PROMPT} Welcome to {APP_NAME} v{}    ",
        env!("CARGO_PKG_VERSION")
    );
    [
        palette.paint(Color::Cyan, RULE),
        palette.paint(Color::Magenta, &title),
        palette.paint(Color::Cyan, RULE),
    ]
    .join("\n")
}

pub fn username_prompt(palette: &Palette) -> String {
    palette.paint(Color::Blue, &format!("Enter your username {WAVE}: "))
}

pub fn help(palette: &Palette) -> String {
    let rows = [
        ("/join <room>   ", "Join or create a chat room"),
        ("/history       ", "Show chat history of current room"),
        ("/rooms         ", "List all available chat rooms"),
        ("/help          ", "Show this help"),
        ("/exit          ", "Exit the chat simulator"),
    ];

    let mut lines = vec![format!("{STAR} Commands:")];
    for (usage, what) in rows {
        lines.push(format!("  {}- {what}", palette.paint(Color::Yellow, usage)));
    }
    lines.push(palette.paint(Color::Magenta, "------------------------------------"));
    lines.join("\n")
}

pub fn prompt(palette: &Palette) -> String {
    palette.paint(Color::Green, &format!("{PROMPT} > "))
}

pub fn alert(palette: &Palette, text: &str) -> String {
    palette.paint(Color::Red, &format!("{ALERT} {text}"))
}

pub fn goodbye(palette: &Palette) -> String {
    palette.paint(Color::Blue, &format!("{WAVE} Goodbye!"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_has_no_escapes() {
        let palette = Palette::new(false);
        for text in [banner(&palette), help(&palette), prompt(&palette)] {
            assert!(!text.contains('\x1b'));
        }
        assert!(banner(&palette).contains(APP_NAME));
    }

    #[test]
    fn test_alert_is_red() {
        let text = alert(&Palette::new(true), "careful");
        assert!(text.starts_with("\x1b[31m"));
        assert!(text.contains("careful"));
    }
}
