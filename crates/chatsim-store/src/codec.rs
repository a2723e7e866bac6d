//! One-line text codec for [`Message`] records.
//!
//! A log line has the shape
//!
//! ```text
//! [2024-05-17 09:30:12] alice: hello there
//! ```
//!
//! The bracketed local timestamp and the `": "` separator are located by
//! position when decoding, so both must be written byte-exact.  The sender may
//! be wrapped in ANSI escapes (older logs were written that way); decoding
//! strips them.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use chatsim_shared::constants::{ESCAPE_BYTE, SENDER_SEPARATOR, TIMESTAMP_FORMAT};
use chatsim_shared::style::{paint, Color};

use crate::models::Message;

/// How the sender is written by [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Sender written as plain text.
    #[default]
    Plain,
    /// Sender wrapped in the green color escape and a reset.
    Ansi,
}

/// Encode a message into a single line (without trailing newline).
pub fn encode(message: &Message, style: LineStyle) -> String {
    let sender = match style {
        LineStyle::Plain => message.sender().to_string(),
        LineStyle::Ansi => paint(Color::Green, message.sender()),
    };
    format!(
        "[{}] {sender}{SENDER_SEPARATOR}{}",
        message.timestamp().format(TIMESTAMP_FORMAT),
        message.content()
    )
}

/// Decode one line back into a message.
///
/// Returns `None` for lines that carry no `]` or no `": "` separator; such
/// lines are skipped by the caller.  An unparseable timestamp does not reject
/// the line, it resolves to [`fallback_timestamp`].
pub fn decode(line: &str) -> Option<Message> {
    let close = line.find(']')?;

    // `get` keeps a non-ASCII first character from panicking on the slice
    let ts_text = line.get(1..close).unwrap_or("");
    let rest = &line[close + 1..];
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    let sep = rest.find(SENDER_SEPARATOR)?;
    let sender = strip_escapes(&rest[..sep]);
    let content = &rest[sep + SENDER_SEPARATOR.len()..];

    Some(Message::with_timestamp(
        sender,
        content,
        parse_timestamp(ts_text),
    ))
}

/// Parse a `YYYY-MM-DD HH:MM:SS` local timestamp.
///
/// Falls back to [`fallback_timestamp`] when the text does not parse or names
/// a local time that does not exist (DST gap).  Ambiguous local times resolve
/// to the earlier instant: the line carries no UTC offset, so a message sent
/// during the repeated hour of a DST fall-back reads back one hour early.
pub fn parse_timestamp(text: &str) -> DateTime<Local> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .unwrap_or_else(fallback_timestamp)
}

/// Sentinel used for timestamps that cannot be recovered: the Unix epoch.
pub fn fallback_timestamp() -> DateTime<Local> {
    DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Local)
}

/// Remove terminal escape sequences.
///
/// A sequence starts at the escape byte and runs up to and including the
/// first ASCII letter.  An unterminated sequence swallows the rest of the
/// input.
pub fn strip_escapes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_escape = false;

    for ch in input.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
            continue;
        }
        if ch == ESCAPE_BYTE as char {
            in_escape = true;
            continue;
        }
        out.push(ch);
    }

    out
}
