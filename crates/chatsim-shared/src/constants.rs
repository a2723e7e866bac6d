/// Application name
pub const APP_NAME: &str = "ChatSim";

/// Suffix appended to a room name to form its log file name
pub const HISTORY_FILE_SUFFIX: &str = "_history.txt";

/// Timestamp layout used in log lines (local time, second resolution)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator between sender and content in a log line
pub const SENDER_SEPARATOR: &str = ": ";

/// Byte that opens a terminal escape sequence
pub const ESCAPE_BYTE: u8 = 0x1b;

/// ANSI color escapes
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const RESET: &str = "\x1b[0m";

/// Emoji markers used by the console UI
pub const CHECK: &str = "✔️";
pub const PLUS: &str = "➕";
pub const HISTORY: &str = "📜";
pub const PROMPT: &str = "💬";
pub const STAR: &str = "⭐";
pub const ALERT: &str = "⚠️";
pub const WAVE: &str = "👋";
pub const ROOM: &str = "🏠";
