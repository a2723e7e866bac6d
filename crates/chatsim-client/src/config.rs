//! Client configuration loaded from environment variables.
//!
//! Every setting has a default so the client starts with zero configuration
//! in the current working directory.

use std::path::PathBuf;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding the `<room>_history.txt` logs.
    /// Env: `CHATSIM_LOG_DIR`
    /// Default: `.`
    pub log_dir: PathBuf,

    /// Username to chat as.  When unset (or invalid) the user is prompted.
    /// Env: `CHATSIM_USER`
    pub username: Option<String>,

    /// Whether console output is colored.
    /// Env: `CHATSIM_COLOR` (true/false); `NO_COLOR` set disables.
    /// Default: `true`
    pub color: bool,

    /// Whether senders are written to the logs wrapped in color escapes, the
    /// way older logs were written.
    /// Env: `CHATSIM_STYLED_LOGS` (true/false)
    /// Default: `false`
    pub styled_logs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            username: None,
            color: true,
            styled_logs: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("CHATSIM_LOG_DIR") {
            if !dir.trim().is_empty() {
                config.log_dir = PathBuf::from(dir);
            }
        }

        if let Some(user) = lookup("CHATSIM_USER") {
            match validate_username(&user) {
                Ok(name) => config.username = Some(name),
                Err(e) => {
                    tracing::warn!(value = %user, error = %e, "Invalid CHATSIM_USER, will prompt");
                }
            }
        }

        if let Some(val) = lookup("CHATSIM_COLOR") {
            config.color = parse_flag("CHATSIM_COLOR", &val, config.color);
        }
        // https://no-color.org: any value disables color
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        if let Some(val) = lookup("CHATSIM_STYLED_LOGS") {
            config.styled_logs = parse_flag("CHATSIM_STYLED_LOGS", &val, config.styled_logs);
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter.

        config
    }
}

fn parse_flag(key: &str, value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(key, value, "Invalid boolean, using default");
            default
        }
    }
}

/// Check that a username can be written to and read back from a log line.
///
/// Returns the trimmed name.
pub fn validate_username(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("username cannot be empty".to_string());
    }
    if name.contains(']') || name.contains(": ") {
        return Err("username cannot contain ']' or ': '".to_string());
    }
    if name.chars().any(char::is_control) {
        return Err("username cannot contain control characters".to_string());
    }
    Ok(name.to_string())
}
