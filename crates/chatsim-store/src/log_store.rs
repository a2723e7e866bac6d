//! Per-room append-only log files.
//!
//! The [`LogStore`] maps a room name to `<room>_history.txt` inside its base
//! directory, appends encoded lines to that file, and reads every such file
//! back into a [`RoomRegistry`] at startup.  Every call opens and drops its
//! own file handle.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use chatsim_shared::constants::HISTORY_FILE_SUFFIX;

use crate::codec::{self, LineStyle};
use crate::error::{Result, StoreError};
use crate::models::{Message, Room};
use crate::registry::RoomRegistry;

/// File name of the log for `room`.
pub fn log_file_name(room: &str) -> String {
    format!("{room}{HISTORY_FILE_SUFFIX}")
}

/// Recover the room name from a log file name, if it follows the convention.
pub fn room_name_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(HISTORY_FILE_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// Reject names that would escape the log directory or cannot be a file name.
pub fn validate_room_name(room: &str) -> Result<()> {
    if room.is_empty()
        || room == "."
        || room == ".."
        || room.contains('/')
        || room.contains('\\')
        || room.contains('\0')
    {
        return Err(StoreError::InvalidRoomName(room.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct LogStore {
    dir: PathBuf,
    style: LineStyle,
}

impl LogStore {
    /// Store rooted at `dir`, writing plain lines.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            style: LineStyle::Plain,
        }
    }

    /// Choose how the sender is written on append.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }

    /// Full path of the log for `room`.
    pub fn log_path(&self, room: &str) -> Result<PathBuf> {
        validate_room_name(room)?;
        Ok(self.dir.join(log_file_name(room)))
    }

    /// Append one encoded line for `message` to the log of `room`.
    ///
    /// The file is created if missing and never truncated.
    pub fn append(&self, room: &str, message: &Message) -> Result<()> {
        let path = self.log_path(room)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

        let mut line = codec::encode(message, self.style);
        line.push('\n');
        file.write_all(line.as_bytes())?;

        debug!(room, path = %path.display(), "appended message");
        Ok(())
    }

    /// Read the history of a single room, in file order.
    ///
    /// A missing file is an empty history.  Malformed lines are skipped, and a
    /// read error part way through keeps what was read so far.
    pub fn load_one(&self, room: &str) -> Result<Vec<Message>> {
        let path = self.log_path(room)?;
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut messages = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            match line {
                Ok(line) => match codec::decode(&line) {
                    Some(message) => messages.push(message),
                    None => debug!(room, line_no, "skipping malformed log line"),
                },
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!(room, line_no, "skipping log line that is not valid UTF-8");
                }
                Err(e) => {
                    warn!(
                        room,
                        line_no,
                        error = %e,
                        recovered = messages.len(),
                        "read failed, keeping partial history"
                    );
                    break;
                }
            }
        }

        Ok(messages)
    }

    /// Rebuild the registry from every `*_history.txt` file in the directory.
    ///
    /// Rooms whose file cannot be opened are registered with an empty
    /// history.  Files whose room name could never be joined (`.`, or a name
    /// with a path separator) are left out.  Only a directory that cannot be
    /// listed is an error.
    pub fn load_all(&self) -> Result<RoomRegistry> {
        let entries = fs::read_dir(&self.dir).map_err(|source| StoreError::LogDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut registry = RoomRegistry::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "failed to read directory entry");
                    continue;
                }
            };

            let file_name = entry.file_name();
            let Some(room) = file_name.to_str().and_then(room_name_from_file_name) else {
                continue;
            };
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            if registry.contains(room) {
                continue;
            }
            if let Err(e) = validate_room_name(room) {
                warn!(room, error = %e, "ignoring log file with an unusable room name");
                continue;
            }

            let history = match self.load_one(room) {
                Ok(history) => history,
                Err(e) => {
                    warn!(room, error = %e, "failed to load room history");
                    Vec::new()
                }
            };
            debug!(room, messages = history.len(), "loaded room");
            registry.insert_if_absent(Room::with_history(room, history));
        }

        info!(
            dir = %self.dir.display(),
            rooms = registry.len(),
            "room registry loaded"
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (LogStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = LogStore::new(dir.path());
        (store, dir)
    }

    #[test]
    fn test_naming_convention_inverse() {
        for name in ["general", "Rust Talk", "a_history", "ünï"] {
            let file = log_file_name(name);
            assert_eq!(room_name_from_file_name(&file), Some(name));
        }
        assert_eq!(room_name_from_file_name("notes.txt"), None);
        assert_eq!(room_name_from_file_name(HISTORY_FILE_SUFFIX), None);
    }

    #[test]
    fn test_append_is_additive() {
        let (store, _dir) = test_store();
        for text in ["one", "two", "three"] {
            store.append("lobby", &Message::new("alice", text)).unwrap();
        }

        let history = store.load_one("lobby").unwrap();
        let contents: Vec<&str> = history.iter().map(Message::content).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_append_does_not_truncate() {
        let (store, dir) = test_store();
        let path = dir.path().join("lobby_history.txt");
        fs::write(&path, "[2024-05-17 09:00:00] zoe: earlier\n").unwrap();

        store.append("lobby", &Message::new("alice", "later")).unwrap();

        let history = store.load_one("lobby").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender(), "zoe");
        assert_eq!(history[1].content(), "later");
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let (store, _dir) = test_store();
        assert!(store.load_one("nowhere").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_is_skipped() {
        let (store, dir) = test_store();
        fs::write(
            dir.path().join("mixed_history.txt"),
            "[2024-05-17 09:00:00] alice: good line\nthis line has no closing bracket\n\n",
        )
        .unwrap();

        let history = store.load_one("mixed").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].content(), "good line");
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let (store, dir) = test_store();
        let mut bytes = b"[2024-05-17 09:00:00] alice: before\n".to_vec();
        bytes.extend_from_slice(b"[2024-05-17 09:00:01] bob: \xff\xfe\n");
        bytes.extend_from_slice(b"[2024-05-17 09:00:02] carol: after\n");
        fs::write(dir.path().join("bytes_history.txt"), bytes).unwrap();

        let history = store.load_one("bytes").unwrap();
        let senders: Vec<&str> = history.iter().map(Message::sender).collect();
        assert_eq!(senders, vec!["alice", "carol"]);
    }

    #[test]
    fn test_styled_logs_load_plain_senders() {
        let (store, _dir) = test_store();
        let store = store.with_style(LineStyle::Ansi);
        store.append("retro", &Message::new("alice", "colored")).unwrap();

        let history = store.load_one("retro").unwrap();
        assert_eq!(history[0].sender(), "alice");
    }

    #[test]
    fn test_invalid_room_names_are_rejected() {
        let (store, _dir) = test_store();
        let msg = Message::new("alice", "hi");
        for bad in ["", ".", "..", "../escape", "a/b", "a\\b", "nul\0"] {
            assert!(matches!(
                store.append(bad, &msg),
                Err(StoreError::InvalidRoomName(_))
            ));
        }
    }

    #[test]
    fn test_load_all_round_trip() {
        let (store, dir) = test_store();
        let a = Message::new("alice", "A");
        let b = Message::new("bob", "B");
        store.append("general", &a).unwrap();
        store.append("general", &b).unwrap();
        store.append("random", &Message::new("carol", "C")).unwrap();
        fs::write(dir.path().join("README.md"), "not a log").unwrap();

        // fresh store, as a new process would build it
        let registry = LogStore::new(dir.path()).load_all().unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["general", "random"]);

        let general = registry.get("general").unwrap().messages();
        assert_eq!(general.len(), 2);
        assert_eq!((general[0].sender(), general[0].content()), ("alice", "A"));
        assert_eq!((general[1].sender(), general[1].content()), ("bob", "B"));
    }

    #[test]
    fn test_load_all_ignores_matching_directories() {
        let (store, dir) = test_store();
        fs::create_dir(dir.path().join("odd_history.txt")).unwrap();
        store.append("real", &Message::new("alice", "hi")).unwrap();

        let registry = store.load_all().unwrap();
        assert!(registry.contains("real"));
        assert!(!registry.contains("odd"));
    }

    #[test]
    fn test_load_all_missing_dir_is_error() {
        let (_store, dir) = test_store();
        let store = LogStore::new(dir.path().join("missing"));
        assert!(matches!(store.load_all(), Err(StoreError::LogDir { .. })));
    }

    #[test]
    fn test_load_all_skips_unjoinable_names() {
        let (store, dir) = test_store();
        let lines = "[2024-05-17 09:00:00] alice: one\n[2024-05-17 09:00:01] bob: two\n";
        fs::write(dir.path().join("a\\b_history.txt"), lines).unwrap();
        fs::write(dir.path().join("._history.txt"), lines).unwrap();
        fs::write(dir.path().join("ok_history.txt"), lines).unwrap();

        let registry = store.load_all().unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["ok"]);
        assert_eq!(registry.get("ok").unwrap().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_error_keeps_partial_history() {
        let (store, dir) = test_store();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("folder_history.txt")).unwrap();

        // opens fine, every read fails with EISDIR
        assert!(store.load_one("folder").unwrap().is_empty());

        let registry = store.load_all().unwrap();
        assert!(registry.get("folder").unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unopenable_file_registers_empty_room() {
        let (store, dir) = test_store();
        let link = dir.path().join("loop_history.txt");
        std::os::unix::fs::symlink(&link, &link).unwrap();
        store.append("fine", &Message::new("alice", "hi")).unwrap();

        assert!(matches!(store.load_one("loop"), Err(StoreError::Io(_))));

        let registry = store.load_all().unwrap();
        assert!(registry.get("loop").unwrap().is_empty());
        assert_eq!(registry.get("fine").unwrap().len(), 1);
    }
}
