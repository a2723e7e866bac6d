use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Generic I/O error (opening, appending to or reading a log file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The room name cannot be mapped to a file inside the log directory.
    #[error("Invalid room name: {0:?}")]
    InvalidRoomName(String),

    /// The log directory itself could not be listed.
    #[error("Cannot read log directory '{}': {source}", .path.display())]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
