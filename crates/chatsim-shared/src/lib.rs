//! # chatsim-shared
//!
//! Constants and terminal styling helpers used by both the log store and the
//! console client.

pub mod constants;
pub mod style;
