//! # chatsim-store
//!
//! Local persistence for ChatSim rooms.
//!
//! Every room owns one append-only text file holding one line per message.
//! The crate exposes the line codec, a synchronous [`LogStore`] that appends
//! to and reads back those files, and the in-memory [`RoomRegistry`] that a
//! client rebuilds from them at startup.

pub mod codec;
pub mod log_store;
pub mod models;
pub mod registry;

mod error;

pub use codec::LineStyle;
pub use error::StoreError;
pub use log_store::LogStore;
pub use models::*;
pub use registry::RoomRegistry;
