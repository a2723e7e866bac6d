//! # chatsim
//!
//! Single-user console chat simulator.  Rooms live in memory and every sent
//! message is appended to `<room>_history.txt` in the log directory; the
//! rooms are rebuilt from those files on the next start.

fn main() -> anyhow::Result<()> {
    chatsim_client_lib::run()
}
