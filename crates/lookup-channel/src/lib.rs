//! Loopback command channel: one lookup word per TCP connection.
//!
//! The running GUI instance owns the listener; `lookup-trigger` (or any
//! `printf word | nc 127.0.0.1 5050`) connects, writes the word and closes.
//! A failed bind with `AddrInUse` means another instance already owns the
//! port, which is how single-instance is enforced.

mod client;
mod listener;

pub use client::send_word;
pub use listener::{decode_word, CommandEvent, CommandListener, ListenerLimits};
