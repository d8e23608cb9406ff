//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the shell view, the content view
//! controller and the command channel runtime.

mod channel;
mod core;
mod event_handler;
mod init;
mod ipc_dispatch;
mod polling;
mod shell;
mod shutdown;
mod sources;
mod title;
mod types;

pub use core::LookupApp;
