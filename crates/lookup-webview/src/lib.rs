//! WebView layer for word-lookup.
//!
//! Wraps the `wry` crate to provide:
//! - The shell view (toolbar + source manager) served from `lookup://`
//! - The content view that shows the dictionary page
//! - Bidirectional IPC between Rust and the shell page
//! - Navigation policy (only `http`/`https` in the content view)
//! - [`ViewLifecycleController`], which decides when the content view is
//!   created, shown, hidden, resized and recreated

pub mod content;
pub mod controller;
pub mod events;
pub mod host;
pub mod ipc;
pub mod manager;

pub use content::{ContentProvider, SHELL_URL};
pub use controller::{
    content_bounds, ControllerSettings, HeightReport, LoadOutcome, ViewHost, ViewLifecycleController,
    ViewState,
};
pub use events::{PageLoadState, WebViewEvent};
pub use host::WryViewHost;
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{validate_lookup_url, WebViewConfig, WebViewHandle, WebViewManager};
