//! Internal types and constants for the app state module.

use std::time::Duration;

use lookup_webview::{ViewLifecycleController, WryViewHost};
use winit::window::Window;

/// How often to poll the command channel and webview events.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Grace period between a graceful exit request and a forced exit when
/// another instance already owns the command port.
pub(super) const FORCED_EXIT_DELAY: Duration = Duration::from_secs(1);

/// How long the tokio runtime gets to wind down on shutdown.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

pub(super) type ContentController = ViewLifecycleController<WryViewHost<Window>>;
