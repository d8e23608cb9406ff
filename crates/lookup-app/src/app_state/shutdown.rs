//! Graceful shutdown: destroy the views, stop the command channel.

use super::core::LookupApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl LookupApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Views are destroyed before the runtime; dropping the runtime closes
    /// the command port.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("initiating graceful shutdown");

        if let Some(content) = self.content.as_mut() {
            content.teardown();
        }
        self.content = None;
        self.shell_view = None;

        self.command_rx = None;
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        tracing::info!("graceful shutdown complete");
    }
}
