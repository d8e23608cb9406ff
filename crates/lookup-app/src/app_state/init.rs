//! Window creation, shell view and content controller setup.

use std::sync::Arc;

use lookup_common::{ViewRole, WindowSize};
use lookup_webview::{
    ControllerSettings, ViewLifecycleController, WebViewConfig, WryViewHost, SHELL_URL,
};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::core::LookupApp;

impl LookupApp {
    /// Bring up the command channel, window and views.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize(&mut self, event_loop: &ActiveEventLoop) -> bool {
        // Bind before any window appears so a second instance exits silently.
        if !self.start_command_channel(event_loop) {
            return false;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!(error = %e, "failed to create window");
                self.exit_code = 1;
                return false;
            }
        };

        let size = logical_size(&window);

        let view = &self.config.view;
        let base = WebViewConfig::from_view_settings(view.devtools, view.user_agent.clone());

        let shell_config = WebViewConfig {
            url: Some(SHELL_URL.to_string()),
            ..base.clone()
        };
        match self
            .webviews
            .create(ViewRole::Shell, window.as_ref(), size.to_rect(), shell_config)
        {
            Ok(handle) => self.shell_view = Some(handle),
            Err(e) => {
                tracing::error!(error = %e, "failed to create shell view");
                self.exit_code = 1;
                return false;
            }
        }

        let settings = ControllerSettings {
            min_toolbar_height: view.min_toolbar_height,
            padding: view.padding,
        };
        let host = WryViewHost::new(Arc::clone(&window), self.webviews.clone(), base);
        self.content = Some(ViewLifecycleController::new(host, settings, size));

        self.window = Some(window);
        tracing::info!(width = size.width, height = size.height, "window created");
        true
    }
}

/// Inner size of `window` in logical pixels.
pub(super) fn logical_size(window: &Window) -> WindowSize {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    WindowSize::new(size.width, size.height)
}
