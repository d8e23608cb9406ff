//! Polling of the command channel and webview events.

use std::time::Instant;

use lookup_common::ViewRole;
use lookup_webview::{PageLoadState, WebViewEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::LookupApp;
use super::types::POLL_INTERVAL;

impl LookupApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_commands();
        self.poll_webview_events();

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            self.handle_webview_event(event);
        }
    }

    fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::PageLoad {
                role: ViewRole::Content,
                state: PageLoadState::Finished,
                url,
            } => {
                tracing::debug!(url = %url, "content page loaded");
                if let Some(content) = self.content.as_mut() {
                    content.on_load_finished();
                }
            }
            WebViewEvent::PageLoad { role, state, url } => {
                tracing::debug!(%role, ?state, url = %url, "page load");
            }
            WebViewEvent::TitleChanged {
                role: ViewRole::Content,
                title,
            } => self.update_window_title(&title),
            WebViewEvent::TitleChanged { .. } => {}
            WebViewEvent::IpcMessage {
                role: ViewRole::Shell,
                body,
            } => self.handle_ipc_message(&body),
            WebViewEvent::IpcMessage { role, .. } => {
                tracing::warn!(%role, "IPC message from non-shell view dropped");
            }
            WebViewEvent::NavigationBlocked { role, url } => {
                tracing::debug!(%role, url = %url, "navigation blocked");
            }
            WebViewEvent::Closed { role } => {
                tracing::debug!(%role, "webview closed");
            }
        }
    }
}
