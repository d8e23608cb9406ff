use lookup_common::{Rect, WebViewError};
use wry::WebView;

use super::backend;
use super::bounds::to_wry_rect;

/// Handle to a managed WebView instance. Dropping it destroys the view.
pub struct WebViewHandle {
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Navigate to a URL.
    pub fn load_url(&self, url: &str) -> Result<(), WebViewError> {
        self.webview.load_url(url).map_err(backend)
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), WebViewError> {
        self.webview.evaluate_script(js).map_err(backend)
    }

    /// Send a typed IPC message to the page's `window.lookup.ipc` bridge.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), WebViewError> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.evaluate_script(&script)
    }

    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: Rect) -> Result<(), WebViewError> {
        self.webview.set_bounds(to_wry_rect(&bounds)).map_err(backend)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), WebViewError> {
        self.webview.set_visible(visible).map_err(backend)
    }
}
