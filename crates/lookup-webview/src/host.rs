//! Production [`ViewHost`]: a wry child webview of the main window.

use std::sync::Arc;

use lookup_common::{Rect, ViewRole, WebViewError};
use tracing::debug;
use wry::raw_window_handle::HasWindowHandle;

use crate::controller::ViewHost;
use crate::events::WebViewEvent;
use crate::manager::{WebViewConfig, WebViewHandle, WebViewManager};

pub struct WryViewHost<W: HasWindowHandle> {
    window: Arc<W>,
    manager: WebViewManager,
    config: WebViewConfig,
    handle: Option<WebViewHandle>,
}

impl<W: HasWindowHandle> WryViewHost<W> {
    pub fn new(window: Arc<W>, manager: WebViewManager, config: WebViewConfig) -> Self {
        Self {
            window,
            manager,
            config,
            handle: None,
        }
    }

    fn live(&self) -> Result<&WebViewHandle, WebViewError> {
        self.handle.as_ref().ok_or(WebViewError::NotCreated)
    }
}

impl<W: HasWindowHandle> ViewHost for WryViewHost<W> {
    fn create(&mut self, bounds: Rect, url: Option<&str>) -> Result<(), WebViewError> {
        self.destroy();

        let config = WebViewConfig {
            url: url.map(str::to_string),
            visible: false,
            ..self.config.clone()
        };
        let handle = self
            .manager
            .create(ViewRole::Content, self.window.as_ref(), bounds, config)?;
        self.handle = Some(handle);
        Ok(())
    }

    fn destroy(&mut self) {
        if self.handle.take().is_some() {
            debug!("content view destroyed");
            self.manager.push_event(WebViewEvent::Closed {
                role: ViewRole::Content,
            });
        }
    }

    fn navigate(&mut self, url: &str) -> Result<(), WebViewError> {
        self.live()?.load_url(url)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), WebViewError> {
        self.live()?.set_visible(visible)
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), WebViewError> {
        self.live()?.set_bounds(bounds)
    }
}
