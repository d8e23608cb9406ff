//! WebView creation and handles.
//!
//! `WebViewManager` builds `wry::WebView` children of the main window for
//! both roles and funnels their callbacks into one event sink.

use std::sync::{Arc, Mutex};

use lookup_common::WebViewError;

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod bounds;
mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use bounds::to_wry_rect;
pub use handle::WebViewHandle;
pub use handlers::validate_lookup_url;
pub use types::WebViewConfig;

/// Builds webviews and collects their events.
#[derive(Clone)]
pub struct WebViewManager {
    /// Events pushed by the webview handlers, drained by the main loop.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Content provider for the `lookup://` custom protocol.
    content_provider: Arc<ContentProvider>,
}

impl WebViewManager {
    pub fn new(content_provider: ContentProvider) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: Arc::new(content_provider),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new(ContentProvider::embedded())
    }
}

pub(crate) fn backend(e: wry::Error) -> WebViewError {
    WebViewError::Backend(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookup_common::ViewRole;

    #[test]
    fn drain_takes_events_in_order() {
        let manager = WebViewManager::default();
        manager.push_event(WebViewEvent::Closed {
            role: ViewRole::Content,
        });
        manager.push_event(WebViewEvent::TitleChanged {
            role: ViewRole::Content,
            title: "serendipity - Cambridge".into(),
        });

        let events = manager.drain_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], WebViewEvent::Closed { .. }));
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn clones_share_the_sink() {
        let manager = WebViewManager::default();
        let clone = manager.clone();
        clone.push_event(WebViewEvent::Closed {
            role: ViewRole::Shell,
        });
        assert_eq!(manager.drain_events().len(), 1);
    }
}
