//! WebView event types.

use lookup_common::ViewRole;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has finished loading (successfully or with the engine's error page).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the webviews, drained by the UI event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        role: ViewRole,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { role: ViewRole, title: String },
    /// An IPC message was received from the shell page.
    IpcMessage { role: ViewRole, body: String },
    /// An in-page navigation was blocked by the navigation policy.
    NavigationBlocked { role: ViewRole, url: String },
    /// WebView was destroyed.
    Closed { role: ViewRole },
}
