use std::sync::{Arc, Mutex};

use lookup_common::{NavigationError, ViewRole};
use tracing::{debug, warn};
use url::Url;
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// Prefixes the shell view may navigate to. Everything else is blocked.
pub const SHELL_NAV_PREFIXES: &[&str] = &[
    "lookup://",
    // WebView2 rewrites lookup://localhost/… → http://lookup.localhost/…
    "http://lookup.localhost",
    "about:blank",
];

/// Check whether the shell view may navigate to `url`.
pub fn is_shell_navigation_allowed(url: &str) -> bool {
    SHELL_NAV_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

/// Validate a lookup target: absolute `http`/`https` URL with a host.
pub fn validate_lookup_url(raw: &str) -> Result<Url, NavigationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NavigationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| NavigationError::Malformed {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(NavigationError::SchemeNotAllowed {
                scheme: other.to_string(),
            })
        }
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(NavigationError::MissingHost(trimmed.to_string())),
    }
}

/// Check whether the content view may navigate to `url`.
pub fn is_content_navigation_allowed(url: &str) -> bool {
    // The engine's own blank page is harmless and is used on creation.
    url == "about:blank" || validate_lookup_url(url).is_ok()
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

fn push(events: &Arc<Mutex<Vec<WebViewEvent>>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        role: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(%role, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(%role, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { role, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        role: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%role, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { role, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        role: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(%role, title = %title, "title changed");
            push(&events, WebViewEvent::TitleChanged { role, title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        role: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            let allowed = match role {
                ViewRole::Shell => is_shell_navigation_allowed(&url),
                ViewRole::Content => is_content_navigation_allowed(&url),
            };
            if !allowed {
                warn!(%role, url = %url, "navigation blocked");
                push(&events, WebViewEvent::NavigationBlocked { role, url });
            }
            allowed
        })
    }

    /// Pop-ups are never opened as separate windows.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        role: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(%role, url = %url, "new window request denied");
            push(&events, WebViewEvent::NavigationBlocked { role, url });
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
