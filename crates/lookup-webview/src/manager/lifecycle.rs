use std::borrow::Cow;
use std::sync::Arc;

use lookup_common::{Rect, ViewRole, WebViewError};
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{ContentProvider, SCHEME};
use crate::ipc::IPC_INIT_SCRIPT;

use super::bounds::to_wry_rect;
use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::{backend, WebViewManager};

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The shell role gets the IPC bridge and the `lookup://` protocol;
    /// the content role gets the web navigation policy and no IPC at all.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        role: ViewRole,
        window: &W,
        bounds: Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, WebViewError> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(to_wry_rect(&bounds))
            .with_visible(config.visible)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_focused(false);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), role);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), role);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), role);
        builder = Self::attach_new_window_handler(builder, Arc::clone(&events), role);

        if role == ViewRole::Shell {
            builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
            builder = Self::attach_ipc_handler(builder, Arc::clone(&events), role);
            builder = self.attach_custom_protocol(builder);
        }

        let initial_url = config.url.as_deref().unwrap_or("about:blank");
        builder = builder.with_url(initial_url);

        let webview = builder.build_as_child(window).map_err(backend)?;

        debug!(%role, url = %initial_url, "WebView created");

        Ok(WebViewHandle { webview })
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let cp = Arc::clone(&self.content_provider);
        builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = ContentProvider::request_path(&uri);

            let response = match cp.resolve(path) {
                Some((mime, data)) => wry::http::Response::builder()
                    .status(200)
                    .header("Content-Type", mime.as_ref())
                    .body(Cow::from(data.into_owned())),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    wry::http::Response::builder()
                        .status(404)
                        .body(Cow::from(b"Not Found".to_vec()))
                }
            };

            // Builder errors only arise from invalid header values.
            response.unwrap_or_else(|_| wry::http::Response::new(Cow::from(Vec::new())))
        })
    }
}
