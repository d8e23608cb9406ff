//! Window title management: reflects the page shown in the content view.

use super::core::LookupApp;

/// Window title for a content page title.
pub(super) fn window_title(app_title: &str, page_title: &str) -> String {
    let page_title = page_title.trim();
    if page_title.is_empty() {
        app_title.to_string()
    } else {
        format!("{page_title} - {app_title}")
    }
}

impl LookupApp {
    pub(super) fn update_window_title(&self, page_title: &str) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&window_title(&self.config.window.title, page_title));
    }
}
