/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load; `about:blank` when unset.
    pub url: Option<String>,
    /// Whether the view is visible right after creation.
    pub visible: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            visible: true,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
        }
    }
}

impl WebViewConfig {
    /// Devtools and user agent from the application config.
    pub fn from_view_settings(devtools: bool, user_agent: Option<String>) -> Self {
        Self {
            devtools: devtools || cfg!(debug_assertions),
            user_agent,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_settings_leave_url_unset() {
        let config = WebViewConfig::from_view_settings(true, Some("lookup-test".into()));
        assert!(config.url.is_none());
        assert!(config.devtools);
        assert!(config.visible);
        assert_eq!(config.user_agent.as_deref(), Some("lookup-test"));
    }
}
