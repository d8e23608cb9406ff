//! Embedded content view settings.

use serde::{Deserialize, Serialize};

/// Layout and behavior of the dictionary view below the toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Toolbar heights below this are treated as "styles not applied yet"
    /// (valid range: 1-400).
    pub min_toolbar_height: f64,
    /// Gap between the toolbar and the content view (valid range: 0-100).
    pub padding: f64,
    pub user_agent: Option<String>,
    /// Enable web inspector (always on in debug builds).
    pub devtools: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_toolbar_height: 30.0,
            padding: 8.0,
            user_agent: None,
            devtools: cfg!(debug_assertions),
        }
    }
}
