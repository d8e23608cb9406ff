//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Main window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: f64,
    /// Initial inner height in logical pixels.
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Word Lookup".into(),
            width: 1024.0,
            height: 700.0,
        }
    }
}
