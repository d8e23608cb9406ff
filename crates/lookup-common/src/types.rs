use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangle in logical (CSS) pixels, relative to the window's content area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Inner size of the host window in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The whole content area as a rect at the origin.
    pub fn to_rect(self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width.max(1.0),
            height: self.height.max(1.0),
        }
    }
}

/// Which of the two embedded views an event or handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewRole {
    /// Toolbar and the source manager dialog.
    Shell,
    /// The dictionary page.
    Content,
}

impl fmt::Display for ViewRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shell => write!(f, "shell"),
            Self::Content => write!(f, "content"),
        }
    }
}
