use lookup_common::{Rect, WindowSize};

/// Layout knobs for the content view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    /// Heights below this are treated as "toolbar not ready yet".
    pub min_toolbar_height: f64,
    /// Gap between the toolbar and the content view.
    pub padding: f64,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            min_toolbar_height: 30.0,
            padding: 8.0,
        }
    }
}

/// Rect of the content view: everything below the toolbar plus padding.
///
/// Width and height never drop below 1 so the engine always has a surface.
pub fn content_bounds(window: WindowSize, toolbar_height: f64, padding: f64) -> Rect {
    let y = (toolbar_height + padding).max(0.0);
    Rect {
        x: 0.0,
        y,
        width: window.width.max(1.0),
        height: (window.height - y).max(1.0),
    }
}
