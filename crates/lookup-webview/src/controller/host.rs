use lookup_common::{Rect, WebViewError};

/// Backend that owns the actual content view.
///
/// The controller is the only caller; it never calls anything but
/// `create` while no view exists.
pub trait ViewHost {
    /// Create the view hidden at `bounds`, loading `url` if given.
    fn create(&mut self, bounds: Rect, url: Option<&str>) -> Result<(), WebViewError>;

    /// Discard the view. No-op when none exists.
    fn destroy(&mut self);

    fn navigate(&mut self, url: &str) -> Result<(), WebViewError>;

    fn set_visible(&mut self, visible: bool) -> Result<(), WebViewError>;

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), WebViewError>;
}
