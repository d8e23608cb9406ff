pub mod errors;
pub mod types;

pub use errors::{
    ChannelError, ConfigError, LookupError, NavigationError, SourceError, WebViewError,
};
pub use types::{Rect, ViewRole, WindowSize};

pub type Result<T> = std::result::Result<T, LookupError>;
