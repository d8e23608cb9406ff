//! Configuration schema types for word-lookup.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod channel;
mod system;
mod view;
mod window;

pub use channel::*;
pub use system::*;
pub use view::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[derive(Default)]
pub struct LookupConfig {
    pub window: WindowConfig,
    pub channel: ChannelConfig,
    pub view: ViewConfig,
    pub sources: SourcesConfig,
    pub logging: LoggingConfig,
}
