//! Dictionary source templates and their JSON persistence.
//!
//! A source maps a display name to a URL template containing a `{word}`
//! (case-insensitive) or `%s` placeholder. The file is a flat, pretty-printed
//! JSON object whose key order is the order shown in the toolbar selector.

mod map;
mod store;


pub use map::{default_sources, SourceMap, SourceRow};
pub use store::{load, save};
