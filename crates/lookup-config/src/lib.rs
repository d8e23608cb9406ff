//! word-lookup configuration and source persistence.
//!
//! Provides the TOML application config (window, command channel, view
//! layout, logging) and the JSON-backed dictionary source templates. All
//! config sections use defaults so partial files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lookup_config::{load_config, sources};
//!
//! let config = load_config(None).expect("failed to load config");
//! let path = lookup_config::sources_path(&config).expect("no data dir");
//! let map = sources::load(&path);
//! println!("{} sources", map.len());
//! ```

pub mod paths;
pub mod schema;
pub mod sources;
pub mod toml_loader;
pub mod validation;

pub use schema::{LookupConfig, CONFIG_SCHEMA_VERSION};
pub use sources::{SourceMap, SourceRow};

use std::path::{Path, PathBuf};

use lookup_common::ConfigError;

/// Load config from an explicit path or the platform default location.
pub fn load_config(path: Option<&Path>) -> Result<LookupConfig, ConfigError> {
    toml_loader::load_default(path)
}

/// Resolve the sources file: the configured override, else the default.
pub fn sources_path(config: &LookupConfig) -> Result<PathBuf, ConfigError> {
    match &config.sources.file {
        Some(path) => Ok(path.clone()),
        None => paths::default_sources_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn sources_path_prefers_override() {
        let mut config = LookupConfig::default();
        config.sources.file = Some(PathBuf::from("/srv/lookup/sources.json"));
        assert_eq!(
            sources_path(&config).unwrap(),
            PathBuf::from("/srv/lookup/sources.json")
        );
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = LookupConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: LookupConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
