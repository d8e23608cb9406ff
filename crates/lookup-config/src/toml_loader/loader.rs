//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use lookup_common::ConfigError;
use tracing::{info, warn};

use crate::paths::default_config_path;
use crate::schema::LookupConfig;
use crate::validation;

use super::template::default_config_toml;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields, then
/// validates it. Validation failures are returned as errors.
pub fn load_from_path(path: &Path) -> Result<LookupConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: LookupConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, or the platform default path when `None`.
///
/// A missing file at the default location is created from the commented
/// template and defaults are returned. A missing explicit path is an error.
pub fn load_default(path: Option<&Path>) -> Result<LookupConfig, ConfigError> {
    if let Some(path) = path {
        return load_from_path(path);
    }

    let path = default_config_path()?;
    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(&path) {
                warn!("could not write default config: {e}");
            }
            Ok(LookupConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
