//! Platform directory resolution.

use std::path::PathBuf;

use lookup_common::ConfigError;

pub const APP_NAME: &str = "word-lookup";

/// `<config_dir>/word-lookup`
///
/// - macOS: `~/Library/Application Support/word-lookup`
/// - Linux: `$XDG_CONFIG_HOME/word-lookup` (defaults to `~/.config/word-lookup`)
/// - Windows: `%APPDATA%\word-lookup`
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// `<data_dir>/word-lookup`
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| ConfigError::ParseError("could not determine data directory".into()))
}

/// Default location of `config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Default location of `sources.json`.
pub fn default_sources_path() -> Result<PathBuf, ConfigError> {
    Ok(data_dir()?.join("sources.json"))
}
