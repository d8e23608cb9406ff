//! Sources file location and logging settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the dictionary source templates are persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SourcesConfig {
    /// Overrides the default `<data_dir>/word-lookup/sources.json`.
    pub file: Option<PathBuf>,
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The matching `tracing` filter directive name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Crates whose spans and events the binaries log.
pub const LOG_TARGETS: &[&str] = &[
    "lookup_app",
    "lookup_channel",
    "lookup_config",
    "lookup_trigger",
    "lookup_webview",
];

/// Expand a level name into `EnvFilter` directives for this workspace.
///
/// Anything that is not a bare level name (for example
/// `lookup_channel=trace`) is passed through untouched.
pub fn log_directives(level: &str) -> String {
    let level = level.trim();
    let is_level = ["trace", "debug", "info", "warn", "error"]
        .iter()
        .any(|l| l.eq_ignore_ascii_case(level));
    if !is_level {
        return level.to_string();
    }
    let level = level.to_ascii_lowercase();
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_expands_to_every_crate() {
        let directives = log_directives("DEBUG");
        assert!(directives.contains("lookup_app=debug"));
        assert!(directives.contains("lookup_channel=debug"));
        assert_eq!(directives.split(',').count(), LOG_TARGETS.len());
    }

    #[test]
    fn custom_directive_passes_through() {
        assert_eq!(log_directives(" lookup_channel=trace "), "lookup_channel=trace");
    }

    #[test]
    fn log_level_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: LogLevel,
        }
        let w: Wrapper = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(w.level, LogLevel::Warn);
        assert_eq!(w.level.as_str(), "warn");
    }
}
