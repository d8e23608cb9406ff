//! Whole-file JSON load/save for [`SourceMap`].

use std::path::Path;

use lookup_common::SourceError;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::map::{default_sources, SourceMap};

/// Load sources from `path`.
///
/// Never fails: a missing, unreadable or malformed file, or one that yields
/// no usable entries, produces [`default_sources`]. Non-string values and
/// blank entries are skipped.
pub fn load(path: &Path) -> SourceMap {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "sources file unreadable, using defaults");
            return default_sources();
        }
    };

    let object = match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(object)) => object,
        Ok(other) => {
            warn!(
                path = %path.display(),
                kind = json_kind(&other),
                "sources file is not a JSON object, using defaults"
            );
            return default_sources();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to parse sources file, using defaults");
            return default_sources();
        }
    };

    let mut map = SourceMap::default();
    for (name, value) in object {
        match value {
            Value::String(template) => {
                if !map.insert(name.clone(), template) {
                    debug!(name = %name, "skipping blank source entry");
                }
            }
            other => {
                warn!(name = %name, kind = json_kind(&other), "skipping non-string source template");
            }
        }
    }

    if map.is_empty() {
        warn!(path = %path.display(), "sources file has no usable entries, using defaults");
        return default_sources();
    }

    info!(path = %path.display(), count = map.len(), "loaded sources");
    map
}

/// Overwrite `path` with `sources` as pretty-printed JSON.
///
/// Parent directories are created as needed. There is no temp-file/rename
/// step; a crash mid-write can leave a truncated file, which `load` then
/// treats as corrupt.
pub fn save(path: &Path, sources: &SourceMap) -> Result<(), SourceError> {
    let mut json = serde_json::to_string_pretty(sources)?;
    json.push('\n');

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SourceError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, json).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), count = sources.len(), "saved sources");
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
