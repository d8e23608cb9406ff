//! Local content serving via custom protocol.
//!
//! Registers a `lookup://` custom protocol so the shell view can load its
//! bundled HTML/JS/CSS without a local HTTP server. The shell assets are
//! compiled into the binary; an optional base directory on disk takes
//! precedence so the page can be edited without rebuilding.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Custom protocol scheme name.
pub const SCHEME: &str = "lookup";

/// Entry point of the shell page.
pub const SHELL_URL: &str = "lookup://localhost/index.html";

const SHELL_HTML: &str = include_str!("../assets/shell/index.html");
const SHELL_CSS: &str = include_str!("../assets/shell/shell.css");
const SHELL_JS: &str = include_str!("../assets/shell/shell.js");

/// Serves the shell assets.
pub struct ContentProvider {
    /// Directory checked before the embedded assets.
    base_dir: Option<PathBuf>,
    /// In-memory assets: path -> (mime, data).
    overrides: HashMap<String, (String, Vec<u8>)>,
}

impl ContentProvider {
    /// A provider serving only the embedded shell assets.
    pub fn embedded() -> Self {
        let mut provider = Self {
            base_dir: None,
            overrides: HashMap::new(),
        };
        provider.add_override("index.html", "text/html", SHELL_HTML);
        provider.add_override("shell.css", "text/css", SHELL_CSS);
        provider.add_override("shell.js", "application/javascript", SHELL_JS);
        provider
    }

    /// Embedded assets, with files under `base_dir` taking precedence.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
            ..Self::embedded()
        }
    }

    /// Register an in-memory asset.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.split(['?', '#']).next().unwrap_or("").trim_start_matches('/');
        let clean = if clean.is_empty() { "index.html" } else { clean };

        if let Some(found) = self.resolve_from_disk(clean) {
            return Some(found);
        }

        self.overrides
            .get(clean)
            .map(|(mime, data)| (Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }

    fn resolve_from_disk(&self, clean: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let base_dir = self.base_dir.as_ref()?;
        let file_path = base_dir.join(clean);

        // Prevent directory traversal (including symlink bypass).
        let canonical_base = std::fs::canonicalize(base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }

    /// Strip the scheme/host prefix from a custom-protocol request URI.
    ///
    /// WebView2 on Windows rewrites `lookup://localhost/x` to
    /// `http://lookup.localhost/x`, so both forms are accepted.
    pub fn request_path(uri: &str) -> &str {
        uri.strip_prefix("lookup://localhost/")
            .or_else(|| uri.strip_prefix("lookup://localhost"))
            .or_else(|| uri.strip_prefix("http://lookup.localhost/"))
            .or_else(|| uri.strip_prefix("lookup:///"))
            .or_else(|| uri.strip_prefix("lookup://"))
            .unwrap_or("")
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}

impl Default for ContentProvider {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
