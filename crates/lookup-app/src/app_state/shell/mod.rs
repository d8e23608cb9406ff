//! Rust-side mirror of the shell page: sources, selection and search text.

mod url;

#[cfg(test)]
mod tests;

pub use url::resolve_lookup_url;

use lookup_config::sources::default_sources;
use lookup_config::{SourceMap, SourceRow};
use serde::{Deserialize, Serialize};

/// Payload of the `lookup` IPC message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupRequest {
    pub word: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// Payload of the `sources` message sent to the shell page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcesMessage {
    pub sources: Vec<SourceRow>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ShellState {
    sources: SourceMap,
    selected: Option<String>,
    search_text: String,
}

impl ShellState {
    pub fn new(sources: SourceMap) -> Self {
        let mut state = Self {
            sources: SourceMap::default(),
            selected: None,
            search_text: String::new(),
        };
        state.replace_sources(sources);
        state
    }

    pub fn sources(&self) -> &SourceMap {
        &self.sources
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Select a source by name. Unknown names are ignored.
    pub fn select(&mut self, name: &str) -> bool {
        if !self.sources.contains(name) {
            return false;
        }
        self.selected = Some(name.to_string());
        true
    }

    /// Replace the mirror wholesale.
    ///
    /// An empty map falls back to the built-in sources. The selection is
    /// kept when its name survives, else the first source is selected.
    pub fn replace_sources(&mut self, sources: SourceMap) {
        self.sources = if sources.is_empty() {
            default_sources()
        } else {
            sources
        };

        let keep = self
            .selected
            .as_deref()
            .is_some_and(|name| self.sources.contains(name));
        if !keep {
            self.selected = self.sources.first().map(|(name, _)| name.to_string());
        }
    }

    /// Resolve the URL for looking up `word`.
    ///
    /// A known `source` becomes the selection first. Blank words yield
    /// `None` and leave the state untouched.
    pub fn prepare_lookup(&mut self, word: &str, source: Option<&str>) -> Option<String> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        if let Some(source) = source {
            self.select(source);
        }
        self.search_text = word.to_string();

        let template = self.sources.get(self.selected.as_deref()?)?;
        Some(resolve_lookup_url(template, word))
    }

    pub fn sources_message(&self) -> SourcesMessage {
        SourcesMessage {
            sources: self.sources.to_rows(),
            selected: self.selected.clone(),
        }
    }
}
