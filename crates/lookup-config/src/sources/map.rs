use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One editable row of the "Manage sources" dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRow {
    pub name: String,
    pub template: String,
}

impl SourceRow {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }
}

/// Ordered name -> URL template map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceMap {
    entries: IndexMap<String, String>,
}

/// The two built-in sources used whenever the file is missing or unusable.
pub fn default_sources() -> SourceMap {
    let mut map = SourceMap::default();
    map.insert("Google", "https://www.google.com/search?q=define+{word}");
    map.insert(
        "Cambridge",
        "https://dictionary.cambridge.org/dictionary/english/{word}",
    );
    map
}

impl SourceMap {
    /// Build a map from dialog rows.
    ///
    /// Both fields are trimmed and rows with a blank name or template are
    /// dropped. A repeated name keeps its first position and its last template.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = SourceRow>,
    {
        let mut map = Self::default();
        for row in rows {
            map.insert(row.name.trim(), row.template.trim());
        }
        map
    }

    /// Insert or replace an entry. Blank names or templates are ignored.
    pub fn insert(&mut self, name: impl Into<String>, template: impl Into<String>) -> bool {
        let name = name.into();
        let template = template.into();
        if name.trim().is_empty() || template.trim().is_empty() {
            return false;
        }
        self.entries.insert(name, template);
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// First source in display order.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.entries
            .first()
            .map(|(name, template)| (name.as_str(), template.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, template)| (name.as_str(), template.as_str()))
    }

    /// Rows in display order, as sent to the dialog.
    pub fn to_rows(&self) -> Vec<SourceRow> {
        self.iter()
            .map(|(name, template)| SourceRow::new(name, template))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
