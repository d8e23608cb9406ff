//! Persisting, reloading and publishing the source templates.

use lookup_config::{sources, SourceMap};

use super::core::LookupApp;

impl LookupApp {
    /// Push the current sources and selection to the shell page.
    pub(super) fn send_sources(&self) {
        match serde_json::to_value(self.shell.sources_message()) {
            Ok(payload) => self.send_to_shell("sources", &payload),
            Err(e) => tracing::warn!(error = %e, "failed to serialize sources"),
        }
    }

    /// Replace the sources with the dialog's rows, persist and republish.
    pub(super) fn save_sources(&mut self, map: SourceMap) {
        self.shell.replace_sources(map);
        match sources::save(&self.sources_path, self.shell.sources()) {
            Ok(()) => tracing::info!(
                path = %self.sources_path.display(),
                count = self.shell.sources().len(),
                "sources saved"
            ),
            Err(e) => tracing::warn!(error = %e, "failed to save sources"),
        }
        self.send_sources();
    }

    /// Re-read the sources file from disk and republish.
    pub(super) fn reload_sources(&mut self) {
        self.shell.replace_sources(sources::load(&self.sources_path));
        tracing::info!(count = self.shell.sources().len(), "sources reloaded");
        self.send_sources();
    }
}

#[cfg(test)]
mod tests {
    use lookup_config::sources::default_sources;
    use lookup_config::{LookupConfig, SourceRow};

    use super::*;

    fn app_with_sources(dir: &tempfile::TempDir) -> LookupApp {
        LookupApp::new(LookupConfig::default(), dir.path().join("sources.json"))
    }

    #[test]
    fn missing_file_starts_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with_sources(&dir);
        assert_eq!(app.shell.sources(), &default_sources());
        assert_eq!(app.shell.selected(), Some("Google"));
    }

    #[test]
    fn save_persists_and_reload_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_sources(&dir);

        app.save_sources(SourceMap::from_rows([
            SourceRow::new("Wiktionary", "https://en.wiktionary.org/wiki/{word}"),
            SourceRow::new("Collins", "https://www.collinsdictionary.com/dictionary/english/%s"),
        ]));
        assert_eq!(app.shell.selected(), Some("Wiktionary"));

        let on_disk = sources::load(&dir.path().join("sources.json"));
        assert_eq!(on_disk.names().collect::<Vec<_>>(), vec!["Wiktionary", "Collins"]);

        // Edit the file behind the app's back, then reload.
        std::fs::write(
            dir.path().join("sources.json"),
            r#"{"Collins": "https://www.collinsdictionary.com/dictionary/english/{word}"}"#,
        )
        .unwrap();
        app.reload_sources();
        assert_eq!(app.shell.sources().len(), 1);
        assert_eq!(app.shell.selected(), Some("Collins"));
    }

    #[test]
    fn saving_nothing_persists_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_sources(&dir);
        app.save_sources(SourceMap::default());

        assert_eq!(app.shell.sources(), &default_sources());
        assert_eq!(sources::load(&dir.path().join("sources.json")), default_sources());
    }

    #[test]
    fn lookup_without_views_only_updates_shell_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_sources(&dir);
        app.lookup("  petrichor ", Some("Cambridge"));
        assert_eq!(app.shell.search_text(), "petrichor");
        assert_eq!(app.shell.selected(), Some("Cambridge"));
    }
}
