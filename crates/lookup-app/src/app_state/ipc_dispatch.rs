//! IPC message validation and dispatch from the shell view.

use lookup_config::{SourceMap, SourceRow};
use lookup_webview::{IpcMessage, IpcPayload};

use super::core::LookupApp;
use super::shell::LookupRequest;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from the shell page.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "toolbar_height",
    "shell_ready",
    "select_source",
    "lookup",
    "request_sources",
    "save_sources",
    "manager_opened",
    "manager_closed",
    "reload_sources",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl LookupApp {
    /// Handle a single IPC message from the shell view.
    pub(super) fn handle_ipc_message(&mut self, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
            return;
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        tracing::debug!(kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "toolbar_height" => self.handle_toolbar_height(&msg.payload),
            "shell_ready" | "request_sources" => self.send_sources(),
            "select_source" => match msg.payload.as_str() {
                Some(name) => {
                    if !self.shell.select(name) {
                        tracing::warn!(name = %name, "unknown source selected, ignored");
                    }
                }
                None => tracing::warn!("select_source without a name"),
            },
            "lookup" => match msg.payload.decode::<LookupRequest>() {
                Some(req) => self.lookup(&req.word, req.source.as_deref()),
                None => tracing::warn!("malformed lookup payload"),
            },
            "save_sources" => match msg.payload.decode::<Vec<SourceRow>>() {
                Some(rows) => self.save_sources(SourceMap::from_rows(rows)),
                None => tracing::warn!("malformed save_sources payload"),
            },
            "manager_opened" => {
                if let Some(content) = self.content.as_mut() {
                    content.detach_for_modal();
                }
            }
            "manager_closed" => {
                if let Some(content) = self.content.as_mut() {
                    content.modal_closed();
                }
            }
            "reload_sources" => self.reload_sources(),
            _ => {
                // Shouldn't happen, allowlist checked above
                tracing::warn!(kind = %msg.kind, "unhandled IPC kind");
            }
        }
    }

    fn handle_toolbar_height(&mut self, payload: &IpcPayload) {
        let Some(height) = payload.as_f64() else {
            tracing::warn!("toolbar_height without a number");
            return;
        };
        let Some(content) = self.content.as_mut() else {
            return;
        };
        let report = content.report_toolbar_height(height);
        if let lookup_webview::HeightReport::Applied {
            released_word: Some(word),
        } = report
        {
            tracing::info!(word = %word, "delivering word queued before the shell was ready");
            self.deliver_word(&word);
        }
    }

    /// Look `word` up with `source` (or the selected source).
    pub(super) fn lookup(&mut self, word: &str, source: Option<&str>) {
        let Some(url) = self.shell.prepare_lookup(word, source) else {
            tracing::debug!("blank lookup ignored");
            return;
        };
        let Some(content) = self.content.as_mut() else {
            return;
        };
        match content.load(&url) {
            Ok(outcome) => tracing::info!(url = %url, ?outcome, "lookup"),
            Err(e) => tracing::warn!(url = %url, error = %e, "lookup rejected"),
        }
    }

    /// Send a message to the shell page.
    pub(super) fn send_to_shell(&self, kind: &str, payload: &serde_json::Value) {
        let Some(shell) = &self.shell_view else {
            return;
        };
        if let Err(e) = shell.send_ipc(kind, payload) {
            tracing::warn!(kind, error = %e, "failed to send message to shell");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipc_kind_allowed_valid() {
        for kind in ALLOWED_IPC_KINDS {
            assert!(is_ipc_kind_allowed(kind));
        }
    }

    #[test]
    fn ipc_kind_rejected_unknown() {
        assert!(!is_ipc_kind_allowed("eval"));
        assert!(!is_ipc_kind_allowed(""));
        assert!(!is_ipc_kind_allowed("lookup_word"));
        assert!(!is_ipc_kind_allowed("LOOKUP")); // case-sensitive
    }

    #[test]
    fn ipc_kind_rejected_injection_attempts() {
        assert!(!is_ipc_kind_allowed("lookup\0"));
        assert!(!is_ipc_kind_allowed("lookup; rm -rf /"));
        assert!(!is_ipc_kind_allowed("<script>alert(1)</script>"));
    }

    #[test]
    fn save_rows_decode_from_payload() {
        let msg = IpcMessage::from_json(
            r#"{"kind":"save_sources","payload":[{"name":"Wiki","template":"https://en.wiktionary.org/wiki/{word}"}]}"#,
        )
        .unwrap();
        let rows: Vec<SourceRow> = msg.payload.decode().unwrap();
        let map = SourceMap::from_rows(rows);
        assert_eq!(map.get("Wiki"), Some("https://en.wiktionary.org/wiki/{word}"));
    }

    #[test]
    fn reload_sources_message_rereads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.json");
        let mut app = LookupApp::new(lookup_config::LookupConfig::default(), path.clone());

        std::fs::write(&path, r#"{"Collins": "https://www.collinsdictionary.com/dictionary/english/{word}"}"#)
            .unwrap();
        app.handle_ipc_message(r#"{"kind":"reload_sources","payload":null}"#);

        assert_eq!(app.shell.sources().len(), 1);
        assert_eq!(app.shell.selected(), Some("Collins"));
    }

    #[test]
    fn unknown_kind_leaves_sources_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.json");
        let mut app = LookupApp::new(lookup_config::LookupConfig::default(), path.clone());

        std::fs::write(&path, r#"{"Collins": "https://example.com/{word}"}"#).unwrap();
        app.handle_ipc_message(r#"{"kind":"reload","payload":null}"#);

        assert_eq!(app.shell.sources().len(), 2);
    }
}
