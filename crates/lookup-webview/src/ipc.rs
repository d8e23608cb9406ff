//! IPC protocol between Rust and the shell page.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the page calls `window.lookup.ipc.send(kind, payload)`,
//!   which posts `{"kind": ..., "payload": ...}` to the `ipc_handler`.
//! - **Rust -> JS**: Rust evaluates `window.lookup.ipc._dispatch(kind, payload)`
//!   in the page.
//!
//! Only the shell view gets the bridge; dictionary pages never can post IPC.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload.
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Number(f64),
    Json(serde_json::Value),
}

impl Default for IpcPayload {
    fn default() -> Self {
        Self::Json(serde_json::Value::Null)
    }
}

impl IpcPayload {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Json(_) => None,
        }
    }

    /// Decode a structured payload into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        let value = serde_json::to_value(self).ok()?;
        serde_json::from_value(value).ok()
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript snippet that sets up the IPC bridge in the shell page.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.lookup = window.lookup || {};
    window.lookup.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the page's IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.lookup.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"toolbar_height","payload":52}"#).unwrap();
        assert_eq!(msg.kind, "toolbar_height");
        assert_eq!(msg.payload.as_f64(), Some(52.0));
    }

    #[test]
    fn parses_text_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"select_source","payload":"Google"}"#).unwrap();
        assert_eq!(msg.payload.as_str(), Some("Google"));
        assert_eq!(msg.payload.as_f64(), None);
    }

    #[test]
    fn missing_or_null_payload_is_null_json() {
        let msg = IpcMessage::from_json(r#"{"kind":"shell_ready"}"#).unwrap();
        assert_eq!(msg.payload, IpcPayload::Json(serde_json::Value::Null));
        let msg = IpcMessage::from_json(r#"{"kind":"shell_ready","payload":null}"#).unwrap();
        assert_eq!(msg.payload, IpcPayload::Json(serde_json::Value::Null));
    }

    #[test]
    fn decodes_structured_payload() {
        #[derive(Deserialize)]
        struct Lookup {
            word: String,
            source: Option<String>,
        }

        let msg = IpcMessage::from_json(
            r#"{"kind":"lookup","payload":{"word":"serendipity","source":"Cambridge"}}"#,
        )
        .unwrap();
        let lookup: Lookup = msg.payload.decode().unwrap();
        assert_eq!(lookup.word, "serendipity");
        assert_eq!(lookup.source.as_deref(), Some("Cambridge"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn dispatch_script_escapes_strings() {
        let script = js_dispatch_message("lookup_word", &serde_json::json!("it's \"quoted\""));
        assert_eq!(
            script,
            r#"window.lookup.ipc._dispatch("lookup_word", "it's \"quoted\"");"#
        );
    }
}
