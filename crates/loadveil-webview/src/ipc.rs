//! IPC bridge that reports load progress from inside the page.
//!
//! `wry` exposes page-load start/finish but no progress ratio and no commit
//! notification. An initialization script, which runs as each new main-frame
//! document is created, fills that gap:
//! - **JS -> Rust**: `window.ipc.postMessage(JSON.stringify({kind, payload}))`
//!   arrives at the `ipc_handler` registered on the WebView.
//! - `commit` is sent once per document, `progress` on every `readyState`
//!   change.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::SurfaceEvent;

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
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Number(f64),
    Text(String),
    #[default]
    None,
    Json(serde_json::Value),
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn progress(ratio: f64) -> Self {
        Self {
            kind: "progress".into(),
            payload: IpcPayload::Number(ratio),
        }
    }

    /// Translate into a surface event. Unknown kinds and malformed
    /// payloads yield `None`.
    pub fn into_surface_event(self) -> Option<SurfaceEvent> {
        match (self.kind.as_str(), self.payload) {
            ("commit", _) => Some(SurfaceEvent::Committed),
            ("progress", IpcPayload::Number(ratio)) => Some(SurfaceEvent::Progress(ratio)),
            (kind, payload) => {
                debug!(kind, ?payload, "ignoring IPC message");
                None
            }
        }
    }
}

/// JavaScript snippet that reports commit and progress over IPC.
/// Injected as an initialization script into the loading WebView.
pub const PROGRESS_INIT_SCRIPT: &str = r#"
(function() {
    if (window.top !== window.self) {
        return;
    }
    var post = function(kind, payload) {
        window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload }));
    };
    var stages = { loading: 0.1, interactive: 0.5, complete: 1.0 };
    var report = function() {
        var ratio = stages[document.readyState];
        if (ratio !== undefined) {
            post('progress', ratio);
        }
    };
    post('commit', null);
    report();
    document.addEventListener('readystatechange', report);
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_progress_message() {
        let msg = IpcMessage::from_json(r#"{"kind":"progress","payload":0.5}"#).unwrap();
        assert_eq!(msg.into_surface_event(), Some(SurfaceEvent::Progress(0.5)));
    }

    #[test]
    fn parses_commit_with_null_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"commit","payload":null}"#).unwrap();
        assert_eq!(msg.into_surface_event(), Some(SurfaceEvent::Committed));
    }

    #[test]
    fn missing_payload_defaults_to_none() {
        let msg = IpcMessage::from_json(r#"{"kind":"commit"}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::None));
    }

    #[test]
    fn progress_with_text_payload_is_ignored() {
        let msg = IpcMessage::from_json(r#"{"kind":"progress","payload":"half"}"#).unwrap();
        assert_eq!(msg.into_surface_event(), None);
    }

    #[test]
    fn unknown_kind_is_ignored() {
        let msg = IpcMessage::from_json(r#"{"kind":"telemetry","payload":{"a":1}}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::Json(_)));
        assert_eq!(msg.into_surface_event(), None);
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn progress_constructor_round_trips() {
        let raw = serde_json::to_string(&IpcMessage::progress(0.1)).unwrap();
        let msg = IpcMessage::from_json(&raw).unwrap();
        assert_eq!(msg.into_surface_event(), Some(SurfaceEvent::Progress(0.1)));
    }

    #[test]
    fn init_script_reports_commit_and_progress() {
        assert!(PROGRESS_INIT_SCRIPT.contains("post('commit', null)"));
        assert!(PROGRESS_INIT_SCRIPT.contains("readystatechange"));
        assert!(PROGRESS_INIT_SCRIPT.contains("window.ipc.postMessage"));
    }
}
