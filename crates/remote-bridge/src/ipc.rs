//! IPC shim between a browser page running the remote and a Rust host.
//!
//! Messages flow in both directions:
//! - **Page -> Rust**: the init script listens for every outbound
//!   `CustomEvent` on `window` and forwards it through
//!   `window.ipc.postMessage(JSON.stringify({kind, payload}))`.
//! - **Rust -> Page**: the host evaluates the script from
//!   [`js_dispatch_host_action`], which fires `host-to-remote-event`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use remote_common::{BridgeError, HostAction, Payload, RemoteEvent, HOST_TO_REMOTE_CHANNEL};

use crate::signals::ReceivedSignal;

/// A relayed signal as posted by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// Outbound event name, e.g. `remote-counter-updated`.
    pub kind: String,
    /// The event's `detail`.
    #[serde(default)]
    pub payload: Payload,
}

impl IpcMessage {
    /// Parse a message from the raw string handed to the IPC handler.
    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(raw).map_err(|e| BridgeError::MalformedIpc(e.to_string()))
    }

    /// Decode into a typed signal. Kinds outside the outbound catalog are
    /// rejected.
    pub fn into_signal(self) -> Result<ReceivedSignal, BridgeError> {
        let event: RemoteEvent = self.kind.parse()?;
        ReceivedSignal::decode(event, &self.payload)
    }
}

/// Script injected into the page before the remote loads.
///
/// Relays every outbound signal to `window.ipc.postMessage`.
pub fn bridge_init_script() -> String {
    let names: Vec<&str> = RemoteEvent::ALL.iter().map(RemoteEvent::name).collect();
    let names_json = serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"(function() {{
    if (window.__remoteBridgeInstalled) {{ return; }}
    window.__remoteBridgeInstalled = true;
    {names_json}.forEach(function(kind) {{
        window.addEventListener(kind, function(event) {{
            if (!window.ipc) {{ return; }}
            window.ipc.postMessage(JSON.stringify({{
                kind: kind,
                payload: event.detail || {{}}
            }}));
        }});
    }});
}})();"#
    )
}

/// Script that dispatches a host action inside the page.
pub fn js_dispatch_host_action(action: HostAction, residual: &Payload) -> String {
    let mut detail = residual.clone();
    detail.insert("action".to_string(), Value::String(action.name().to_string()));
    let detail_json =
        serde_json::to_string(&Value::Object(detail)).unwrap_or_else(|_| "{}".to_string());
    let channel_json =
        serde_json::to_string(HOST_TO_REMOTE_CHANNEL).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.dispatchEvent(new CustomEvent({channel_json}, {{ detail: {detail_json} }}));")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{MenuItem, OutboundSignal};
    use serde_json::json;

    #[test]
    fn parse_and_decode_menu_item() {
        let raw = r#"{"kind":"add-dashboard-menu-item","payload":{"id":"a","label":"Home","path":"/","timestamp":"2024-05-01T12:00:00.000Z"}}"#;
        let msg = IpcMessage::from_json(raw).unwrap();
        assert_eq!(msg.kind, "add-dashboard-menu-item");

        let received = msg.into_signal().unwrap();
        assert_eq!(
            received.signal,
            OutboundSignal::AddMenuItem(MenuItem::new("a", "Home", "/"))
        );
        assert_eq!(received.timestamp.as_deref(), Some("2024-05-01T12:00:00.000Z"));
    }

    #[test]
    fn missing_payload_defaults_to_empty() {
        let msg = IpcMessage::from_json(r#"{"kind":"remote-theme-request"}"#).unwrap();
        assert!(msg.payload.is_empty());
        let received = msg.into_signal().unwrap();
        assert_eq!(received.signal, OutboundSignal::ThemeRequest);
        assert!(received.timestamp.is_none());
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            IpcMessage::from_json("not json"),
            Err(BridgeError::MalformedIpc(_))
        ));
        assert!(matches!(
            IpcMessage::from_json(r#"{"payload":{}}"#),
            Err(BridgeError::MalformedIpc(_))
        ));
    }

    #[test]
    fn unknown_kind_rejected() {
        let msg = IpcMessage::from_json(r#"{"kind":"eval","payload":{}}"#).unwrap();
        assert!(matches!(
            msg.into_signal(),
            Err(BridgeError::UnknownEvent(ref k)) if k == "eval"
        ));
    }

    #[test]
    fn init_script_lists_every_outbound_event() {
        let js = bridge_init_script();
        for event in RemoteEvent::ALL {
            assert!(js.contains(&format!("\"{}\"", event.name())), "{event} missing");
        }
        assert!(js.contains("window.ipc.postMessage"));
        assert!(!js.contains(HOST_TO_REMOTE_CHANNEL));
    }

    #[test]
    fn dispatch_script_carries_action() {
        let residual = json!({"theme": "dark"}).as_object().cloned().unwrap();
        let js = js_dispatch_host_action(HostAction::ThemeChanged, &residual);
        assert_eq!(
            js,
            r#"window.dispatchEvent(new CustomEvent("host-to-remote-event", { detail: {"action":"theme-changed","theme":"dark"} }));"#
        );
    }

    #[test]
    fn dispatch_script_escapes_strings() {
        let residual = json!({"note": "</script>\"x\""}).as_object().cloned().unwrap();
        let js = js_dispatch_host_action(HostAction::Refresh, &residual);
        assert!(js.contains(r#""note":"</script>\"x\"""#));
    }
}
