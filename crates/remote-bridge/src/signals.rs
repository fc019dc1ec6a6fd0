//! Typed payloads for every signal that crosses the host boundary.
//!
//! Each outbound signal kind has its own record; [`OutboundSignal`] is the
//! tagged union over them. Optional fields are omitted from the wire
//! payload when absent rather than sent as `null`.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use remote_common::{BridgeError, HostAction, Payload, RemoteEvent};

use crate::theme_bridge::ThemeVars;

// =============================================================================
// PAYLOAD RECORDS
// =============================================================================

/// Entry the remote asks the host to add to its dashboard menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    /// Route the host navigates to.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: path.into(),
            icon: None,
            order: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

/// Identity of a mounted widget or a ready view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub id: String,
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataUpdate {
    #[serde(default)]
    pub metrics: Value,
}

/// Counter value as any JSON number, so a fractional value from a page
/// decodes instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterUpdate {
    pub value: Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A toast the host should display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Display time in milliseconds. `None` leaves the choice to the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl Notification {
    /// Display time, falling back to the receiver's default when unset.
    pub fn effective_duration(&self, default_ms: u64) -> Duration {
        Duration::from_millis(self.duration.unwrap_or(default_ms))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    Sm,
    Md,
    Lg,
    Xl,
}

/// Modal dialog the host should open. Every field is optional and
/// forwarded as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTML body of the modal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ModalSize>,
    /// When true, Escape and outside clicks do not close the modal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_footer: Option<bool>,
}

// =============================================================================
// OUTBOUND UNION
// =============================================================================

/// Every remote -> host signal with its typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundSignal {
    AddMenuItem(MenuItem),
    WidgetMounted(ComponentInfo),
    ViewReady(ComponentInfo),
    DataUpdated(DataUpdate),
    CounterUpdated(CounterUpdate),
    Notification(Notification),
    ModalOpen(ModalConfig),
    ThemeRequest,
}

impl OutboundSignal {
    pub fn event(&self) -> RemoteEvent {
        match self {
            OutboundSignal::AddMenuItem(_) => RemoteEvent::AddMenuItem,
            OutboundSignal::WidgetMounted(_) => RemoteEvent::WidgetMounted,
            OutboundSignal::ViewReady(_) => RemoteEvent::ViewReady,
            OutboundSignal::DataUpdated(_) => RemoteEvent::DataUpdated,
            OutboundSignal::CounterUpdated(_) => RemoteEvent::CounterUpdated,
            OutboundSignal::Notification(_) => RemoteEvent::Notification,
            OutboundSignal::ModalOpen(_) => RemoteEvent::ModalOpen,
            OutboundSignal::ThemeRequest => RemoteEvent::ThemeRequest,
        }
    }

    /// Wire payload, without the timestamp.
    pub fn to_payload(&self) -> Payload {
        match self {
            OutboundSignal::AddMenuItem(item) => to_object(item),
            OutboundSignal::WidgetMounted(info) | OutboundSignal::ViewReady(info) => {
                to_object(info)
            }
            OutboundSignal::DataUpdated(update) => to_object(update),
            OutboundSignal::CounterUpdated(update) => to_object(update),
            OutboundSignal::Notification(notification) => to_object(notification),
            OutboundSignal::ModalOpen(config) => to_object(config),
            OutboundSignal::ThemeRequest => Payload::new(),
        }
    }

    /// Rebuild a typed signal from a wire payload. Unknown keys, including
    /// `timestamp`, are ignored.
    pub fn decode(event: RemoteEvent, payload: &Payload) -> Result<Self, BridgeError> {
        Ok(match event {
            RemoteEvent::AddMenuItem => OutboundSignal::AddMenuItem(from_object(event, payload)?),
            RemoteEvent::WidgetMounted => {
                OutboundSignal::WidgetMounted(from_object(event, payload)?)
            }
            RemoteEvent::ViewReady => OutboundSignal::ViewReady(from_object(event, payload)?),
            RemoteEvent::DataUpdated => OutboundSignal::DataUpdated(from_object(event, payload)?),
            RemoteEvent::CounterUpdated => {
                OutboundSignal::CounterUpdated(from_object(event, payload)?)
            }
            RemoteEvent::Notification => {
                OutboundSignal::Notification(from_object(event, payload)?)
            }
            RemoteEvent::ModalOpen => OutboundSignal::ModalOpen(from_object(event, payload)?),
            RemoteEvent::ThemeRequest => OutboundSignal::ThemeRequest,
        })
    }
}

/// An outbound signal as observed by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedSignal {
    pub signal: OutboundSignal,
    /// ISO-8601 send time; absent if the sender did not stamp it.
    pub timestamp: Option<String>,
}

impl ReceivedSignal {
    pub fn decode(event: RemoteEvent, payload: &Payload) -> Result<Self, BridgeError> {
        let signal = OutboundSignal::decode(event, payload)?;
        let timestamp = payload
            .get("timestamp")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(Self { signal, timestamp })
    }
}

// =============================================================================
// INBOUND RECORDS
// =============================================================================

/// Residual payload of a `theme-changed` host action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeChange {
    pub theme: String,
    #[serde(
        default,
        rename = "themeVars",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_vars: Option<ThemeVars>,
}

impl ThemeChange {
    pub fn from_payload(payload: &Payload) -> Result<Self, BridgeError> {
        if !payload.contains_key("theme") {
            return Err(BridgeError::MissingField("theme"));
        }
        serde_json::from_value(Value::Object(payload.clone())).map_err(|source| {
            BridgeError::Payload {
                event: HostAction::ThemeChanged.name().to_string(),
                source,
            }
        })
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn to_object<T: Serialize>(value: &T) -> Payload {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::warn!(value = %other, "signal payload did not serialize to an object");
            Payload::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "signal payload failed to serialize");
            Payload::new()
        }
    }
}

fn from_object<T: DeserializeOwned>(event: RemoteEvent, payload: &Payload) -> Result<T, BridgeError> {
    serde_json::from_value(Value::Object(payload.clone())).map_err(|source| BridgeError::Payload {
        event: event.name().to_string(),
        source,
    })
}

// =============================================================================
// TESTS
// =============================================================================
