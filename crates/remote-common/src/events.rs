//! Signal catalogs shared by the remote module and its host.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BridgeError;

/// Open payload carried by every signal.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Channel name the host uses for every command it sends to the remote.
pub const HOST_TO_REMOTE_CHANNEL: &str = "host-to-remote-event";

/// Signals the remote module announces to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemoteEvent {
    #[serde(rename = "add-dashboard-menu-item")]
    AddMenuItem,
    #[serde(rename = "remote-widget-mounted")]
    WidgetMounted,
    #[serde(rename = "remote-view-ready")]
    ViewReady,
    #[serde(rename = "remote-data-updated")]
    DataUpdated,
    #[serde(rename = "remote-counter-updated")]
    CounterUpdated,
    #[serde(rename = "remote-notification")]
    Notification,
    #[serde(rename = "remote-modal-open")]
    ModalOpen,
    #[serde(rename = "remote-theme-request")]
    ThemeRequest,
}

impl RemoteEvent {
    pub const ALL: [RemoteEvent; 8] = [
        RemoteEvent::AddMenuItem,
        RemoteEvent::WidgetMounted,
        RemoteEvent::ViewReady,
        RemoteEvent::DataUpdated,
        RemoteEvent::CounterUpdated,
        RemoteEvent::Notification,
        RemoteEvent::ModalOpen,
        RemoteEvent::ThemeRequest,
    ];

    /// Wire name used on the dispatch surface.
    pub fn name(&self) -> &'static str {
        match self {
            RemoteEvent::AddMenuItem => "add-dashboard-menu-item",
            RemoteEvent::WidgetMounted => "remote-widget-mounted",
            RemoteEvent::ViewReady => "remote-view-ready",
            RemoteEvent::DataUpdated => "remote-data-updated",
            RemoteEvent::CounterUpdated => "remote-counter-updated",
            RemoteEvent::Notification => "remote-notification",
            RemoteEvent::ModalOpen => "remote-modal-open",
            RemoteEvent::ThemeRequest => "remote-theme-request",
        }
    }
}

impl fmt::Display for RemoteEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RemoteEvent {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RemoteEvent::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| BridgeError::UnknownEvent(s.to_string()))
    }
}

/// Commands the host sends down to the remote module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostAction {
    ThemeChanged,
    MenuItemAdded,
    Refresh,
    NotificationShown,
    ModalOpened,
}

impl HostAction {
    pub const ALL: [HostAction; 5] = [
        HostAction::ThemeChanged,
        HostAction::MenuItemAdded,
        HostAction::Refresh,
        HostAction::NotificationShown,
        HostAction::ModalOpened,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HostAction::ThemeChanged => "theme-changed",
            HostAction::MenuItemAdded => "menu-item-added",
            HostAction::Refresh => "refresh",
            HostAction::NotificationShown => "notification-shown",
            HostAction::ModalOpened => "modal-opened",
        }
    }
}

impl fmt::Display for HostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HostAction {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HostAction::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| BridgeError::UnknownAction(s.to_string()))
    }
}

/// A named lane on the dispatch surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Remote -> host, one lane per outbound signal kind.
    Remote(RemoteEvent),
    /// Host -> remote, a single shared lane.
    HostToRemote,
}

impl Channel {
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Remote(event) => event.name(),
            Channel::HostToRemote => HOST_TO_REMOTE_CHANNEL,
        }
    }
}

impl From<RemoteEvent> for Channel {
    fn from(event: RemoteEvent) -> Self {
        Channel::Remote(event)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
