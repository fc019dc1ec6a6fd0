//! Host bridge for a module-federation remote.
//!
//! Provides:
//! - [`HostBridge`]: remote -> host signals and host -> remote actions over
//!   an injectable [`EventTarget`]
//! - Typed payload records for every outbound signal
//! - Theme application onto a document style sink
//! - A webview IPC shim relaying browser `CustomEvent`s to Rust
//! - [`RemoteModule`], the composition root tying config, bridge and style

pub mod host;
pub mod host_bridge;
pub mod ipc;
pub mod module;
pub mod signals;
pub mod theme_bridge;

pub use host::{dispatch_host_action, listen_to_remote_events};
pub use host_bridge::HostBridge;
pub use ipc::IpcMessage;
pub use module::RemoteModule;
pub use remote_common::{Channel, EventTarget, HostAction, Payload, RemoteEvent, Subscription};
pub use signals::{
    ComponentInfo, CounterUpdate, DataUpdate, MenuItem, ModalConfig, ModalSize, Notification,
    NotificationKind, OutboundSignal, ReceivedSignal, ThemeChange,
};
pub use theme_bridge::{DocumentStyle, ScriptStyle, StyleMap, ThemeVars};
