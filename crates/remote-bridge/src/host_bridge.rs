//! Remote-side bridge to the host application.
//!
//! Outbound signals are stamped with a `timestamp` and dispatched on the
//! shared [`EventTarget`]; inbound host actions arrive on the
//! `host-to-remote-event` channel and are handed to callbacks as
//! `(action, residual payload)`. Everything runs synchronously inside the
//! dispatch call.

use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, warn};

use remote_common::{
    Channel, Clock, EventTarget, HostAction, Payload, RemoteEvent, Subscription, SystemClock,
};

use crate::signals::{
    ComponentInfo, CounterUpdate, DataUpdate, MenuItem, ModalConfig, Notification,
    NotificationKind, OutboundSignal,
};
use crate::theme_bridge::{DocumentStyle, ThemeVars};

/// Broadcast helper between this remote module and its host.
///
/// Holds no state of its own beyond handles to the dispatch surface, the
/// document style and the clock. Clones share all three.
#[derive(Clone)]
pub struct HostBridge {
    target: EventTarget,
    style: Rc<dyn DocumentStyle>,
    clock: Rc<dyn Clock>,
}

impl HostBridge {
    pub fn new(target: EventTarget, style: Rc<dyn DocumentStyle>) -> Self {
        Self {
            target,
            style,
            clock: Rc::new(SystemClock),
        }
    }

    /// Replace the clock used for `timestamp`.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    pub fn target(&self) -> &EventTarget {
        &self.target
    }

    // -------------------------------------------------------------------------
    // Send / listen
    // -------------------------------------------------------------------------

    /// Broadcast `event` with `data` plus the current `timestamp`.
    ///
    /// A caller-supplied `timestamp` key is overwritten. Fire-and-forget:
    /// nothing is reported when no listener is attached.
    pub fn send_event_to_host(&self, event: RemoteEvent, mut data: Payload) {
        data.insert("timestamp".to_string(), Value::String(self.clock.now_iso()));
        let listeners = self.target.dispatch(Channel::Remote(event), data);
        debug!(event = %event, listeners, "signal sent to host");
    }

    /// Broadcast a typed signal.
    pub fn send(&self, signal: &OutboundSignal) {
        self.send_event_to_host(signal.event(), signal.to_payload());
    }

    /// Attach `callback` to host actions.
    ///
    /// Each dispatch on the host channel is split into its `action` and the
    /// remaining fields. The callback runs for every dispatch; an `action`
    /// that is missing, not a string or not in the catalog arrives as `None`.
    pub fn listen_to_host_events<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<HostAction>, Payload) + 'static,
    {
        self.target.add_listener(Channel::HostToRemote, move |event| {
            let mut data = event.detail.clone();
            let action = match data.remove("action") {
                Some(Value::String(name)) => match name.parse::<HostAction>() {
                    Ok(action) => Some(action),
                    Err(e) => {
                        warn!(error = %e, "host event with unknown action");
                        None
                    }
                },
                Some(other) => {
                    warn!(action = %other, "host event action is not a string");
                    None
                }
                None => {
                    warn!("host event without action");
                    None
                }
            };
            debug!(action = ?action, "host event received");
            callback(action, data);
        })
    }

    // -------------------------------------------------------------------------
    // Convenience wrappers
    // -------------------------------------------------------------------------

    pub fn add_menu_item(&self, item: MenuItem) {
        self.send(&OutboundSignal::AddMenuItem(item));
    }

    pub fn notify_widget_mounted(&self, id: &str, name: &str, version: &str) {
        self.send(&OutboundSignal::WidgetMounted(component(id, name, version)));
    }

    pub fn notify_view_ready(&self, id: &str, name: &str, version: &str) {
        self.send(&OutboundSignal::ViewReady(component(id, name, version)));
    }

    /// Publish `metrics` under the `metrics` key.
    pub fn update_data(&self, metrics: Value) {
        self.send(&OutboundSignal::DataUpdated(DataUpdate { metrics }));
    }

    pub fn update_counter(&self, value: i64) {
        self.send(&OutboundSignal::CounterUpdated(CounterUpdate {
            value: value.into(),
        }));
    }

    /// Ask the host to show a notification. An absent `duration` is sent as
    /// absent; the host applies its default.
    pub fn show_notification(
        &self,
        kind: NotificationKind,
        message: &str,
        title: Option<&str>,
        duration: Option<u64>,
    ) {
        self.send(&OutboundSignal::Notification(Notification {
            kind,
            message: message.to_string(),
            title: title.map(str::to_string),
            duration,
        }));
    }

    pub fn open_modal(&self, config: ModalConfig) {
        self.send(&OutboundSignal::ModalOpen(config));
    }

    pub fn request_theme(&self) {
        self.send(&OutboundSignal::ThemeRequest);
    }

    // -------------------------------------------------------------------------
    // Theme
    // -------------------------------------------------------------------------

    /// Write each theme variable onto the document style.
    ///
    /// Nothing is validated and no theme name is retained; `None` is a no-op.
    pub fn apply_theme(&self, theme: &str, theme_vars: Option<&ThemeVars>) {
        write_theme(self.style.as_ref(), theme, theme_vars);
    }

    pub(crate) fn style(&self) -> Rc<dyn DocumentStyle> {
        Rc::clone(&self.style)
    }
}

/// Set every variable in `theme_vars` on `style`.
pub(crate) fn write_theme(style: &dyn DocumentStyle, theme: &str, theme_vars: Option<&ThemeVars>) {
    let Some(vars) = theme_vars else {
        debug!(theme, "theme applied without variables");
        return;
    };
    for (name, value) in vars {
        style.set_property(name, value);
    }
    debug!(theme, vars = vars.len(), "theme applied");
}

impl std::fmt::Debug for HostBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostBridge")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

fn component(id: &str, name: &str, version: &str) -> ComponentInfo {
    ComponentInfo {
        id: id.to_string(),
        name: name.to_string(),
        version: version.to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
