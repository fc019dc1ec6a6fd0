//! Composition root for the remote module.
//!
//! Owns the bridge and the parts of the config it acts on. The dispatch
//! surface and style sink are injected so a host (or a test) decides what
//! they are.

use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use remote_common::{EventTarget, HostAction, Result, Subscription};
use remote_config::{FederationConfig, NotificationConfig, RemoteConfig};
use tracing::{info, warn};

use crate::host_bridge::{write_theme, HostBridge};
use crate::signals::{Notification, ThemeChange};
use crate::theme_bridge::DocumentStyle;

/// Version reported in mount announcements.
pub const MODULE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A mounted remote: the bridge plus its federation manifest.
#[derive(Debug)]
pub struct RemoteModule {
    bridge: HostBridge,
    federation: FederationConfig,
    notifications: NotificationConfig,
}

impl RemoteModule {
    /// Build the bridge, apply the configured theme and announce every
    /// exposed component to the host.
    pub fn mount(config: &RemoteConfig, target: EventTarget, style: Rc<dyn DocumentStyle>) -> Self {
        let bridge = HostBridge::new(target, style);
        Self::mount_with(config, bridge)
    }

    /// Load the config at `path` and mount with it.
    pub fn mount_from_path(
        path: &Path,
        target: EventTarget,
        style: Rc<dyn DocumentStyle>,
    ) -> Result<Self> {
        let config = remote_config::load_from_path(path)?;
        Ok(Self::mount(&config, target, style))
    }

    /// Same as [`RemoteModule::mount`] with a prebuilt bridge.
    pub fn mount_with(config: &RemoteConfig, bridge: HostBridge) -> Self {
        if !config.theme.vars.is_empty() {
            bridge.apply_theme(&config.theme.name, Some(&config.theme.vars));
        }

        let federation = config.federation.clone();
        for name in federation.component_names() {
            let id = format!("{}/{}", federation.name, name);
            bridge.notify_widget_mounted(&id, name, MODULE_VERSION);
        }

        info!(
            federation = %federation.name,
            components = federation.exposes.len(),
            "remote module mounted"
        );

        Self {
            bridge,
            federation,
            notifications: config.notifications.clone(),
        }
    }

    pub fn bridge(&self) -> &HostBridge {
        &self.bridge
    }

    pub fn federation(&self) -> &FederationConfig {
        &self.federation
    }

    /// Display time for `notification` under this module's default.
    pub fn notification_duration(&self, notification: &Notification) -> Duration {
        notification.effective_duration(self.notifications.default_duration_ms)
    }

    /// Apply every `theme-changed` action the host sends from now on.
    ///
    /// The listener holds only the style sink, so dropping the module and
    /// the target releases it even without `unsubscribe()`.
    pub fn follow_host_theme(&self) -> Subscription {
        let style = self.bridge.style();
        self.bridge.listen_to_host_events(move |action, data| {
            if action != Some(HostAction::ThemeChanged) {
                return;
            }
            match ThemeChange::from_payload(&data) {
                Ok(change) => write_theme(style.as_ref(), &change.theme, change.theme_vars.as_ref()),
                Err(e) => warn!(error = %e, "theme change ignored"),
            }
        })
    }
}
