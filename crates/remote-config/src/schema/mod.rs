//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod federation;
mod notifications;
mod theme;

pub use federation::*;
pub use notifications::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the remote module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub federation: FederationConfig,
    pub notifications: NotificationConfig,
    pub theme: ThemeConfig,
}
