//! Initial theme configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Theme applied when the module mounts, before the host sends one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme name, usually `light` or `dark`.
    pub name: String,
    /// CSS custom properties (`--bg-color = "#fff"`).
    pub vars: BTreeMap<String, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "light".into(),
            vars: BTreeMap::new(),
        }
    }
}
