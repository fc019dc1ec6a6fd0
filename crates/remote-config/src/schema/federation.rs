//! Module federation exposure manifest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What this remote publishes to a host at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FederationConfig {
    /// Container name the host imports the remote under.
    pub name: String,
    /// Entry file the host fetches (e.g. `remoteEntry.js`).
    pub filename: String,
    /// Exposed key (`./RemoteWidget`) -> component source path.
    pub exposes: BTreeMap<String, String>,
    /// Packages shared with the host as singletons.
    pub shared: Vec<String>,
}

impl FederationConfig {
    /// Source path behind an exposed key. Accepts the key with or without
    /// the leading `./`.
    pub fn resolve_exposed(&self, key: &str) -> Option<&str> {
        self.exposes
            .get(key)
            .or_else(|| self.exposes.get(&format!("./{key}")))
            .map(String::as_str)
    }

    /// Exposed keys without their `./` prefix, in sorted order.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.exposes
            .keys()
            .map(|k| k.strip_prefix("./").unwrap_or(k))
    }
}

impl Default for FederationConfig {
    fn default() -> Self {
        let exposes = [
            ("./RemoteWidget", "./src/components/RemoteWidget.vue"),
            ("./RemoteComponent", "./src/components/RemoteComponent.vue"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            name: "remoteApp".into(),
            filename: "remoteEntry.js".into(),
            exposes,
            shared: vec!["vue".into()],
        }
    }
}
