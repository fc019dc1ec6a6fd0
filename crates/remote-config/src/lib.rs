//! Configuration for the dashboard remote module.
//!
//! TOML-based. Every section uses serde defaults so an empty or partial
//! file yields a working config.
//!
//! ```rust,no_run
//! use remote_config::{config_to_json, load_from_path};
//!
//! let config = load_from_path(std::path::Path::new("remote.toml")).expect("config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    FederationConfig, NotificationConfig, RemoteConfig, ThemeConfig, CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{default_config_toml, load_from_path, load_from_str};
pub use validation::validate;

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &RemoteConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
