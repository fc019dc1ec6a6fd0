//! Core TOML config loading.

use crate::schema::RemoteConfig;
use crate::validation;
use remote_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Parse a config from TOML text.
///
/// Missing fields take their serde defaults. Validation problems are
/// logged and the parsed config is returned as-is.
pub fn load_from_str(content: &str) -> Result<RemoteConfig, ConfigError> {
    let config: RemoteConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e} - using parsed config as-is");
    }

    Ok(config)
}

/// Load config from a TOML file.
pub fn load_from_path(path: &Path) -> Result<RemoteConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = load_from_str(&content)?;
    info!(
        federation = %config.federation.name,
        "loaded config from {}",
        path.display()
    );
    Ok(config)
}
