//! Tests for TOML config loading.

use super::*;
use remote_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_remote_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("remote.toml");
    std::fs::write(
        &path,
        r##"
[notifications]
default_duration_ms = 8000

[theme]
name = "dark"

[theme.vars]
"--bg-color" = "#000"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.notifications.default_duration_ms, 8000);
    assert_eq!(config.theme.name, "dark");
    assert_eq!(config.theme.vars.get("--bg-color").map(String::as_str), Some("#000"));
    // Defaults preserved
    assert_eq!(config.federation.name, "remoteApp");
    assert_eq!(config.federation.exposes.len(), 2);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let result = load_from_str("this is not valid toml {{{");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_empty_toml_gives_defaults() {
    let config = load_from_str("").unwrap();
    assert_eq!(config.federation.filename, "remoteEntry.js");
    assert_eq!(config.notifications.default_duration_ms, 5000);
    assert!(config.theme.vars.is_empty());
}

#[test]
fn invalid_values_are_returned_not_rejected() {
    let config = load_from_str(
        r#"
[federation]
name = ""
"#,
    )
    .unwrap();
    assert_eq!(config.federation.name, "");
}

#[test]
fn replacing_exposes_drops_defaults() {
    let config = load_from_str(
        r#"
[federation.exposes]
"./RemoteView" = "./src/views/RemoteView.vue"
"#,
    )
    .unwrap();
    assert_eq!(config.federation.exposes.len(), 1);
    assert_eq!(
        config.federation.resolve_exposed("RemoteView"),
        Some("./src/views/RemoteView.vue")
    );
}

#[test]
fn default_config_toml_matches_defaults() {
    let config = load_from_str(&default_config_toml()).unwrap();
    let defaults = crate::RemoteConfig::default();
    assert_eq!(config.federation.name, defaults.federation.name);
    assert_eq!(config.federation.exposes, defaults.federation.exposes);
    assert_eq!(config.federation.shared, defaults.federation.shared);
    assert_eq!(
        config.notifications.default_duration_ms,
        defaults.notifications.default_duration_ms
    );
    assert_eq!(config.theme.name, defaults.theme.name);
    assert!(crate::validate(&config).is_ok());
}
