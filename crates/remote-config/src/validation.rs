//! Configuration validation.
//!
//! Each section pushes its problems into a shared list; the result is a
//! single `ConfigError` naming all of them.

use crate::schema::{FederationConfig, NotificationConfig, RemoteConfig, ThemeConfig};
use remote_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RemoteConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_federation(&mut errors, &config.federation);
    validate_notifications(&mut errors, &config.notifications);
    validate_theme(&mut errors, &config.theme);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_federation(errors: &mut Vec<String>, fed: &FederationConfig) {
    if fed.name.trim().is_empty() {
        errors.push("federation.name is empty".into());
    }
    if !fed.filename.ends_with(".js") {
        errors.push(format!(
            "federation.filename = '{}' must end in .js",
            fed.filename
        ));
    }
    for key in fed.exposes.keys() {
        if !key.starts_with("./") {
            errors.push(format!("federation.exposes key '{key}' must start with ./"));
        }
    }
}

fn validate_notifications(errors: &mut Vec<String>, notifications: &NotificationConfig) {
    if notifications.default_duration_ms == 0 {
        errors.push("notifications.default_duration_ms must be greater than 0".into());
    }
}

fn validate_theme(errors: &mut Vec<String>, theme: &ThemeConfig) {
    for name in theme.vars.keys() {
        if !name.starts_with("--") {
            errors.push(format!("theme.vars '{name}' is not a CSS custom property"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&RemoteConfig::default()).is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut config = RemoteConfig::default();
        config.federation.name = "  ".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("federation.name"));
    }

    #[test]
    fn bad_filename_rejected() {
        let mut config = RemoteConfig::default();
        config.federation.filename = "remoteEntry.css".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn exposes_key_needs_prefix() {
        let mut config = RemoteConfig::default();
        config
            .federation
            .exposes
            .insert("RemoteView".into(), "./src/views/RemoteView.vue".into());
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("'RemoteView'"));
    }

    #[test]
    fn zero_duration_rejected() {
        let mut config = RemoteConfig::default();
        config.notifications.default_duration_ms = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn theme_var_must_be_custom_property() {
        let mut config = RemoteConfig::default();
        config.theme.vars.insert("--ok".into(), "#fff".into());
        config.theme.vars.insert("color".into(), "#fff".into());
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("'color'"));
        assert!(!err.to_string().contains("'--ok'"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = RemoteConfig::default();
        config.federation.name = String::new();
        config.notifications.default_duration_ms = 0;
        match validate(&config) {
            Err(ConfigError::ValidationError(msg)) => {
                assert_eq!(msg.split("; ").count(), 2);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
