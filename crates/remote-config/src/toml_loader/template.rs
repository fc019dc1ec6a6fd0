//! Default TOML config template with inline documentation comments.

/// Default config file content. Parses to `RemoteConfig::default()`.
pub fn default_config_toml() -> String {
    r##"# Dashboard remote configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[federation]
name = "remoteApp"
filename = "remoteEntry.js"
shared = ["vue"]

[federation.exposes]
"./RemoteWidget" = "./src/components/RemoteWidget.vue"
"./RemoteComponent" = "./src/components/RemoteComponent.vue"

[notifications]
# Applied by the host when a notification carries no duration.
default_duration_ms = 5000

[theme]
name = "light"

[theme.vars]
# "--bg-color" = "#ffffff"
# "--text-color" = "#1a1a1a"
"##
    .to_string()
}
