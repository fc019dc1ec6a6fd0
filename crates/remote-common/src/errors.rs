use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Errors raised while decoding signals that crossed the host boundary.
///
/// The send/listen operations themselves never fail; these only surface
/// when a payload is turned back into a typed value.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("unknown remote event: {0}")]
    UnknownEvent(String),

    #[error("unknown host action: {0}")]
    UnknownAction(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid payload for {event}: {source}")]
    Payload {
        event: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed ipc message: {0}")]
    MalformedIpc(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),
}
