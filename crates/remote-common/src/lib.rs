pub mod clock;
pub mod errors;
pub mod event_target;
pub mod events;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{BridgeError, ConfigError, RemoteError};
pub use event_target::{Event, EventTarget, Subscription};
pub use events::{Channel, HostAction, Payload, RemoteEvent, HOST_TO_REMOTE_CHANNEL};

pub type Result<T> = std::result::Result<T, RemoteError>;
