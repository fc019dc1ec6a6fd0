//! Host-side helpers for talking to a mounted remote.

use serde_json::Value;

use remote_common::{Channel, EventTarget, HostAction, Payload, RemoteEvent, Subscription};

use crate::signals::ReceivedSignal;

/// Dispatch `action` to the remote with `residual` as its extra fields.
///
/// An `action` key inside `residual` is replaced. Returns the number of
/// remote listeners that ran.
pub fn dispatch_host_action(target: &EventTarget, action: HostAction, residual: Payload) -> usize {
    let mut detail = residual;
    detail.insert("action".to_string(), Value::String(action.name().to_string()));
    let delivered = target.dispatch(Channel::HostToRemote, detail);
    tracing::debug!(action = %action, delivered, "host action dispatched");
    delivered
}

/// Observe one kind of outbound signal, decoded into its typed form.
///
/// Payloads that do not decode are logged and skipped.
pub fn listen_to_remote_events<F>(target: &EventTarget, event: RemoteEvent, callback: F) -> Subscription
where
    F: Fn(ReceivedSignal) + 'static,
{
    target.add_listener(Channel::Remote(event), move |e| {
        match ReceivedSignal::decode(event, &e.detail) {
            Ok(received) => callback(received),
            Err(err) => tracing::warn!(event = %event, error = %err, "remote signal dropped"),
        }
    })
}
