//! Synchronous, single-threaded dispatch surface.
//!
//! Stands in for the browser's `window` event target: listeners attach to a
//! [`Channel`], `dispatch` runs every listener attached at dispatch start
//! before returning, in registration order. The surface is owned by the
//! composition root and handed out by cloning.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::events::{Channel, Payload};

type Listener = Rc<dyn Fn(&Event)>;

/// A dispatched signal as seen by listeners.
#[derive(Debug, Clone)]
pub struct Event {
    pub channel: Channel,
    pub detail: Payload,
}

struct Entry {
    id: u64,
    channel: Channel,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }
}

/// Shared handle to a listener registry. Clones point at the same registry.
#[derive(Clone, Default)]
pub struct EventTarget {
    registry: Rc<RefCell<Registry>>,
}

impl EventTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `listener` to `channel`.
    ///
    /// The listener stays attached until [`Subscription::unsubscribe`] is
    /// called; dropping the subscription leaves it in place.
    pub fn add_listener<F>(&self, channel: Channel, listener: F) -> Subscription
    where
        F: Fn(&Event) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            channel,
            listener: Rc::new(listener),
        });
        tracing::trace!(channel = %channel, id, "listener attached");

        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
            channel,
            active: Cell::new(true),
        }
    }

    /// Deliver `detail` to every listener on `channel`.
    ///
    /// Listeners attached during the dispatch are not called for it;
    /// listeners removed during the dispatch are skipped if their turn has
    /// not come yet. Returns the number of listeners invoked.
    pub fn dispatch(&self, channel: Channel, detail: Payload) -> usize {
        let snapshot: Vec<(u64, Listener)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|e| e.channel == channel)
            .map(|e| (e.id, Rc::clone(&e.listener)))
            .collect();

        let event = Event { channel, detail };
        let mut delivered = 0;
        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            listener(&event);
            delivered += 1;
        }

        tracing::trace!(channel = %channel, delivered, "dispatch complete");
        delivered
    }

    /// Number of listeners currently attached to `channel`.
    pub fn listener_count(&self, channel: Channel) -> usize {
        self.registry
            .borrow()
            .entries
            .iter()
            .filter(|e| e.channel == channel)
            .count()
    }
}

impl std::fmt::Debug for EventTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventTarget")
            .field("listeners", &self.registry.borrow().entries.len())
            .finish()
    }
}

/// Unregistration handle returned by [`EventTarget::add_listener`].
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
    channel: Channel,
    active: Cell<bool>,
}

impl Subscription {
    /// Detach the listener. Later calls are no-ops.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.retain(|e| e.id != self.id);
            tracing::trace!(channel = %self.channel, id = self.id, "listener detached");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RemoteEvent;

    fn payload(value: serde_json::Value) -> Payload {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn dispatch_without_listeners_is_noop() {
        let target = EventTarget::new();
        let delivered = target.dispatch(Channel::HostToRemote, Payload::new());
        assert_eq!(delivered, 0);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let target = EventTarget::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l1 = Rc::clone(&log);
        let _a = target.add_listener(Channel::HostToRemote, move |_| l1.borrow_mut().push(1));
        let l2 = Rc::clone(&log);
        let _b = target.add_listener(Channel::HostToRemote, move |_| l2.borrow_mut().push(2));

        assert_eq!(target.dispatch(Channel::HostToRemote, Payload::new()), 2);
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn channels_are_isolated() {
        let target = EventTarget::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let _sub = target.add_listener(RemoteEvent::CounterUpdated.into(), move |_| {
            h.set(h.get() + 1)
        });

        target.dispatch(RemoteEvent::DataUpdated.into(), Payload::new());
        target.dispatch(Channel::HostToRemote, Payload::new());
        assert_eq!(hits.get(), 0);

        target.dispatch(RemoteEvent::CounterUpdated.into(), Payload::new());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn listener_sees_detail() {
        let target = EventTarget::new();
        let seen = Rc::new(RefCell::new(None));
        let s = Rc::clone(&seen);
        let _sub = target.add_listener(Channel::HostToRemote, move |event| {
            *s.borrow_mut() = event.detail.get("foo").cloned();
        });

        target.dispatch(Channel::HostToRemote, payload(serde_json::json!({"foo": 1})));
        assert_eq!(*seen.borrow(), Some(serde_json::json!(1)));
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let target = EventTarget::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let sub = target.add_listener(Channel::HostToRemote, move |_| h.set(h.get() + 1));

        target.dispatch(Channel::HostToRemote, Payload::new());
        sub.unsubscribe();
        sub.unsubscribe();
        target.dispatch(Channel::HostToRemote, Payload::new());

        assert_eq!(hits.get(), 1);
        assert!(!sub.is_active());
        assert_eq!(target.listener_count(Channel::HostToRemote), 0);
    }

    #[test]
    fn unsubscribe_removes_only_its_listener() {
        let target = EventTarget::new();
        let a = target.add_listener(Channel::HostToRemote, |_| {});
        let _b = target.add_listener(Channel::HostToRemote, |_| {});

        a.unsubscribe();
        assert_eq!(target.listener_count(Channel::HostToRemote), 1);
    }

    #[test]
    fn subscription_reports_its_channel() {
        let target = EventTarget::new();
        let inbound = target.add_listener(Channel::HostToRemote, |_| {});
        let outbound = target.add_listener(RemoteEvent::ViewReady.into(), |_| {});

        assert_eq!(inbound.channel(), Channel::HostToRemote);
        assert_eq!(outbound.channel(), Channel::Remote(RemoteEvent::ViewReady));
    }

    #[test]
    fn dropping_subscription_keeps_listener() {
        let target = EventTarget::new();
        drop(target.add_listener(Channel::HostToRemote, |_| {}));
        assert_eq!(target.listener_count(Channel::HostToRemote), 1);
    }

    #[test]
    fn unsubscribe_after_target_dropped() {
        let target = EventTarget::new();
        let sub = target.add_listener(Channel::HostToRemote, |_| {});
        drop(target);
        sub.unsubscribe();
        assert!(!sub.is_active());
    }

    #[test]
    fn listener_removed_mid_dispatch_is_skipped() {
        let target = EventTarget::new();
        let second_hits = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let s = Rc::clone(&slot);
        let _first = target.add_listener(Channel::HostToRemote, move |_| {
            if let Some(sub) = s.borrow().as_ref() {
                sub.unsubscribe();
            }
        });
        let h = Rc::clone(&second_hits);
        let second = target.add_listener(Channel::HostToRemote, move |_| h.set(h.get() + 1));
        *slot.borrow_mut() = Some(second);

        assert_eq!(target.dispatch(Channel::HostToRemote, Payload::new()), 1);
        assert_eq!(second_hits.get(), 0);
    }

    #[test]
    fn listener_added_mid_dispatch_waits_for_next() {
        let target = EventTarget::new();
        let late_hits = Rc::new(Cell::new(0));

        let t = target.clone();
        let h = Rc::clone(&late_hits);
        let added = Cell::new(false);
        let _sub = target.add_listener(Channel::HostToRemote, move |_| {
            if !added.replace(true) {
                let h = Rc::clone(&h);
                let _late = t.add_listener(Channel::HostToRemote, move |_| h.set(h.get() + 1));
            }
        });

        target.dispatch(Channel::HostToRemote, Payload::new());
        assert_eq!(late_hits.get(), 0);

        target.dispatch(Channel::HostToRemote, Payload::new());
        assert_eq!(late_hits.get(), 1);
    }
}
