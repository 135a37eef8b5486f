//! Synchronous publish/subscribe for in-process listeners.
//!
//! A [`NotificationChannel`] keeps an ordered list of [`Listener`]s and
//! broadcasts `(action, payload)` pairs to them. Delivery is synchronous and
//! follows subscription order.
//!
//! # Subscription handles
//!
//! Every call to [`NotificationChannel::subscribe`] returns a fresh
//! [`SubscriptionId`]. Subscribing the same listener twice yields two ids and two
//! deliveries per broadcast. Removal is a handle lookup; removing by listener
//! identity is also available through
//! [`NotificationChannel::unsubscribe_listener`].
//!
//! # Failure semantics
//!
//! Listener failures are not swallowed. The first listener returning an error
//! aborts the rest of that broadcast and the error is handed back to the caller.
//!
//! # Example
//!
//! ```
//! use cinema_core::channel::{Listener, NotificationChannel};
//! use cinema_core::error::ListenerError;
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Default)]
//! struct Tally(Mutex<u32>);
//!
//! impl Listener<&'static str, u32> for Tally {
//!     fn on_notify(&self, _action: &&'static str, payload: &u32) -> Result<(), ListenerError> {
//!         *self.0.lock().map_err(|e| ListenerError::new("tally", e.to_string()))? += payload;
//!         Ok(())
//!     }
//! }
//!
//! let tally = Arc::new(Tally::default());
//! let mut channel: NotificationChannel<&'static str, u32> = NotificationChannel::new();
//! let id = channel.subscribe(tally.clone());
//!
//! channel.notify(&"add", &2).unwrap();
//! channel.unsubscribe(id);
//! channel.notify(&"add", &40).unwrap();
//!
//! assert_eq!(*tally.0.lock().unwrap(), 2);
//! ```

use crate::error::ListenerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Receives notifications from a [`NotificationChannel`].
///
/// # Type Parameters
///
/// - `A`: The action label type (what happened)
/// - `P`: The payload type (what it happened to)
pub trait Listener<A, P>: Send + Sync {
    /// Handles one notification.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] when the listener cannot handle the event. The
    /// channel stops the broadcast and propagates the error.
    fn on_notify(&self, action: &A, payload: &P) -> Result<(), ListenerError>;

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Handle returned by [`NotificationChannel::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// The raw numeric value of this handle.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Shared listener handle stored by the channel.
pub type SharedListener<A, P> = Arc<dyn Listener<A, P>>;

/// Ordered set of listeners receiving `(action, payload)` broadcasts.
///
/// Cloning a channel copies the subscription list (the listeners themselves are
/// shared). Callers holding a lock around the channel can clone it, release the
/// lock, then notify.
pub struct NotificationChannel<A, P> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, SharedListener<A, P>)>,
}

impl<A, P> NotificationChannel<A, P> {
    /// Creates a channel with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Registers `listener` and returns its handle.
    ///
    /// The same listener may be registered several times.
    pub fn subscribe(&mut self, listener: SharedListener<A, P>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        tracing::debug!(subscription = %id, listener = listener.name(), "Listener subscribed");
        self.subscribers.push((id, listener));
        id
    }

    /// Removes the registration behind `id`.
    ///
    /// Returns `false` when no such registration exists.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        let removed = self.subscribers.len() != before;
        tracing::debug!(subscription = %id, removed, "Listener unsubscribed");
        removed
    }

    /// Removes every registration of this exact listener instance.
    ///
    /// Identity is the `Arc` allocation, not value equality. Returns how many
    /// registrations were dropped.
    pub fn unsubscribe_listener(&mut self, listener: &SharedListener<A, P>) -> usize {
        let before = self.subscribers.len();
        self.subscribers
            .retain(|(_, registered)| !std::ptr::addr_eq(Arc::as_ptr(registered), Arc::as_ptr(listener)));
        before - self.subscribers.len()
    }

    /// Delivers `(action, payload)` to every subscriber in subscription order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ListenerError`]; listeners after the failing one are
    /// not called.
    pub fn notify(&self, action: &A, payload: &P) -> Result<(), ListenerError> {
        tracing::debug!(listeners = self.subscribers.len(), "Broadcasting notification");
        for (id, listener) in &self.subscribers {
            if let Err(error) = listener.on_notify(action, payload) {
                tracing::warn!(
                    subscription = %id,
                    listener = listener.name(),
                    error = %error,
                    "Listener failed, aborting broadcast"
                );
                return Err(error);
            }
        }
        Ok(())
    }

    /// Number of active registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` when nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<A, P> Default for NotificationChannel<A, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, P> Clone for NotificationChannel<A, P> {
    fn clone(&self) -> Self {
        Self {
            next_id: self.next_id,
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<A, P> fmt::Debug for NotificationChannel<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationChannel")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Log {
        seen: Mutex<Vec<String>>,
        fail_on: Option<u32>,
    }

    impl Listener<String, u32> for Log {
        fn on_notify(&self, action: &String, payload: &u32) -> Result<(), ListenerError> {
            if self.fail_on == Some(*payload) {
                return Err(ListenerError::new("log", "rejected"));
            }
            self.seen.lock().unwrap().push(format!("{action}:{payload}"));
            Ok(())
        }
    }

    fn seen(log: &Log) -> Vec<String> {
        log.seen.lock().unwrap().clone()
    }

    #[test]
    fn test_notify_reaches_listeners_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));

        struct Named(&'static str, Arc<Mutex<Vec<&'static str>>>);
        impl Listener<(), ()> for Named {
            fn on_notify(&self, _: &(), _: &()) -> Result<(), ListenerError> {
                self.1.lock().unwrap().push(self.0);
                Ok(())
            }
        }

        let mut channel: NotificationChannel<(), ()> = NotificationChannel::new();
        channel.subscribe(Arc::new(Named("first", order.clone())));
        channel.subscribe(Arc::new(Named("second", order.clone())));
        channel.subscribe(Arc::new(Named("third", order.clone())));
        channel.notify(&(), &()).unwrap();

        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_subscription_delivers_twice() {
        let log = Arc::new(Log::default());
        let mut channel: NotificationChannel<String, u32> = NotificationChannel::new();
        let a = channel.subscribe(log.clone());
        let b = channel.subscribe(log.clone());
        assert_ne!(a, b);

        channel.notify(&"added".to_string(), &7).unwrap();
        assert_eq!(seen(&log), vec!["added:7", "added:7"]);
    }

    #[test]
    fn test_unsubscribe_by_handle() {
        let log = Arc::new(Log::default());
        let mut channel: NotificationChannel<String, u32> = NotificationChannel::new();
        let id = channel.subscribe(log.clone());

        assert!(channel.unsubscribe(id));
        assert!(!channel.unsubscribe(id));
        channel.notify(&"added".to_string(), &1).unwrap();

        assert!(seen(&log).is_empty());
        assert!(channel.is_empty());
    }

    #[test]
    fn test_unsubscribe_listener_removes_all_registrations() {
        let log = Arc::new(Log::default());
        let other = Arc::new(Log::default());
        let mut channel: NotificationChannel<String, u32> = NotificationChannel::new();
        let shared: SharedListener<String, u32> = log.clone();
        channel.subscribe(shared.clone());
        channel.subscribe(other.clone());
        channel.subscribe(shared.clone());

        assert_eq!(channel.unsubscribe_listener(&shared), 2);
        assert_eq!(channel.unsubscribe_listener(&shared), 0);
        assert_eq!(channel.len(), 1);

        channel.notify(&"added".to_string(), &3).unwrap();
        assert!(seen(&log).is_empty());
        assert_eq!(seen(&other), vec!["added:3"]);
    }

    #[test]
    fn test_failure_aborts_remaining_listeners() {
        let before = Arc::new(Log::default());
        let failing = Arc::new(Log {
            fail_on: Some(5),
            ..Log::default()
        });
        let after = Arc::new(Log::default());

        let mut channel: NotificationChannel<String, u32> = NotificationChannel::new();
        channel.subscribe(before.clone());
        channel.subscribe(failing);
        channel.subscribe(after.clone());

        let error = channel.notify(&"added".to_string(), &5).unwrap_err();
        assert_eq!(error, ListenerError::new("log", "rejected"));
        assert_eq!(seen(&before), vec!["added:5"]);
        assert!(seen(&after).is_empty());
    }

    #[test]
    fn test_clone_shares_listeners() {
        let log = Arc::new(Log::default());
        let mut channel: NotificationChannel<String, u32> = NotificationChannel::new();
        channel.subscribe(log.clone());

        let snapshot = channel.clone();
        channel.notify(&"a".to_string(), &1).unwrap();
        snapshot.notify(&"b".to_string(), &2).unwrap();

        assert_eq!(seen(&log), vec!["a:1", "b:2"]);
    }

    #[test]
    fn test_empty_channel_notify_is_noop() {
        let channel: NotificationChannel<String, u32> = NotificationChannel::default();
        assert!(channel.notify(&"added".to_string(), &1).is_ok());
    }
}
