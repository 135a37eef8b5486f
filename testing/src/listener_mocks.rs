//! In-memory listener testing utilities
//!
//! Provides deterministic listeners for exercising notification channels:
//! - [`RecordingListener`]: captures every `(action, payload)` it receives
//! - [`FailingListener`]: always rejects, to test broadcast abortion

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Test utilities document panics where critical

use cinema_core::channel::Listener;
use cinema_core::error::ListenerError;
use std::sync::{Arc, Mutex};

/// Listener that records every notification for later assertions.
///
/// Clones share the same recording, so a test can keep one handle and give the
/// other to the channel.
///
/// # Example
///
/// ```
/// use cinema_core::channel::NotificationChannel;
/// use cinema_testing::RecordingListener;
/// use std::sync::Arc;
///
/// let recorder = RecordingListener::<String, u32>::new();
/// let mut channel: NotificationChannel<String, u32> = NotificationChannel::new();
/// channel.subscribe(Arc::new(recorder.clone()));
///
/// channel.notify(&"added".to_string(), &1).unwrap();
/// assert_eq!(recorder.events(), vec![("added".to_string(), 1)]);
/// ```
#[derive(Debug)]
pub struct RecordingListener<A, P> {
    events: Arc<Mutex<Vec<(A, P)>>>,
}

impl<A: Clone, P: Clone> RecordingListener<A, P> {
    /// Create a listener with an empty recording
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All recorded notifications in delivery order
    #[must_use]
    pub fn events(&self) -> Vec<(A, P)> {
        self.events.lock().unwrap().clone()
    }

    /// Recorded payloads in delivery order
    #[must_use]
    pub fn payloads(&self) -> Vec<P> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(_, payload)| payload.clone())
            .collect()
    }

    /// Number of notifications received
    #[must_use]
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl<A: Clone, P: Clone> Default for RecordingListener<A, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, P> Clone for RecordingListener<A, P> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<A, P> Listener<A, P> for RecordingListener<A, P>
where
    A: Clone + Send,
    P: Clone + Send,
{
    fn on_notify(&self, action: &A, payload: &P) -> Result<(), ListenerError> {
        self.events
            .lock()
            .map_err(|e| ListenerError::new(self.name(), e.to_string()))?
            .push((action.clone(), payload.clone()));
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Listener that fails every notification with a fixed reason.
#[derive(Debug, Clone)]
pub struct FailingListener {
    reason: String,
}

impl FailingListener {
    /// Create a listener failing with `reason`
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The error this listener returns
    #[must_use]
    pub fn error(&self) -> ListenerError {
        ListenerError::new("failing", self.reason.clone())
    }
}

impl<A, P> Listener<A, P> for FailingListener {
    fn on_notify(&self, _action: &A, _payload: &P) -> Result<(), ListenerError> {
        Err(self.error())
    }

    fn name(&self) -> &str {
        "failing"
    }
}
