//! Error types shared across the workspace.

use thiserror::Error;

/// A listener refused or failed to handle a notification.
///
/// Returned from [`crate::channel::NotificationChannel::notify`]; the broadcast
/// that produced it was aborted at the failing listener.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Listener '{listener}' failed: {reason}")]
pub struct ListenerError {
    /// Name of the listener that failed
    pub listener: String,
    /// The reason for failure
    pub reason: String,
}

impl ListenerError {
    /// Creates a new listener error.
    #[must_use]
    pub fn new(listener: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            listener: listener.into(),
            reason: reason.into(),
        }
    }
}
