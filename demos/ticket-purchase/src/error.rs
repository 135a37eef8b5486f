//! Error types for the ticket purchase demo.

use cinema_core::error::ListenerError;
use thiserror::Error;

/// Errors that can occur while assembling a purchase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CinemaError {
    /// Hall numbers must be strictly positive
    #[error("El número de sala debe ser mayor que cero (recibido: {0})")]
    InvalidHallNumber(i64),

    /// A listener failed while a change was being broadcast
    #[error("Notification failed: {0}")]
    Listener(#[from] ListenerError),
}
