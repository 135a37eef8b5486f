//! Domain types for the ticket purchase demo.
//!
//! Value objects shared by the catalog, the hall and purchases.

use crate::error::CinemaError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Value Objects
// ============================================================================

/// A movie in the catalog. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    title: String,
}

impl Movie {
    /// Creates a movie with the given title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// The movie title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// The person buying a ticket. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    name: String,
}

impl Customer {
    /// Creates a customer with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The customer name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Validated hall number, always greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HallNumber(i64);

impl HallNumber {
    /// Validates a raw hall number.
    ///
    /// # Errors
    ///
    /// Returns [`CinemaError::InvalidHallNumber`] if `number <= 0`.
    pub fn new(number: i64) -> Result<Self, CinemaError> {
        if number <= 0 {
            return Err(CinemaError::InvalidHallNumber(number));
        }
        Ok(Self(number))
    }

    /// The raw number
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for HallNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text shown when a hall has no seat left to assign.
pub const SEAT_UNAVAILABLE: &str = "No disponible";

/// Outcome of asking a hall for a seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatAssignment {
    /// A seat label taken from the hall's pool
    Assigned(String),
    /// The pool was empty
    Unavailable,
}

impl SeatAssignment {
    /// The assigned label, if any
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Assigned(label) => Some(label),
            Self::Unavailable => None,
        }
    }

    /// Returns `true` if a seat was assigned
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }
}

impl fmt::Display for SeatAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned(label) => f.write_str(label),
            Self::Unavailable => f.write_str(SEAT_UNAVAILABLE),
        }
    }
}

// ============================================================================
// Actions
// ============================================================================

/// What happened to the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogAction {
    /// A movie was appended to the catalog
    Added,
}

impl CatalogAction {
    /// Label shown to users
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Added => "agregar",
        }
    }
}

impl fmt::Display for CatalogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What happened to a purchase.
///
/// Purchases expose a notification channel, but nothing in the purchase flow
/// broadcasts on it yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseAction {
    /// The purchase was completed
    Completed,
}

impl fmt::Display for PurchaseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => f.write_str("completar"),
        }
    }
}
