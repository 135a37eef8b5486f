//! Cinema halls and their seat pools.
//!
//! Every hall starts with the same six seats. Seats are handed out from the
//! end of the pool and never returned; once the pool is empty every further
//! request yields [`SeatAssignment::Unavailable`].
//!
//! Popping needs `&mut Hall`, so a hall shared between threads has to sit
//! behind a `Mutex`.

use crate::error::CinemaError;
use crate::types::{HallNumber, SeatAssignment};
use serde::{Deserialize, Serialize};

/// Seat labels every hall starts with, in pool order.
pub const DEFAULT_SEATS: [&str; 6] = ["A1", "A2", "B1", "B2", "C1", "C2"];

/// A screening room with free snacks and a depleting seat pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hall {
    number: HallNumber,
    free_snacks: Vec<String>,
    available_seats: Vec<String>,
}

impl Hall {
    /// Creates a hall with the default seat pool.
    ///
    /// # Errors
    ///
    /// Returns [`CinemaError::InvalidHallNumber`] if `number <= 0`.
    pub fn new<S: Into<String>>(
        number: i64,
        free_snacks: impl IntoIterator<Item = S>,
    ) -> Result<Self, CinemaError> {
        let number = HallNumber::new(number)?;
        Ok(Self {
            number,
            free_snacks: free_snacks.into_iter().map(Into::into).collect(),
            available_seats: DEFAULT_SEATS.iter().map(ToString::to_string).collect(),
        })
    }

    /// The validated hall number
    #[must_use]
    pub const fn number(&self) -> HallNumber {
        self.number
    }

    /// Snacks included with every ticket for this hall
    #[must_use]
    pub fn free_snacks(&self) -> &[String] {
        &self.free_snacks
    }

    /// Seats still in the pool, in pool order
    #[must_use]
    pub fn available_seats(&self) -> &[String] {
        &self.available_seats
    }

    /// How many seats are left
    #[must_use]
    pub fn remaining_seats(&self) -> usize {
        self.available_seats.len()
    }

    /// Takes the last seat of the pool.
    ///
    /// Returns [`SeatAssignment::Unavailable`] when the pool is empty.
    pub fn pop_seat(&mut self) -> SeatAssignment {
        match self.available_seats.pop() {
            Some(label) => {
                tracing::debug!(
                    hall = %self.number,
                    seat = %label,
                    remaining = self.available_seats.len(),
                    "Seat assigned"
                );
                SeatAssignment::Assigned(label)
            },
            None => {
                tracing::warn!(hall = %self.number, "No seats left in hall");
                SeatAssignment::Unavailable
            },
        }
    }
}
