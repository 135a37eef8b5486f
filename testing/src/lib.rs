//! # Cinema Testing
//!
//! Testing utilities and helpers for the cinema patterns workspace.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - Recording and failing listeners for notification channels
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use cinema_testing::{RecordingListener, test_clock};
//!
//! #[test]
//! fn test_catalog_broadcasts() {
//!     let catalog = MovieCatalog::new();
//!     let recorder = RecordingListener::new();
//!     catalog.subscribe(Arc::new(recorder.clone()));
//!
//!     catalog.add_movie(Movie::new("Aladdin")).unwrap();
//!     assert_eq!(recorder.count(), 1);
//! }
//! ```

use chrono::{DateTime, Utc};
use cinema_core::environment::Clock;

mod listener_mocks;

pub use listener_mocks::{FailingListener, RecordingListener};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use cinema_testing::mocks::FixedClock;
    /// use cinema_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a test-friendly tracing subscriber.
    ///
    /// Output goes through the test harness writer so it only shows for failing
    /// tests. Safe to call from every test; only the first call installs.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities
///
/// Strategies for domain inputs, for use inside `proptest!` blocks.
pub mod properties {
    use proptest::prelude::*;

    /// Hall numbers accepted by hall construction
    pub fn valid_hall_number() -> impl Strategy<Value = i64> {
        1..=i64::MAX
    }

    /// Hall numbers rejected by hall construction (zero and negatives)
    pub fn invalid_hall_number() -> impl Strategy<Value = i64> {
        i64::MIN..=0
    }

    /// Short printable product or movie names
    pub fn item_name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z -]{0,15}"
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
