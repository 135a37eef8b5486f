//! # Cinema Core
//!
//! Core traits and types for the cinema patterns workspace.
//!
//! This crate provides the building blocks the ticket-purchase application is
//! assembled from:
//!
//! - **Describable**: anything that renders a textual description
//! - **Combo**: a decorator adding extras to a wrapped item, nestable to any depth
//! - **Notification channel**: synchronous publish/subscribe with subscription handles
//! - **Environment**: injected dependencies (the clock)
//!
//! ## Architecture Principles
//!
//! - Static dispatch for composition (tagged variants, owned children)
//! - Explicit ownership instead of hidden globals
//! - Dependency injection via environment traits
//! - Errors propagate to the caller, never swallowed
//!
//! ## Example
//!
//! ```
//! use cinema_core::combo::Combo;
//! use cinema_core::describable::{Describable, Product};
//!
//! let combo = Combo::dessert(
//!     Combo::beverage(Product::new("Canguil"), Product::new("Bebida")),
//!     Product::new("Postre"),
//! );
//! assert_eq!(combo.description(), "Canguil con: Bebida con: Postre");
//! ```

pub mod channel;
pub mod combo;
pub mod describable;
pub mod error;

/// Environment module - Dependency injection traits
///
/// Collaborators that touch the outside world are passed in as trait objects
/// so tests can substitute deterministic versions.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use cinema_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let earlier = clock.now();
    /// assert!(clock.now() >= earlier);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

pub use channel::{Listener, NotificationChannel, SubscriptionId};
pub use combo::{Combo, ComboKind, FoodItem};
pub use describable::{Describable, Product};
pub use error::ListenerError;
