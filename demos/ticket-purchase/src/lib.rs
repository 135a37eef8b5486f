//! # Ticket Purchase
//!
//! A movie ticket purchase assembled from the cinema core building blocks.
//!
//! This example showcases:
//! - Decorator: food combos wrapping other items ([`cinema_core::combo`])
//! - Observer: catalog changes broadcast to listeners ([`catalog`], [`listener`])
//! - Single shared instance: one [`catalog::MovieCatalog`] created at startup
//!   and passed around as a cloned handle
//!
//! ## Example
//!
//! ```no_run
//! use cinema_core::environment::SystemClock;
//! use ticket_purchase::{catalog::MovieCatalog, config::Config, scenario};
//!
//! # fn example() -> Result<(), ticket_purchase::error::CinemaError> {
//! let catalog = MovieCatalog::new();
//! let purchase = scenario::run(&Config::default(), &catalog, &SystemClock)?;
//! purchase.show_summary();
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod hall;
pub mod listener;
pub mod printer;
pub mod purchase;
pub mod scenario;
pub mod types;

pub use catalog::MovieCatalog;
pub use config::Config;
pub use error::CinemaError;
pub use hall::Hall;
pub use purchase::Purchase;
