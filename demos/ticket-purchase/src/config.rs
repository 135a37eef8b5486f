//! Configuration management for the ticket purchase demo.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the customer buying the ticket
    pub customer: String,
    /// Hall configuration
    pub hall: HallConfig,
}

/// Hall configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallConfig {
    /// Hall number, validated when the hall is built
    pub number: i64,
    /// Free snacks offered in the hall
    pub snacks: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            customer: "Juan".to_string(),
            hall: HallConfig {
                number: 1,
                snacks: vec![
                    "Canguil".to_string(),
                    "Hot-dog".to_string(),
                    "Bebidas".to_string(),
                ],
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `CINEMA_CUSTOMER`: customer name (default: `Juan`)
    /// - `CINEMA_HALL_NUMBER`: hall number (default: `1`)
    /// - `CINEMA_HALL_SNACKS`: comma-separated snacks (default: `Canguil,Hot-dog,Bebidas`)
    ///
    /// Values that fail to parse fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            customer: lookup("CINEMA_CUSTOMER").unwrap_or(defaults.customer),
            hall: HallConfig {
                number: lookup("CINEMA_HALL_NUMBER")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(defaults.hall.number),
                snacks: lookup("CINEMA_HALL_SNACKS")
                    .map(|s| parse_list(&s))
                    .unwrap_or(defaults.hall.snacks),
            },
        }
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
