//! The [`Describable`] capability and the plain [`Product`] leaf.
//!
//! Anything that can be sold at the counter renders itself as text. Plain
//! products just return their name; combos (see [`crate::combo`]) compose the
//! descriptions of what they wrap.
//!
//! # Example
//!
//! ```
//! use cinema_core::describable::{Describable, Product};
//!
//! let popcorn = Product::new("Canguil");
//! assert_eq!(popcorn.description(), "Canguil");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability of rendering a textual description.
///
/// Implementors must be `Send + Sync` so items can travel inside purchases
/// that are shared across threads.
pub trait Describable: Send + Sync {
    /// Returns the human-readable description of this item.
    fn description(&self) -> String;
}

/// A plain edible item identified only by its name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
}

impl Product {
    /// Creates a new product with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Describable for Product {
    fn description(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_describes_itself_by_name() {
        let product = Product::new("Hot-dog");
        assert_eq!(product.description(), "Hot-dog");
        assert_eq!(product.name(), "Hot-dog");
        assert_eq!(product.to_string(), "Hot-dog");
    }

    #[test]
    fn test_empty_name_is_allowed() {
        assert_eq!(Product::new("").description(), "");
    }
}
