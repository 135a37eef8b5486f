//! Combo decorators for food items.
//!
//! A [`Combo`] wraps one [`FoodItem`] and an ordered list of extras. Because the
//! wrapped item can itself be a combo, decorators nest to any depth; each layer
//! only contributes its own extras:
//!
//! ```text
//! Combo::dessert(                    "Canguil con: Bebida con: Postre"
//!   Combo::beverage(Canguil, Bebida)   └─ "Canguil con: Bebida"
//!   Postre)                               └─ "Canguil"
//! ```
//!
//! Items are modelled as a tagged variant ([`FoodItem`]) with owned children and
//! traversed recursively, so no dynamic dispatch is needed.
//!
//! # Example
//!
//! ```
//! use cinema_core::combo::{Combo, FoodItem};
//! use cinema_core::describable::{Describable, Product};
//!
//! let with_drink = Combo::beverage(Product::new("Canguil"), Product::new("Bebida"));
//! assert_eq!(with_drink.description(), "Canguil con: Bebida");
//!
//! let full = Combo::dessert(with_drink, Product::new("Postre"));
//! assert_eq!(full.description(), "Canguil con: Bebida con: Postre");
//! ```

use crate::describable::{Describable, Product};
use serde::{Deserialize, Serialize};

/// Text placed between a combo's base description and its extras.
pub const COMBO_SEPARATOR: &str = " con: ";

/// Text placed between consecutive extras.
pub const EXTRAS_SEPARATOR: &str = ", ";

/// Anything sold at the counter: a plain product or a combo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodItem {
    /// A single named product
    Product(Product),
    /// A decorated item with extras
    Combo(Combo),
}

impl FoodItem {
    /// Number of combo layers wrapped around the innermost product.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Product(_) => 0,
            Self::Combo(combo) => 1 + combo.base.depth(),
        }
    }
}

impl Describable for FoodItem {
    fn description(&self) -> String {
        match self {
            Self::Product(product) => product.description(),
            Self::Combo(combo) => combo.description(),
        }
    }
}

impl From<Product> for FoodItem {
    fn from(product: Product) -> Self {
        Self::Product(product)
    }
}

impl From<Combo> for FoodItem {
    fn from(combo: Combo) -> Self {
        Self::Combo(combo)
    }
}

/// Which constructor produced a combo.
///
/// All kinds describe themselves the same way; the tag only records intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComboKind {
    /// Built with [`Combo::new`], extras added by hand
    Custom,
    /// Built with [`Combo::beverage`]
    Beverage,
    /// Built with [`Combo::dessert`]
    Dessert,
}

/// Decorator adding extras to a wrapped item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    kind: ComboKind,
    base: Box<FoodItem>,
    extras: Vec<FoodItem>,
}

impl Combo {
    /// Wraps `base` with no extras.
    #[must_use]
    pub fn new(base: impl Into<FoodItem>) -> Self {
        Self::with_kind(ComboKind::Custom, base)
    }

    /// Wraps `base` and adds `drink` as its single extra.
    #[must_use]
    pub fn beverage(base: impl Into<FoodItem>, drink: impl Into<FoodItem>) -> Self {
        let mut combo = Self::with_kind(ComboKind::Beverage, base);
        combo.add_extra(drink);
        combo
    }

    /// Wraps `base` and adds `dessert` as its single extra.
    #[must_use]
    pub fn dessert(base: impl Into<FoodItem>, dessert: impl Into<FoodItem>) -> Self {
        let mut combo = Self::with_kind(ComboKind::Dessert, base);
        combo.add_extra(dessert);
        combo
    }

    fn with_kind(kind: ComboKind, base: impl Into<FoodItem>) -> Self {
        Self {
            kind,
            base: Box::new(base.into()),
            extras: Vec::new(),
        }
    }

    /// Appends an extra. Extras are never removed.
    pub fn add_extra(&mut self, extra: impl Into<FoodItem>) {
        self.extras.push(extra.into());
    }

    /// The constructor that produced this combo.
    #[must_use]
    pub const fn kind(&self) -> ComboKind {
        self.kind
    }

    /// The wrapped item.
    #[must_use]
    pub fn base(&self) -> &FoodItem {
        &self.base
    }

    /// Extras of this layer only, in insertion order.
    #[must_use]
    pub fn extras(&self) -> &[FoodItem] {
        &self.extras
    }
}

impl Describable for Combo {
    fn description(&self) -> String {
        let extras = self
            .extras
            .iter()
            .map(Describable::description)
            .collect::<Vec<_>>()
            .join(EXTRAS_SEPARATOR);
        format!("{}{COMBO_SEPARATOR}{extras}", self.base.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canguil() -> Product {
        Product::new("Canguil")
    }

    #[test]
    fn test_beverage_combo_description() {
        let combo = Combo::beverage(canguil(), Product::new("Bebida"));
        assert_eq!(combo.description(), "Canguil con: Bebida");
        assert_eq!(combo.kind(), ComboKind::Beverage);
        assert_eq!(combo.extras().len(), 1);
    }

    #[test]
    fn test_nested_combo_keeps_layers_separate() {
        let inner = Combo::beverage(canguil(), Product::new("Bebida"));
        let outer = Combo::dessert(inner.clone(), Product::new("Postre"));

        assert_eq!(outer.description(), "Canguil con: Bebida con: Postre");
        assert_eq!(outer.extras().len(), 1);
        assert_eq!(outer.base(), &FoodItem::Combo(inner));
        assert_eq!(FoodItem::from(outer).depth(), 2);
    }

    #[test]
    fn test_extras_join_in_insertion_order() {
        let mut combo = Combo::new(canguil());
        combo.add_extra(Product::new("Bebida"));
        combo.add_extra(Product::new("Nachos"));
        combo.add_extra(Product::new("Postre"));

        assert_eq!(combo.description(), "Canguil con: Bebida, Nachos, Postre");
        assert_eq!(combo.kind(), ComboKind::Custom);
    }

    #[test]
    fn test_adding_to_outer_does_not_touch_inner() {
        let inner = Combo::beverage(canguil(), Product::new("Bebida"));
        let mut outer = Combo::new(inner);
        outer.add_extra(Product::new("Postre"));
        outer.add_extra(Product::new("Chocolate"));

        let FoodItem::Combo(inner) = outer.base() else {
            unreachable!("base was built from a combo");
        };
        assert_eq!(inner.extras().len(), 1);
        assert_eq!(
            outer.description(),
            "Canguil con: Bebida con: Postre, Chocolate"
        );
    }

    #[test]
    fn test_combo_without_extras_keeps_separator() {
        let combo = Combo::new(canguil());
        assert_eq!(combo.description(), "Canguil con: ");
    }

    #[test]
    fn test_extra_may_itself_be_a_combo() {
        let mut combo = Combo::new(Product::new("Hot-dog"));
        combo.add_extra(Combo::beverage(canguil(), Product::new("Bebida")));
        assert_eq!(combo.description(), "Hot-dog con: Canguil con: Bebida");
    }

    #[test]
    fn test_product_depth_is_zero() {
        assert_eq!(FoodItem::from(canguil()).depth(), 0);
    }

    proptest::proptest! {
        #[test]
        fn test_description_is_base_then_joined_extras(
            base in "[A-Za-z]{1,8}",
            extras in proptest::collection::vec("[A-Za-z]{1,8}", 0..5),
        ) {
            let mut combo = Combo::new(Product::new(base.clone()));
            for extra in &extras {
                combo.add_extra(Product::new(extra.clone()));
            }

            proptest::prop_assert_eq!(
                combo.description(),
                format!("{base}{COMBO_SEPARATOR}{}", extras.join(EXTRAS_SEPARATOR))
            );
            proptest::prop_assert_eq!(combo.extras().len(), extras.len());
        }

        #[test]
        fn test_each_layer_adds_one_suffix(layers in 1usize..6) {
            let mut item = FoodItem::from(canguil());
            let mut expected = "Canguil".to_string();
            for layer in 0..layers {
                let extra = format!("Extra{layer}");
                expected = format!("{expected}{COMBO_SEPARATOR}{extra}");
                item = Combo::dessert(item, Product::new(extra)).into();
            }

            proptest::prop_assert_eq!(item.description(), expected);
            proptest::prop_assert_eq!(item.depth(), layers);
        }
    }
}
