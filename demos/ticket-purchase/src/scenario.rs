//! The scripted purchase flow run by the binary.
//!
//! 1. Register the change logger on the catalog
//! 2. Add the featured movies (one broadcast each)
//! 3. Print the catalog listing
//! 4. Build the hall and the combo, book a seat for the first movie

use crate::catalog::MovieCatalog;
use crate::config::Config;
use crate::error::CinemaError;
use crate::hall::Hall;
use crate::listener::CatalogChangeLogger;
use crate::purchase::Purchase;
use crate::types::{Customer, Movie};
use cinema_core::combo::{Combo, FoodItem};
use cinema_core::describable::Product;
use cinema_core::environment::Clock;
use std::sync::Arc;

/// Movies added to the catalog at startup, in order.
pub const FEATURED_MOVIES: [&str; 3] = ["John Wick", "Aladdin", "Avengers"];

/// Popcorn with a drink, wrapped again with a dessert.
#[must_use]
pub fn full_combo() -> FoodItem {
    let with_drink = Combo::beverage(Product::new("Canguil"), Product::new("Bebida"));
    Combo::dessert(with_drink, Product::new("Postre")).into()
}

/// Runs the purchase flow against `catalog` and returns the purchase.
///
/// # Errors
///
/// - [`CinemaError::Listener`] if a catalog listener fails
/// - [`CinemaError::InvalidHallNumber`] if the configured hall number is not positive
pub fn run(
    config: &Config,
    catalog: &MovieCatalog,
    clock: &dyn Clock,
) -> Result<Purchase, CinemaError> {
    catalog.subscribe(Arc::new(CatalogChangeLogger));

    for title in FEATURED_MOVIES {
        catalog.add_movie(Movie::new(title))?;
    }

    println!("Listado de Películas:");
    for movie in catalog.list_movies() {
        println!("{}", movie.title());
    }

    let mut hall = Hall::new(config.hall.number, config.hall.snacks.iter().cloned())?;
    let customer = Customer::new(config.customer.as_str());
    let featured = Movie::new(FEATURED_MOVIES[0]);

    Ok(Purchase::book(customer, featured, &mut hall, vec![full_combo()], clock))
}
