//! The shared movie catalog.
//!
//! There is exactly one catalog per run. It is created once at startup and
//! handed to whoever needs it; [`MovieCatalog`] is a cheap handle and every
//! clone points at the same state:
//!
//! ```text
//!   main ──► MovieCatalog::new() ──┬──► scenario (add / list)
//!                                  └──► listeners registered by anyone
//!                    Arc<RwLock<CatalogState>>
//! ```
//!
//! Adding a movie appends it and then broadcasts [`CatalogAction::Added`] to
//! every subscriber. The broadcast runs after the lock is released, so
//! listeners may read the catalog themselves.
//!
//! # Example
//!
//! ```
//! use ticket_purchase::catalog::MovieCatalog;
//! use ticket_purchase::types::Movie;
//!
//! let catalog = MovieCatalog::new();
//! let same = catalog.clone();
//!
//! catalog.add_movie(Movie::new("Aladdin")).unwrap();
//! assert_eq!(same.list_movies(), vec![Movie::new("Aladdin")]);
//! assert!(catalog.same_catalog(&same));
//! ```

use crate::types::{CatalogAction, Movie};
use cinema_core::channel::{NotificationChannel, SharedListener, SubscriptionId};
use cinema_core::error::ListenerError;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Listener type accepted by the catalog.
pub type CatalogListener = SharedListener<CatalogAction, Movie>;

#[derive(Debug, Default)]
struct CatalogState {
    movies: Vec<Movie>,
    listeners: NotificationChannel<CatalogAction, Movie>,
}

/// Handle to the process-wide movie catalog.
#[derive(Clone, Debug, Default)]
pub struct MovieCatalog {
    state: Arc<RwLock<CatalogState>>,
}

impl MovieCatalog {
    /// Creates an empty catalog with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if both handles refer to the same catalog.
    #[must_use]
    pub fn same_catalog(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Appends `movie` and notifies every listener with [`CatalogAction::Added`].
    ///
    /// # Errors
    ///
    /// Returns the first listener failure. The movie stays in the catalog and
    /// listeners after the failing one are skipped.
    pub fn add_movie(&self, movie: Movie) -> Result<(), ListenerError> {
        let listeners = {
            let mut state = self.write();
            state.movies.push(movie.clone());
            state.listeners.clone()
        };
        tracing::info!(
            title = movie.title(),
            listeners = listeners.len(),
            "Movie added to catalog"
        );
        listeners.notify(&CatalogAction::Added, &movie)
    }

    /// Snapshot of the catalog in insertion order.
    ///
    /// The returned vector is a copy; changing it does not touch the catalog.
    #[must_use]
    pub fn list_movies(&self) -> Vec<Movie> {
        self.read().movies.clone()
    }

    /// First movie with exactly this title.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<Movie> {
        self.read()
            .movies
            .iter()
            .find(|movie| movie.title() == title)
            .cloned()
    }

    /// Number of movies in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().movies.len()
    }

    /// Returns `true` if no movie was added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().movies.is_empty()
    }

    /// Registers a listener for every later change.
    pub fn subscribe(&self, listener: CatalogListener) -> SubscriptionId {
        self.write().listeners.subscribe(listener)
    }

    /// Removes a registration. Unknown handles are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.write().listeners.unsubscribe(id)
    }

    /// Number of active listener registrations.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.read().listeners.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
