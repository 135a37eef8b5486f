//! Listeners reacting to catalog changes.

use crate::types::{CatalogAction, Movie};
use cinema_core::channel::Listener;
use cinema_core::error::ListenerError;

/// Announces every catalog change on stdout and in the logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogChangeLogger;

impl CatalogChangeLogger {
    /// Line printed for one change.
    #[must_use]
    pub fn message(action: CatalogAction, movie: &Movie) -> String {
        format!("Película {} ha sido {action}", movie.title())
    }
}

impl Listener<CatalogAction, Movie> for CatalogChangeLogger {
    fn on_notify(&self, action: &CatalogAction, movie: &Movie) -> Result<(), ListenerError> {
        tracing::info!(title = movie.title(), action = %action, "Catalog changed");
        println!("{}", Self::message(*action, movie));
        Ok(())
    }

    fn name(&self) -> &str {
        "catalog-change-logger"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_movie_and_action() {
        assert_eq!(
            CatalogChangeLogger::message(CatalogAction::Added, &Movie::new("John Wick")),
            "Película John Wick ha sido agregar"
        );
    }

    #[test]
    fn test_logger_never_fails() {
        let logger = CatalogChangeLogger;
        assert!(logger.on_notify(&CatalogAction::Added, &Movie::new("Aladdin")).is_ok());
    }
}
