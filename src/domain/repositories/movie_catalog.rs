//! Port for searching movies in an external catalog.

use crate::domain::entities::ExternalMovieRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Source of upstream movie records.
///
/// # Implementations
///
/// - [`crate::infrastructure::omdb::OmdbClient`] - OMDb search API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Searches the catalog by title and returns the matching records in
    /// upstream order.
    ///
    /// Issues exactly one upstream request; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the request fails, the response is
    /// not valid JSON, or the catalog reports an error for the query.
    async fn search(&self, query: &str) -> Result<Vec<ExternalMovieRecord>, AppError>;
}
