//! Movie listing service.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::MoviePage;
use crate::domain::mapper::map_movies;
use crate::domain::repositories::MovieCatalog;
use crate::error::AppError;

/// Produces the movie page context for a fixed search term.
///
/// Each call performs one catalog search, maps the records and stamps the
/// result with the current time. Nothing is cached between calls.
pub struct MovieService {
    catalog: Arc<dyn MovieCatalog>,
    search: String,
}

impl MovieService {
    /// Creates a service searching `catalog` for `search`.
    pub fn new(catalog: Arc<dyn MovieCatalog>, search: impl Into<String>) -> Self {
        Self {
            catalog,
            search: search.into(),
        }
    }

    /// The search term every page is built from.
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Fetches and maps the movie list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the catalog search fails.
    pub async fn list_movies(&self) -> Result<MoviePage, AppError> {
        let records = self.catalog.search(&self.search).await?;
        let movies = map_movies(&records);

        tracing::debug!(count = movies.len(), search = %self.search, "Built movie page");

        Ok(MoviePage::new(movies, Utc::now()))
    }
}
