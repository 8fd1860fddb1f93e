//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::MovieService;

/// Read-only application state, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
}

impl AppState {
    pub fn new(movie_service: Arc<MovieService>) -> Self {
        Self { movie_service }
    }
}
