//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, movies_handler};
use axum::{Router, routing::get};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET /` - Landing page with links to the other pages
/// - `GET /movies` - Movie list fetched from the search API
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/movies", get(movies_handler))
}
