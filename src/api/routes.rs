//! API route configuration.

use crate::api::handlers::movies_json_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /movies` - Movie list with generation timestamp
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/movies", get(movies_json_handler))
}
