//! Handler for the movie list as JSON.

use axum::{Json, extract::State};

use crate::domain::entities::MoviePage;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the same page context the HTML page renders.
///
/// # Endpoint
///
/// `GET /api/movies`
///
/// # Response Codes
///
/// - **200 OK**: Movies fetched
/// - **502 Bad Gateway**: The movie search API failed
///
/// # Response
///
/// ```json
/// {
///   "movies": [
///     { "id": "tt0076759", "title": "A New Hope", "year": "1977", "type": "movie", "poster": "https://..." }
///   ],
///   "generatedAt": "2024-01-01T12:00:00.000Z"
/// }
/// ```
pub async fn movies_json_handler(
    State(state): State<AppState>,
) -> Result<Json<MoviePage>, AppError> {
    let page = state.movie_service.list_movies().await?;
    Ok(Json(page))
}
