//! Movie list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::{Movie, MoviePage};
use crate::state::AppState;
use crate::web::error::PageError;

/// Template for the movie list page.
///
/// Renders `templates/movies.html` with:
/// - The generation timestamp
/// - One card per movie (poster and title)
#[derive(Template, WebTemplate)]
#[template(path = "movies.html")]
pub struct MoviesTemplate {
    pub movies: Vec<Movie>,
    pub generated_at: String,
}

impl From<MoviePage> for MoviesTemplate {
    fn from(page: MoviePage) -> Self {
        Self {
            movies: page.movies,
            generated_at: page.generated_at,
        }
    }
}

/// Renders the movie list.
///
/// # Endpoint
///
/// `GET /movies`
///
/// # Response Codes
///
/// - **200 OK**: Page rendered
/// - **502 Bad Gateway**: The movie search API failed (HTML error page)
pub async fn movies_handler(
    State(state): State<AppState>,
) -> Result<MoviesTemplate, PageError> {
    let page = state.movie_service.list_movies().await?;
    Ok(page.into())
}
