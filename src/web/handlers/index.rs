//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::{HeaderMap, Uri};
use axum::response::IntoResponse;

use crate::utils::base_url::base_url_from_request;

/// A link shown on the landing page.
#[derive(Debug, Clone)]
pub struct PageLink {
    pub title: &'static str,
    pub url: String,
}

/// Template for the landing page.
///
/// Renders `templates/index.html` with the base URL the client used and
/// absolute links to the other endpoints.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub base_url: String,
    pub links: Vec<PageLink>,
}

impl IndexTemplate {
    pub fn new(base_url: String) -> Self {
        let links = vec![
            PageLink {
                title: "Movies",
                url: format!("{base_url}/movies"),
            },
            PageLink {
                title: "Movies (JSON)",
                url: format!("{base_url}/api/movies"),
            },
            PageLink {
                title: "Health",
                url: format!("{base_url}/health"),
            },
        ];

        Self { base_url, links }
    }
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
///
/// The base URL is derived from `X-Forwarded-Proto` and `Host` (or the URI
/// authority on HTTP/2), see [`base_url_from_request`].
pub async fn index_handler(uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    IndexTemplate::new(base_url_from_request(&headers, &uri))
}
