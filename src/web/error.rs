//! HTML error page for page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Template for the error page.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub reason: String,
    pub message: String,
}

/// [`AppError`] rendered as an HTML page with the matching status code.
///
/// Page handlers return `Result<_, PageError>` so a failed upstream search
/// shows a page instead of the JSON body API handlers use.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();

        tracing::error!(error = %self.0, status = status.as_u16(), "Page rendering failed");

        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.0.message().to_string(),
        };

        (status, page).into_response()
    }
}
