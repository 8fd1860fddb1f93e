//! Application error type and its JSON rendering.
//!
//! Every fallible operation in the service returns [`AppError`]. API handlers
//! return it directly and it renders as a JSON error body; page handlers wrap it
//! in [`crate::web::error::PageError`] to render an HTML error page instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The movie search API could not be reached or returned something unusable.
    #[error("upstream error: {message}")]
    Upstream { message: String, details: Value },

    #[error("internal error: {message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status reported to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Upstream { .. } => "upstream_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Upstream { message, .. } | AppError::Internal { message, .. } => message,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            "Movie search API timed out".to_string()
        } else if e.is_decode() {
            "Movie search API returned a malformed response".to_string()
        } else if let Some(status) = e.status() {
            format!("Movie search API responded with status {}", status.as_u16())
        } else {
            "Movie search API request failed".to_string()
        };

        tracing::warn!(error = %e, "{}", message);

        let details = match e.status() {
            Some(status) => json!({ "status": status.as_u16() }),
            None => json!({}),
        };

        AppError::upstream(message, details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let (message, details) = match self {
            AppError::Upstream { message, details } | AppError::Internal { message, details } => {
                (message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_maps_to_bad_gateway() {
        let err = AppError::upstream("Movie not found!", json!({}));

        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "upstream_error");
        assert_eq!(err.message(), "Movie not found!");
    }

    #[test]
    fn test_internal_maps_to_server_error() {
        let err = AppError::internal("Template rendering failed", json!({}));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "internal_error");
    }

    #[test]
    fn test_display_includes_message() {
        let err = AppError::upstream("Invalid API key!", json!({}));
        assert_eq!(err.to_string(), "upstream error: Invalid API key!");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::upstream("boom", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
