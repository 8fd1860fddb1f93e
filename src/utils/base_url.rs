//! Public base URL derivation from the incoming request.

use axum::http::{HeaderMap, Uri, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the base URL the client used to reach the service.
///
/// The scheme comes from `X-Forwarded-Proto` (first entry when a proxy chain
/// appended several), then the request URI's scheme, defaulting to `http`.
/// The authority is the `Host` header, then the request URI's authority
/// (HTTP/2 sends `:authority` instead of `Host`), then `localhost`.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "movies.example.com".parse().unwrap());
/// headers.insert("x-forwarded-proto", "https".parse().unwrap());
///
/// let uri: Uri = "/".parse().unwrap();
/// assert_eq!(base_url_from_request(&headers, &uri), "https://movies.example.com");
/// ```
pub fn base_url_from_request(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");

    format!("{scheme}://{host}")
}
