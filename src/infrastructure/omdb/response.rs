//! Wire format of the OMDb search endpoint.

use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::ExternalMovieRecord;
use crate::error::AppError;

/// Body of `GET /?s=...`.
///
/// OMDb answers failed searches (no match, bad key) with HTTP 200 and
/// `{"Response": "False", "Error": "..."}`.
#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(rename = "Search")]
    pub search: Option<Vec<ExternalMovieRecord>>,

    #[serde(rename = "Response")]
    pub response: Option<String>,

    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Extracts the `Search` array, turning an OMDb-reported failure into an error.
    pub fn into_records(self) -> Result<Vec<ExternalMovieRecord>, AppError> {
        if self
            .response
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("false"))
        {
            let message = self
                .error
                .unwrap_or_else(|| "Movie search API reported a failure".to_string());
            return Err(AppError::upstream(message, json!({})));
        }

        self.search.ok_or_else(|| {
            AppError::upstream(
                "Movie search API response has no Search field",
                json!({}),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> SearchResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_into_records_success() {
        let response = parse(json!({
            "Search": [
                { "Title": "A New Hope", "Year": "1977", "imdbID": "tt0076759", "Type": "movie", "Poster": "N/A" }
            ],
            "totalResults": "1",
            "Response": "True"
        }));

        let records = response.into_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].imdb_id.as_deref(), Some("tt0076759"));
    }

    #[test]
    fn test_into_records_reported_failure() {
        let response = parse(json!({ "Response": "False", "Error": "Movie not found!" }));

        let err = response.into_records().unwrap_err();
        assert_eq!(err.message(), "Movie not found!");
    }

    #[test]
    fn test_into_records_failure_without_message() {
        let response = parse(json!({ "Response": "False" }));

        let err = response.into_records().unwrap_err();
        assert!(matches!(err, AppError::Upstream { .. }));
    }

    #[test]
    fn test_into_records_missing_search() {
        let response = parse(json!({ "Response": "True" }));
        assert!(response.into_records().is_err());
    }

    #[test]
    fn test_into_records_empty_search() {
        let response = parse(json!({ "Search": [], "Response": "True" }));
        assert!(response.into_records().unwrap().is_empty());
    }
}
