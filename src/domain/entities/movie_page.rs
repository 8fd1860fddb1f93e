//! Page context shared by the HTML and JSON renderings.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::Movie;

/// Movies plus the moment the page was generated.
///
/// Serializes as `{ "movies": [...], "generatedAt": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    /// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-01-01T12:00:00.000Z`.
    pub generated_at: String,
}

impl MoviePage {
    pub fn new(movies: Vec<Movie>, generated_at: DateTime<Utc>) -> Self {
        Self {
            movies,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generated_at_format() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let page = MoviePage::new(vec![], at);

        assert_eq!(page.generated_at, "2024-01-01T12:00:00.000Z");
    }

    #[test]
    fn test_serializes_camel_case() {
        let at = Utc.with_ymd_and_hms(2023, 5, 4, 8, 30, 15).unwrap();
        let value = serde_json::to_value(MoviePage::new(vec![], at)).unwrap();

        assert_eq!(value["generatedAt"], "2023-05-04T08:30:15.000Z");
        assert!(value["movies"].as_array().unwrap().is_empty());
        assert!(value.get("generated_at").is_none());
    }
}
