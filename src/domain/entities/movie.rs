//! Movie entity used for rendering.

use serde::Serialize;

/// Placeholder the search API uses for a missing poster.
const NO_POSTER: &str = "N/A";

/// A movie as rendered on the page.
///
/// Created from one [`super::ExternalMovieRecord`] by
/// [`crate::domain::mapper::map_movies`] and never modified afterwards.
/// Fields missing upstream stay `None` and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub poster: Option<String>,
}

impl Movie {
    /// Title for display, `Untitled` when upstream omitted it.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Poster URL suitable for an `<img src>`, if the movie has one.
    pub fn poster_src(&self) -> Option<&str> {
        self.poster
            .as_deref()
            .filter(|p| !p.is_empty() && *p != NO_POSTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn movie(title: Option<&str>, poster: Option<&str>) -> Movie {
        Movie {
            id: Some("tt0076759".to_string()),
            title: title.map(str::to_string),
            year: Some("1977".to_string()),
            kind: Some("movie".to_string()),
            poster: poster.map(str::to_string),
        }
    }

    #[test]
    fn test_serializes_internal_field_names() {
        let value = serde_json::to_value(movie(Some("A New Hope"), Some("http://x/p.jpg"))).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "tt0076759",
                "title": "A New Hope",
                "year": "1977",
                "type": "movie",
                "poster": "http://x/p.jpg"
            })
        );
    }

    #[test]
    fn test_missing_fields_serialize_as_null() {
        let value = serde_json::to_value(movie(None, None)).unwrap();

        assert!(value["title"].is_null());
        assert!(value["poster"].is_null());
    }

    #[test]
    fn test_display_title_fallback() {
        assert_eq!(movie(Some("Rogue One"), None).display_title(), "Rogue One");
        assert_eq!(movie(None, None).display_title(), "Untitled");
    }

    #[test]
    fn test_poster_src_skips_placeholder() {
        assert_eq!(
            movie(None, Some("http://x/p.jpg")).poster_src(),
            Some("http://x/p.jpg")
        );
        assert_eq!(movie(None, Some("N/A")).poster_src(), None);
        assert_eq!(movie(None, Some("")).poster_src(), None);
        assert_eq!(movie(None, None).poster_src(), None);
    }
}
