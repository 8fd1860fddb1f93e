//! Movie entry in the shape the search API returns it.

use serde::{Deserialize, Serialize};

/// A raw movie entry from the OMDb `Search` array.
///
/// Every field is optional on the wire: an absent or `null` field decodes to
/// `None` instead of failing the whole response. A field of the wrong JSON type
/// still fails decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalMovieRecord {
    #[serde(rename = "Title")]
    pub title: Option<String>,

    #[serde(rename = "Year")]
    pub year: Option<String>,

    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,

    #[serde(rename = "Type")]
    pub kind: Option<String>,

    /// Poster URL, or the literal `N/A` when the API has none.
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

impl ExternalMovieRecord {
    /// Creates a record with every field present.
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        imdb_id: impl Into<String>,
        kind: impl Into<String>,
        poster: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            year: Some(year.into()),
            imdb_id: Some(imdb_id.into()),
            kind: Some(kind.into()),
            poster: Some(poster.into()),
        }
    }
}
