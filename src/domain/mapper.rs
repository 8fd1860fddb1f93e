//! Conversion from upstream records to domain movies.

use crate::domain::entities::{ExternalMovieRecord, Movie};

impl From<&ExternalMovieRecord> for Movie {
    fn from(record: &ExternalMovieRecord) -> Self {
        Self {
            id: record.imdb_id.clone(),
            title: record.title.clone(),
            year: record.year.clone(),
            kind: record.kind.clone(),
            poster: record.poster.clone(),
        }
    }
}

/// Maps upstream records to movies, one to one and in order.
///
/// Only renames fields: `imdbID` becomes `id`, `Title`/`Year`/`Type`/`Poster`
/// become their lowercase counterparts. Absent fields stay absent. Nothing is
/// validated, filtered or reordered, and the input is left untouched.
pub fn map_movies(records: &[ExternalMovieRecord]) -> Vec<Movie> {
    records.iter().map(Movie::from).collect()
}
