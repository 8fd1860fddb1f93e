//! Core data structures of the movie page.
//!
//! - [`ExternalMovieRecord`] - A movie entry as returned by the search API
//! - [`Movie`] - The renamed entry used for rendering
//! - [`MoviePage`] - Movies plus the generation timestamp handed to templates
//!
//! Entities are plain data. Serialization is handled by serde derives only.

pub mod external_movie;
pub mod movie;
pub mod movie_page;

pub use external_movie::ExternalMovieRecord;
pub use movie::Movie;
pub use movie_page::MoviePage;
