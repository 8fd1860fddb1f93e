//! HTML template rendering handlers.

mod index;
mod movies;

pub use index::{IndexTemplate, PageLink, index_handler};
pub use movies::{MoviesTemplate, movies_handler};
