//! Domain layer containing the movie model and the record mapper.
//!
//! # Architecture
//!
//! - [`entities`] - Upstream records, rendered movies and the page context
//! - [`mapper`] - Pure conversion from upstream records to domain movies
//! - [`repositories`] - Port traits implemented by the infrastructure layer
//!
//! # Render Flow
//!
//! 1. A page handler asks [`crate::application::services::MovieService`] for a page
//! 2. The service queries a [`repositories::MovieCatalog`] for upstream records
//! 3. [`mapper::map_movies`] renames the fields into [`entities::Movie`] values
//! 4. The resulting [`entities::MoviePage`] is rendered as HTML or JSON
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod mapper;
pub mod repositories;
