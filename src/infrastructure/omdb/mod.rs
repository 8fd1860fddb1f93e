//! OMDb search API integration.
//!
//! Provides [`OmdbClient`], the [`crate::domain::repositories::MovieCatalog`]
//! implementation used in production.

mod client;
mod response;

pub use client::OmdbClient;
