//! Port traits for the domain layer.
//!
//! Traits define the contract for fetching data; implementations live in
//! `crate::infrastructure`. Mock implementations are auto-generated via
//! `mockall` for unit tests.
//!
//! # Available Ports
//!
//! - [`MovieCatalog`] - Movie search against a third-party API

pub mod movie_catalog;

pub use movie_catalog::MovieCatalog;

#[cfg(test)]
pub use movie_catalog::MockMovieCatalog;
