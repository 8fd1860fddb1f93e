//! Data Transfer Objects for API responses.
//!
//! The movie list itself is served as [`crate::domain::entities::MoviePage`],
//! whose serde representation is already the public contract.

pub mod health;
