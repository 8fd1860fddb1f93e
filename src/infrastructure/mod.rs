//! Infrastructure layer for external integrations.
//!
//! Implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`omdb`] - OMDb search API client

pub mod omdb;
