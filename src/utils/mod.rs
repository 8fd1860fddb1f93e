//! Helper functions used across the application.
//!
//! - [`base_url`] - Public base URL derivation from the request

pub mod base_url;
