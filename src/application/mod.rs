//! Application layer orchestrating the fetch, map and stamp steps.
//!
//! # Modules
//!
//! - [`services`] - Services consumed by handlers and the CLI

pub mod services;
