//! # Movie Page
//!
//! A server-rendered movie listing backed by the OMDb search API, built with
//! Axum and Askama.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Movie entities, the record mapper and port traits
//! - **Application Layer** ([`application`]) - Fetch, map and timestamp orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - OMDb HTTP client
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Server-rendered HTML pages
//!
//! ## Flow
//!
//! A page request triggers one upstream search, the records are renamed into
//! [`domain::entities::Movie`] values by [`domain::mapper::map_movies`], and the
//! list is rendered together with the time it was generated. Nothing is cached
//! or retried.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: override the search term or API key
//! export OMDB_SEARCH="star wars"
//!
//! # Start the service
//! cargo run
//!
//! # Or prerender the page once
//! cargo run --bin movies -- render --out dist/movies.html
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

