//! Server-rendered pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`error`] - HTML error page for failed renders
//! - [`prerender`] - One-shot rendering to a string or file
//! - [`routes`] - Page route configuration

pub mod error;
pub mod handlers;
pub mod prerender;
pub mod routes;
