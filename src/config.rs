//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded by the binaries via
//! `dotenvy`).
//!
//! ```bash
//! export OMDB_API_KEY="ad06eb84"
//! export OMDB_SEARCH="star wars"
//! export LISTEN="127.0.0.1:3000"
//! ```
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `OMDB_BASE_URL` - Search API endpoint (default: `http://www.omdbapi.com/`)
//! - `OMDB_API_KEY` - Search API key (default: the public demo key)
//! - `OMDB_SEARCH` - Title search term the page lists (default: `star wars`)
//! - `OMDB_TIMEOUT_SECONDS` - Upstream request timeout (default: 30, max: 300)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers for rate limiting

use anyhow::Result;
use std::env;

pub const DEFAULT_OMDB_BASE_URL: &str = "http://www.omdbapi.com/";
pub const DEFAULT_OMDB_API_KEY: &str = "ad06eb84";
pub const DEFAULT_OMDB_SEARCH: &str = "star wars";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub omdb_base_url: String,
    pub omdb_api_key: String,
    pub omdb_search: String,
    /// Upper bound for one upstream request, in seconds.
    pub omdb_timeout_seconds: u64,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            omdb_base_url: DEFAULT_OMDB_BASE_URL.to_string(),
            omdb_api_key: DEFAULT_OMDB_API_KEY.to_string(),
            omdb_search: DEFAULT_OMDB_SEARCH.to_string(),
            omdb_timeout_seconds: 30,
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults; call
    /// [`Config::validate`] to reject unusable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let omdb_base_url = env::var("OMDB_BASE_URL").unwrap_or(defaults.omdb_base_url);
        let omdb_api_key = env::var("OMDB_API_KEY").unwrap_or(defaults.omdb_api_key);
        let omdb_search = env::var("OMDB_SEARCH").unwrap_or(defaults.omdb_search);

        let omdb_timeout_seconds = env::var("OMDB_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.omdb_timeout_seconds);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.behind_proxy);

        Self {
            listen_addr,
            log_level,
            log_format,
            omdb_base_url,
            omdb_api_key,
            omdb_search,
            omdb_timeout_seconds,
            behind_proxy,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `omdb_base_url` is not an absolute http(s) URL
    /// - `omdb_api_key` or `omdb_search` is empty
    /// - `omdb_timeout_seconds` is outside `1..=300`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        match url::Url::parse(&self.omdb_base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => anyhow::bail!(
                "OMDB_BASE_URL must be an http:// or https:// URL, got '{}'",
                self.omdb_base_url
            ),
        }

        if self.omdb_api_key.trim().is_empty() {
            anyhow::bail!("OMDB_API_KEY must not be empty");
        }

        if self.omdb_search.trim().is_empty() {
            anyhow::bail!("OMDB_SEARCH must not be empty");
        }

        if self.omdb_timeout_seconds == 0 || self.omdb_timeout_seconds > 300 {
            anyhow::bail!(
                "OMDB_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.omdb_timeout_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Movie API: {}", self.omdb_base_url);
        tracing::info!("  Movie API key: {}", mask_secret(&self.omdb_api_key));
        tracing::info!("  Search term: {}", self.omdb_search);
        tracing::info!("  Upstream timeout: {}s", self.omdb_timeout_seconds);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping at most the first two characters.
///
/// - `ad06eb84` → `ad***`
/// - `ab` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(2).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
