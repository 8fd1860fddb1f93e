//! OMDb search client built on reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use url::Url;

use super::response::SearchResponse;
use crate::config::Config;
use crate::domain::entities::ExternalMovieRecord;
use crate::domain::repositories::MovieCatalog;
use crate::error::AppError;

/// [`MovieCatalog`] backed by the OMDb search endpoint.
///
/// One [`search`](MovieCatalog::search) call issues exactly one
/// `GET {base_url}?apikey={key}&s={query}` request. The only policy applied
/// is the request timeout configured on the underlying client.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl OmdbClient {
    /// Creates a client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if `base_url` is not a valid URL or the
    /// HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::internal(
                "Invalid movie search API URL",
                json!({ "url": base_url, "reason": e.to_string() }),
            )
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::internal(
                    "Failed to build HTTP client",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Creates a client from the service configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            &config.omdb_base_url,
            config.omdb_api_key.clone(),
            Duration::from_secs(config.omdb_timeout_seconds),
        )
    }

    /// Builds the search URL. Spaces are encoded as `%20`.
    fn search_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(Some(&format!(
            "apikey={}&s={}",
            urlencoding::encode(&self.api_key),
            urlencoding::encode(query)
        )));
        url
    }
}

#[async_trait]
impl MovieCatalog for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<ExternalMovieRecord>, AppError> {
        tracing::debug!(host = ?self.base_url.host_str(), query, "Searching movies");

        let response = self
            .client
            .get(self.search_url(query))
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!(status = %response.status(), "Movie search responded");

        let body: SearchResponse = response.json().await?;
        let records = body.into_records().inspect_err(|e| {
            tracing::warn!(query, error = %e, "Movie search rejected the query");
        })?;

        tracing::debug!(count = records.len(), "Received movie records");

        Ok(records)
    }
}
