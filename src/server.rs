//! HTTP server initialization and runtime setup.
//!
//! Wires the movie search client into the services and runs the Axum server
//! until Ctrl-C.

use crate::application::services::MovieService;
use crate::config::Config;
use crate::infrastructure::omdb::OmdbClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the movie search client cannot be created.
pub fn build_state(config: &Config) -> Result<AppState> {
    let catalog = OmdbClient::from_config(config).context("Failed to create movie search client")?;
    let movie_service = MovieService::new(Arc::new(catalog), config.omdb_search.clone());

    Ok(AppState::new(Arc::new(movie_service)))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - OMDb search client
/// - Movie service
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The movie search client cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!(search = %config.omdb_search, "Movie service ready");

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Logs a failed startup as a `SERVER_BOOTSTRAP_ERROR` event.
///
/// The event carries the top-level error as `message` and the full cause
/// chain as `stack`.
pub fn report_bootstrap_error(error: &anyhow::Error) {
    tracing::error!(event = "SERVER_BOOTSTRAP_ERROR", message = %error, stack = ?error);
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_json(f: impl FnOnce()) -> serde_json::Value {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        let line = output.lines().next().unwrap();
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn test_report_bootstrap_error_fields() {
        let error =
            anyhow::anyhow!("address already in use").context("Failed to bind 0.0.0.0:3000");

        let event = capture_json(|| report_bootstrap_error(&error));

        assert_eq!(event["level"], "ERROR");
        assert_eq!(event["fields"]["event"], "SERVER_BOOTSTRAP_ERROR");
        assert_eq!(event["fields"]["message"], "Failed to bind 0.0.0.0:3000");

        let stack = event["fields"]["stack"].as_str().unwrap();
        assert!(stack.contains("Failed to bind 0.0.0.0:3000"));
        assert!(stack.contains("address already in use"));
    }

    #[test]
    fn test_build_state_rejects_invalid_base_url() {
        let config = Config {
            omdb_base_url: "not a url".to_string(),
            ..Config::default()
        };

        assert!(build_state(&config).is_err());
    }
}
