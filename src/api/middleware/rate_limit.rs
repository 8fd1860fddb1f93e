//! Rate limiting middleware using token bucket algorithm.
//!
//! Every page render spends one request of the upstream API key's quota, so
//! rendering routes are limited per client IP.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Creates a rate limiter keyed by the given extractor.
///
/// # Limits
///
/// - **Rate**: 1 request per second replenished
/// - **Burst**: 20 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// Spawns a background task that drops idle per-IP buckets every
/// [`PRUNE_INTERVAL`], so it must be called inside a Tokio runtime.
pub fn layer_with<K>(key_extractor: K) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
    K::Key: Send + Sync + 'static,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(1)
            .burst_size(20)
            .finish()
            .unwrap(),
    );

    let limiter = governor_conf.limiter().clone();
    spawn_pruning(PRUNE_INTERVAL, move || {
        limiter.retain_recent();
        limiter.len()
    });

    GovernorLayer::new(governor_conf)
}

/// How often idle rate limiter buckets are dropped.
pub const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

/// Runs `prune` every `every` until the runtime shuts down.
///
/// `prune` returns the number of keys still tracked, which is logged.
pub fn spawn_pruning<F>(every: Duration, prune: F) -> JoinHandle<()>
where
    F: Fn() -> usize + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // First tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            let tracked = prune();
            tracing::debug!(tracked, "Pruned rate limiter state");
        }
    })
}

/// Rate limiter keyed by the socket peer address.
///
/// Requires the server to be started with connect info
/// (`into_make_service_with_connect_info::<SocketAddr>`).
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    layer_with(PeerIpKeyExtractor)
}

/// Rate limiter keyed by `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
/// falling back to the peer address.
///
/// Use only behind a trusted reverse proxy; clients can forge these headers.
pub fn proxy_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    layer_with(SmartIpKeyExtractor)
}
