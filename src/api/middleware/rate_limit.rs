//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-IP rate limiter for page requests.
///
/// Each client gets a bucket of `burst_size` requests that refills at
/// `per_second` requests per second (defaults: 2 and 100, see
/// [`crate::config::Config`]). Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info`.
///
/// # Panics
///
/// Panics if either value is zero; [`crate::config::Config::validate`]
/// rejects such configurations at startup.
pub fn layer(
    per_second: u64,
    burst_size: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit values must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
