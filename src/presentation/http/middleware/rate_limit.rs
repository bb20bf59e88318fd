// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

const REQUESTS_PER_SECOND: u64 = 10;
const BURST_SIZE: u32 = 20;

/// Per-client-IP request throttling for the whole API. Chat messages carry
/// their own per-actor limit on top of this.
pub fn rate_limit_layer() -> Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(REQUESTS_PER_SECOND);
    builder.burst_size(BURST_SIZE);
    builder
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .map(GovernorLayer::new)
}
