use actix_governor::{
    governor::middleware::NoOpMiddleware, Governor, GovernorConfigBuilder, PeerIpKeyExtractor,
};
use actix_web::middleware::Condition;

use crate::config::SecurityConfig;

pub type PeerIpGovernor = Governor<PeerIpKeyExtractor, NoOpMiddleware>;

/// Token bucket keyed by peer IP: `rate_limit_rps` tokens per second refill a
/// bucket of `rate_limit_burst`. Requests over the limit get 429.
pub fn per_ip_rate_limiting(security_config: &SecurityConfig) -> Condition<PeerIpGovernor> {
    let rps = security_config.rate_limit_rps.clamp(1, 1_000);
    let burst_size = security_config.rate_limit_burst.max(1);

    if security_config.rate_limit_enabled && burst_size > 1000 {
        tracing::warn!(
            burst_size,
            "rate_limit_burst is unusually high; consider reducing to avoid abuse"
        );
    }

    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(1_000 / rps)
        .burst_size(burst_size)
        .finish()
        .unwrap_or_default();

    Condition::new(
        security_config.rate_limit_enabled,
        Governor::new(&governor_config),
    )
}
