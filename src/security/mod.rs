pub mod cors;
pub mod headers;
pub mod rate_limit;

pub use cors::cors_middleware;
pub use headers::security_headers;
pub use rate_limit::per_ip_rate_limiting;
