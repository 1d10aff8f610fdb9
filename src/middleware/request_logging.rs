//! Per-request context for the structured access log.

use std::time::Instant;

use actix_web::dev::ServiceRequest;
use actix_web::http::header::{self, HeaderValue};
use tracing::{info, Span};
use uuid::Uuid;

use crate::observability::error_tracking::capture_unexpected_5xx;
use crate::observability::AppMetrics;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Captured when a request enters the app and completed once its response is
/// ready.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub method: String,
    pub path: String,
    pub client_ip: String,
    started: Instant,
}

impl RequestContext {
    pub fn new(req: &ServiceRequest) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            method: req.method().to_string(),
            path: req.path().to_string(),
            client_ip: get_client_ip(req),
            started: Instant::now(),
        }
    }

    pub fn request_id_header(&self) -> HeaderValue {
        HeaderValue::from_str(&self.request_id)
            .unwrap_or_else(|_| HeaderValue::from_static("invalid-request-id"))
    }

    pub fn span(&self, req: &ServiceRequest) -> Span {
        create_request_span(
            &self.request_id,
            &self.method,
            &self.path,
            &self.client_ip,
            &get_user_agent(req),
        )
    }

    /// Records metrics and emits the `request completed` event. Returns the
    /// error-tracking event id for unexpected 5xx responses.
    pub fn complete(&self, status: u16, metrics: &AppMetrics) -> Option<Uuid> {
        let latency_ms = self.started.elapsed().as_millis() as u64;
        metrics.record_request(status, latency_ms);

        info!(
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            client_ip = %self.client_ip,
            status = status,
            status_class = get_status_class(status),
            latency_ms = latency_ms,
            "request completed"
        );

        if status >= 500 {
            capture_unexpected_5xx(&self.path, &self.method, status, &self.request_id).ok()
        } else {
            None
        }
    }
}

/// Get client IP address from request.
///
/// Uses realip_remote_addr(), which honours Forwarded/X-Forwarded-For headers.
/// Treat the value as informational only.
pub fn get_client_ip(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn get_user_agent(req: &ServiceRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

pub fn create_request_span(
    request_id: &str,
    method: &str,
    path: &str,
    client_ip: &str,
    user_agent: &str,
) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        client_ip = %client_ip,
        user_agent = %user_agent
    )
}

/// Get HTTP status class for grouping (2xx, 3xx, 4xx, 5xx)
pub fn get_status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}
