use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::PgPool;
use tracing::warn;

use crate::api::dtos::{HealthcheckResponse, SystemInfo};
use crate::application::{HotelService, ReviewService};
use crate::config::SecurityConfig;
use crate::error::{AppError, AppResult};
use crate::observability::AppMetrics;

pub mod hotels;
pub mod reviews;

#[derive(Clone)]
pub struct AppState {
    pub hotel_service: Arc<HotelService>,
    pub review_service: Arc<ReviewService>,
    pub security: SecurityConfig,
    pub app_environment: String,
    pub metrics: Arc<AppMetrics>,
    pub db_pool: PgPool,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .service(
                web::resource("/healthcheck")
                    .route(web::get().to(healthcheck))
                    .default_service(web::to(method_not_allowed)),
            )
            .configure(hotels::configure)
            .configure(reviews::configure),
    )
    .service(
        web::resource("/ready")
            .route(web::get().to(ready))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/metrics")
            .route(web::get().to(metrics))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Default service for the whole app: unknown routes get a JSON 404.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::not_found())
}

pub(crate) async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}

#[utoipa::path(
    get,
    path = "/v1/healthcheck",
    responses(
        (status = 200, description = "Service is available", body = HealthcheckResponse)
    ),
    tag = "health"
)]
pub(crate) async fn healthcheck(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthcheckResponse {
        status: "available".to_string(),
        system_info: SystemInfo {
            environment: state.app_environment.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Readiness check passed"),
        (status = 503, description = "Service not ready"),
    ),
    tag = "health"
)]
pub(crate) async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "readiness check failed");
            AppError::ServiceUnavailable {
                service: "database".to_string(),
                message: "service not ready".to_string(),
            }
        })?;
    Ok(HttpResponse::Ok().body("ready"))
}

async fn metrics(state: web::Data<AppState>, request: HttpRequest) -> AppResult<HttpResponse> {
    if !metrics_access_allowed(&state.security, &request) {
        return Err(AppError::Forbidden);
    }

    let (db_size, db_idle) = pool_stats(&state);
    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(state.metrics.render_prometheus(db_size, db_idle)))
}

/// A matching `x-admin-token` always grants access. Otherwise the peer must be
/// on a private network unless that restriction is disabled.
fn metrics_access_allowed(security: &SecurityConfig, request: &HttpRequest) -> bool {
    if let Some(token) = security
        .metrics_admin_token
        .as_deref()
        .filter(|token| !token.is_empty())
    {
        let admin_header = request
            .headers()
            .get("x-admin-token")
            .and_then(|value| value.to_str().ok());
        if admin_header == Some(token) {
            return true;
        }
    }

    if !security.metrics_allow_private_only {
        return true;
    }

    request
        .peer_addr()
        .map(|addr| is_private_or_loopback(addr.ip()))
        .unwrap_or(false)
}

fn is_private_or_loopback(ip: std::net::IpAddr) -> bool {
    match ip {
        std::net::IpAddr::V4(v4) => v4.is_private() || v4.is_loopback(),
        std::net::IpAddr::V6(v6) => v6.is_loopback() || v6.is_unique_local(),
    }
}

fn pool_stats(state: &web::Data<AppState>) -> (u32, usize) {
    (state.db_pool.size(), state.db_pool.num_idle())
}
