use std::sync::Arc;

use actix_web::dev::{Service as _, ServiceResponse};
use actix_web::{web, App, HttpServer};
use hotel_api::api::openapi::configure_swagger_ui;
use hotel_api::api::routes::{self, AppState};
use hotel_api::application::{HotelService, ReviewService};
use hotel_api::config::AppConfig;
use hotel_api::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use hotel_api::infrastructure::openai::{DisabledSummarizer, HttpOpenAiClient, ReviewSummarizer};
use hotel_api::infrastructure::repositories::{HotelRepositoryImpl, ReviewRepositoryImpl};
use hotel_api::middleware::request_logging::REQUEST_ID_HEADER;
use hotel_api::middleware::RequestContext;
use hotel_api::observability::{init_tracing, AppMetrics};
use hotel_api::security::{cors_middleware, per_ip_rate_limiting, security_headers};
use tracing::{info, warn, Instrument};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    config.validate()?;
    init_tracing(&config.logging);

    let pool = create_pool(&config.database).await?;
    run_migrations(&pool).await?;
    info!("database connection pool established");

    let query_timeout = config.database.query_timeout();
    let hotel_repo = Arc::new(HotelRepositoryImpl::new(pool.clone(), query_timeout));
    let review_repo = Arc::new(ReviewRepositoryImpl::new(pool.clone(), query_timeout));

    let summarizer: Arc<dyn ReviewSummarizer> = if config.openai.is_enabled() {
        Arc::new(HttpOpenAiClient::new(config.openai.clone())?)
    } else {
        warn!("openai.api_key is not set; review summaries are disabled");
        Arc::new(DisabledSummarizer)
    };

    let state = AppState {
        hotel_service: Arc::new(HotelService::new(hotel_repo)),
        review_service: Arc::new(ReviewService::new(review_repo, summarizer)),
        security: config.security.clone(),
        app_environment: config.app.environment.clone(),
        metrics: Arc::new(AppMetrics::default()),
        db_pool: pool.clone(),
    };

    let bind_host = config.app.host.clone();
    let bind_port = config.app.port;
    let security_config = config.security.clone();
    let metrics = state.metrics.clone();

    info!(
        host = %bind_host,
        port = bind_port,
        environment = %config.app.environment,
        "starting server"
    );

    HttpServer::new(move || {
        let metrics = metrics.clone();
        App::new()
            .wrap(per_ip_rate_limiting(&security_config))
            .wrap_fn(move |req, srv| {
                let ctx = RequestContext::new(&req);
                let span = ctx.span(&req);
                let metrics = metrics.clone();

                let http_request = req.request().clone();
                let fut = srv.call(req);
                async move {
                    // Errors raised by inner middleware (the rate limiter) are
                    // rendered here so they are logged and counted like any response.
                    let mut response = match fut.await {
                        Ok(response) => response.map_into_boxed_body(),
                        Err(err) => ServiceResponse::new(http_request, err.error_response()),
                    };
                    response.headers_mut().insert(
                        actix_web::http::header::HeaderName::from_static(REQUEST_ID_HEADER),
                        ctx.request_id_header(),
                    );
                    ctx.complete(response.status().as_u16(), &metrics);
                    Ok::<_, actix_web::Error>(response)
                }
                .instrument(span)
            })
            .wrap(cors_middleware(&security_config))
            .wrap(security_headers())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .configure(configure_swagger_ui)
            .default_service(web::to(routes::not_found))
    })
    .bind((bind_host, bind_port))?
    .run()
    .await?;

    Ok(())
}
