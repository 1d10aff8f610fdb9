use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use hotel_api::config::{DatabaseConfig, LoggingConfig};
use hotel_api::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use hotel_api::infrastructure::repositories::{HotelRepositoryImpl, ReviewRepositoryImpl};
use hotel_api::observability::init_tracing;
use hotel_api::sync::{load_ids, HttpPartnerClient, SyncArgs, SyncJob};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = SyncArgs::parse();

    init_tracing(&LoggingConfig {
        level: std::env::var("LOGGING_LEVEL").unwrap_or_else(|_| "debug".to_string()),
        json_format: true,
    });

    let ids = load_ids(&args.input).await?;
    info!(input = %args.input.display(), hotels = ids.len(), "loaded hotel ids");

    let database = DatabaseConfig::new(args.db_dsn.clone());
    let pool = create_pool(&database).await?;
    run_migrations(&pool).await?;
    info!("database connection established");

    let job = SyncJob::new(
        ids,
        Arc::new(HttpPartnerClient::new(&args.api_url, &args.api_key)?),
        Arc::new(HotelRepositoryImpl::new(pool.clone(), database.query_timeout())),
        Arc::new(ReviewRepositoryImpl::new(pool.clone(), database.query_timeout())),
    );

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };
    let passes = job
        .run_until(Duration::from_secs(args.interval * 60), shutdown)
        .await;
    info!(passes, "sync stopped");

    pool.close().await;
    Ok(())
}
