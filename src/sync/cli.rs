use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "hotel-sync",
    version,
    about = "Periodically syncs hotels and reviews from the partner API"
)]
pub struct SyncArgs {
    /// File with comma-separated partner hotel ids
    #[arg(long, env = "SYNC_INPUT")]
    pub input: PathBuf,

    /// PostgreSQL connection string
    #[arg(long = "db-dsn", env = "SYNC_DB_DSN")]
    pub db_dsn: String,

    /// Partner API key, sent as `x-api-key`
    #[arg(long = "api-key", env = "SYNC_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Partner API base URL
    #[arg(long = "api-url", env = "SYNC_API_URL")]
    pub api_url: String,

    /// Minutes between sync runs
    #[arg(
        long,
        env = "SYNC_INTERVAL",
        default_value_t = 3,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,
}
