use std::time::Duration;

use serde::Deserialize;

use super::ConfigError;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "crate::config::defaults::default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "crate::config::defaults::default_db_min_connections")]
    pub min_connections: u32,
    #[serde(default = "crate::config::defaults::default_db_acquire_timeout_seconds")]
    pub acquire_timeout_seconds: u64,
    #[serde(default = "crate::config::defaults::default_db_idle_timeout_seconds")]
    pub idle_timeout_seconds: u64,
    #[serde(default = "crate::config::defaults::default_db_max_lifetime_seconds")]
    pub max_lifetime_seconds: u64,
    /// Upper bound applied by repositories to every query.
    #[serde(default = "crate::config::defaults::default_db_query_timeout_seconds")]
    pub query_timeout_seconds: u64,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        use crate::config::defaults::*;

        Self {
            url: url.into(),
            max_connections: default_db_max_connections(),
            min_connections: default_db_min_connections(),
            acquire_timeout_seconds: default_db_acquire_timeout_seconds(),
            idle_timeout_seconds: default_db_idle_timeout_seconds(),
            max_lifetime_seconds: default_db_max_lifetime_seconds(),
            query_timeout_seconds: default_db_query_timeout_seconds(),
        }
    }

    /// Upper bound for a single repository query.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_seconds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url must be set".to_string()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be greater than 0".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::Invalid(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.min_connections, self.max_connections
            )));
        }
        if self.query_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "database.query_timeout_seconds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
