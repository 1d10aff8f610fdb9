pub mod database_config;
pub mod defaults;
pub mod openai_config;
pub mod security_config;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;

pub use database_config::DatabaseConfig;
pub use openai_config::OpenAiConfig;
pub use security_config::SecurityConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub app: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
    #[serde(default = "defaults::default_environment")]
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::default_host(),
            port: defaults::default_port(),
            environment: defaults::default_environment(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        Self::from_figment(Self::figment())
    }

    /// Layered sources: TOML files first, then prefixed and raw environment variables.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file("config/development.toml").nested())
            .merge(Env::prefixed("APP_").split("__").map(|key| {
                format!("app.{}", key.as_str()).into()
            }))
            .merge(Env::prefixed("DATABASE_").split("__").map(|key| {
                format!("database.{}", key.as_str()).into()
            }))
            .merge(Env::prefixed("SECURITY_").split("__").map(|key| {
                format!("security.{}", key.as_str()).into()
            }))
            .merge(Env::prefixed("LOGGING_").split("__").map(|key| {
                format!("logging.{}", key.as_str()).into()
            }))
            .merge(Env::prefixed("OPENAI_").split("__").map(|key| {
                format!("openai.{}", key.as_str()).into()
            }))
            .merge(
                Env::raw()
                    .only(&["DATABASE_URL", "OPENAI_API_KEY"])
                    .map(|key| match key.as_str() {
                        "DATABASE_URL" => "database.url".into(),
                        "OPENAI_API_KEY" => "openai.api_key".into(),
                        _ => key.into(),
                    }),
            )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, Box<figment::Error>> {
        let mut config: Self = figment.extract().map_err(Box::new)?;
        config.openai.api_key = defaults::normalize_optional_string(config.openai.api_key);
        config.security.metrics_admin_token =
            defaults::normalize_optional_string(config.security.metrics_admin_token);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.port == 0 {
            return Err(ConfigError::Invalid("app.port must be greater than 0".to_string()));
        }

        self.database.validate()?;
        self.security.validate()
    }
}
