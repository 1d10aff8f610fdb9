use serde::Deserialize;

use super::ConfigError;

#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    #[serde(default = "crate::config::defaults::default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default = "crate::config::defaults::default_metrics_allow_private_only")]
    pub metrics_allow_private_only: bool,
    #[serde(default)]
    pub metrics_admin_token: Option<String>,
    #[serde(default = "crate::config::defaults::default_rate_limit_enabled")]
    pub rate_limit_enabled: bool,
    /// Sustained requests per second allowed per client IP.
    #[serde(default = "crate::config::defaults::default_rate_limit_rps")]
    pub rate_limit_rps: u64,
    #[serde(default = "crate::config::defaults::default_rate_limit_burst")]
    pub rate_limit_burst: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        use crate::config::defaults::*;

        Self {
            cors_allowed_origins: default_cors_allowed_origins(),
            metrics_allow_private_only: default_metrics_allow_private_only(),
            metrics_admin_token: None,
            rate_limit_enabled: default_rate_limit_enabled(),
            rate_limit_rps: default_rate_limit_rps(),
            rate_limit_burst: default_rate_limit_burst(),
        }
    }
}

impl SecurityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rate_limit_enabled {
            return Ok(());
        }
        if self.rate_limit_rps == 0 || self.rate_limit_rps > 1_000 {
            return Err(ConfigError::Invalid(format!(
                "security.rate_limit_rps must be between 1 and 1000, got {}",
                self.rate_limit_rps
            )));
        }
        if self.rate_limit_burst == 0 {
            return Err(ConfigError::Invalid(
                "security.rate_limit_burst must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
