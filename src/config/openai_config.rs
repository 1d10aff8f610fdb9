use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "crate::config::defaults::default_openai_base_url")]
    pub base_url: String,
    #[serde(default = "crate::config::defaults::default_openai_model")]
    pub model: String,
    #[serde(default = "crate::config::defaults::default_openai_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        use crate::config::defaults::*;

        Self {
            api_key: None,
            base_url: default_openai_base_url(),
            model: default_openai_model(),
            timeout_seconds: default_openai_timeout_seconds(),
        }
    }
}

impl OpenAiConfig {
    pub fn is_enabled(&self) -> bool {
        self.api_key
            .as_ref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}
