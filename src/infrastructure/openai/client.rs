use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use std::time::Duration;
use tracing::error;

use crate::config::OpenAiConfig;
use crate::error::{AppError, AppResult};

use super::dtos::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Produces a short natural-language summary for a prompt.
#[async_trait]
pub trait ReviewSummarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> AppResult<String>;
}

/// Chat-completions client for OpenAI-compatible APIs.
pub struct HttpOpenAiClient {
    config: OpenAiConfig,
    api_key: String,
    client: Client,
}

impl HttpOpenAiClient {
    pub fn new(config: OpenAiConfig) -> AppResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("OpenAI api key not configured")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("failed to build http client: {e}")))?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    pub(crate) fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ReviewSummarizer for HttpOpenAiClient {
    async fn summarize(&self, prompt: &str) -> AppResult<String> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };

        let response = self
            .client
            .post(self.completions_url())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url = %self.completions_url(), "failed to send completion request");
                AppError::InternalError(anyhow::anyhow!("completion request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "completion API returned an error status");
            return Err(AppError::InternalError(anyhow::anyhow!(
                "completion API returned {status}"
            )));
        }

        let body = response.json::<ChatCompletionResponse>().await.map_err(|e| {
            error!(error = %e, "failed to parse completion response");
            AppError::InternalError(anyhow::anyhow!("failed to parse completion response: {e}"))
        })?;

        body.first_content()
            .map(str::to_string)
            .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("empty summary")))
    }
}

/// Used when no API key is configured.
pub struct DisabledSummarizer;

#[async_trait]
impl ReviewSummarizer for DisabledSummarizer {
    async fn summarize(&self, _prompt: &str) -> AppResult<String> {
        Err(AppError::ServiceUnavailable {
            service: "OpenAI".to_string(),
            message: "review summaries are not configured".to_string(),
        })
    }
}
