use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::dtos::{PartnerHotel, PartnerReview};
use super::error::{SyncError, SyncResult};

pub const FETCH_ATTEMPTS: u32 = 3;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Upper bound on reviews requested per hotel.
pub const REVIEW_LIMIT: u32 = 1_000_000;

#[async_trait]
pub trait PartnerClient: Send + Sync {
    async fn fetch_hotel(&self, hotel_id: &str) -> SyncResult<PartnerHotel>;
    async fn fetch_reviews(&self, hotel_id: &str) -> SyncResult<Vec<PartnerReview>>;
}

/// Partner API client. Every request carries `x-api-key` and is attempted up
/// to [`FETCH_ATTEMPTS`] times.
pub struct HttpPartnerClient {
    client: Client,
    api_url: String,
    api_key: String,
    attempts: u32,
}

impl HttpPartnerClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> SyncResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            attempts: FETCH_ATTEMPTS,
        })
    }

    pub(crate) fn hotel_url(&self, hotel_id: &str) -> String {
        format!("{}/v3.0/property/{}", self.api_url, hotel_id)
    }

    pub(crate) fn reviews_url(&self, hotel_id: &str) -> String {
        format!(
            "{}/v3.0/property/reviews/{}/{}",
            self.api_url, hotel_id, REVIEW_LIMIT
        )
    }

    async fn fetch_once<T: DeserializeOwned>(&self, url: &str) -> SyncResult<T> {
        let response = self
            .client
            .get(url)
            .header("x-api-key", &self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(SyncError::Status(response.status().as_u16()));
        }

        Ok(response.json::<T>().await?)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> SyncResult<T> {
        let mut attempt = 1;
        loop {
            match self.fetch_once(url).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.attempts => {
                    warn!(url = %url, attempt, error = %err, "partner request failed, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[async_trait]
impl PartnerClient for HttpPartnerClient {
    async fn fetch_hotel(&self, hotel_id: &str) -> SyncResult<PartnerHotel> {
        self.fetch_json(&self.hotel_url(hotel_id)).await
    }

    async fn fetch_reviews(&self, hotel_id: &str) -> SyncResult<Vec<PartnerReview>> {
        self.fetch_json(&self.reviews_url(hotel_id)).await
    }
}
