use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};
use validator::Validate;

use crate::domain::{NewHotel, NewReview};
use crate::infrastructure::repositories::{HotelRepository, ReviewRepository};

use super::client::PartnerClient;
use super::error::SyncResult;

/// Splits the ids file on commas, trimming whitespace and dropping empty
/// entries.
pub fn read_ids(contents: &str) -> Vec<String> {
    contents
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn load_ids(path: impl AsRef<Path>) -> SyncResult<Vec<String>> {
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(read_ids(&contents))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub hotels_synced: usize,
    pub hotels_failed: usize,
    pub reviews_upserted: usize,
    pub reviews_failed: usize,
}

pub struct SyncJob {
    ids: Vec<String>,
    client: Arc<dyn PartnerClient>,
    hotel_repo: Arc<dyn HotelRepository>,
    review_repo: Arc<dyn ReviewRepository>,
}

impl SyncJob {
    pub fn new(
        ids: Vec<String>,
        client: Arc<dyn PartnerClient>,
        hotel_repo: Arc<dyn HotelRepository>,
        review_repo: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            ids,
            client,
            hotel_repo,
            review_repo,
        }
    }

    /// One pass over every id. Failures are logged and counted; they never
    /// stop the pass.
    pub async fn run_once(&self) -> SyncReport {
        info!(hotels = self.ids.len(), "starting sync");
        let mut report = SyncReport::default();

        for id in &self.ids {
            match self.sync_hotel(id, &mut report).await {
                Ok(()) => report.hotels_synced += 1,
                Err(err) => {
                    error!(hotel_id = %id, error = %err, "hotel sync failed");
                    report.hotels_failed += 1;
                }
            }
        }

        info!(
            hotels_synced = report.hotels_synced,
            hotels_failed = report.hotels_failed,
            reviews_upserted = report.reviews_upserted,
            reviews_failed = report.reviews_failed,
            "sync finished"
        );
        report
    }

    /// Runs a pass every `period`, the first one immediately, until `shutdown`
    /// resolves. `shutdown` is polled between passes and during each pass;
    /// an interrupted pass is abandoned. Returns the number of completed passes.
    pub async fn run_until<S>(&self, period: Duration, shutdown: S) -> usize
    where
        S: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut passes = 0;
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested");
                    break;
                }
                _ = ticker.tick() => {
                    tokio::select! {
                        _ = &mut shutdown => {
                            warn!("shutdown requested, abandoning sync pass");
                            break;
                        }
                        _ = self.run_once() => passes += 1,
                    }
                }
            }
        }
        passes
    }

    async fn sync_hotel(&self, id: &str, report: &mut SyncReport) -> SyncResult<()> {
        let hotel = self.client.fetch_hotel(id).await?;
        let reviews = self.client.fetch_reviews(id).await?;

        hotel.validate()?;
        let stored = self.hotel_repo.upsert(&NewHotel::from(hotel)).await?;

        for review in reviews {
            let review = NewReview::from(review);
            match self.review_repo.upsert(stored.hotel_id, &review).await {
                Ok(_) => report.reviews_upserted += 1,
                Err(err) => {
                    warn!(
                        hotel_id = stored.hotel_id,
                        review_name = %review.name,
                        error = %err,
                        "review upsert failed"
                    );
                    report.reviews_failed += 1;
                }
            }
        }

        Ok(())
    }
}
