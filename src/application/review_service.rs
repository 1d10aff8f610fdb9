use std::sync::Arc;

use tracing::{debug, info};

use crate::api::dtos::{ReviewDto, ReviewListResponse, ReviewResponse, ReviewSummaryResponse};
use crate::api::query::QueryValues;
use crate::application::listing::{parse_listing_request, REVIEW_LISTING};
use crate::domain::Review;
use crate::error::{AppError, AppResult};
use crate::infrastructure::openai::ReviewSummarizer;
use crate::infrastructure::repositories::ReviewRepository;

#[derive(Clone)]
pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
    summarizer: Arc<dyn ReviewSummarizer>,
}

impl ReviewService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        summarizer: Arc<dyn ReviewSummarizer>,
    ) -> Self {
        Self {
            review_repo,
            summarizer,
        }
    }

    pub async fn list(&self, hotel_id: i64, params: &QueryValues) -> AppResult<ReviewListResponse> {
        let request = parse_listing_request(params, &REVIEW_LISTING)?;
        let (reviews, total) = self
            .review_repo
            .list(hotel_id, &request.search, &request.filters)
            .await?;
        debug!(hotel_id, total, returned = reviews.len(), "listed reviews");

        let page = request.page(reviews, total);
        Ok(ReviewListResponse {
            metadata: page.metadata,
            reviews: page.records.into_iter().map(ReviewDto::from).collect(),
        })
    }

    pub async fn get(&self, hotel_id: i64, review_id: i64) -> AppResult<ReviewResponse> {
        let review = self.find(hotel_id, review_id).await?;
        Ok(ReviewResponse {
            review: review.into(),
        })
    }

    pub async fn summarize(
        &self,
        hotel_id: i64,
        review_id: i64,
    ) -> AppResult<ReviewSummaryResponse> {
        let review = self.find(hotel_id, review_id).await?;
        let summary = self.summarizer.summarize(&review.summary_prompt()).await?;
        info!(hotel_id, review_id, "generated review summary");
        Ok(ReviewSummaryResponse { summary })
    }

    async fn find(&self, hotel_id: i64, review_id: i64) -> AppResult<Review> {
        self.review_repo
            .find_by_id(hotel_id, review_id)
            .await?
            .ok_or_else(AppError::not_found)
    }
}
