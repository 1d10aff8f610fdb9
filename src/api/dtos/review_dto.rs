use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Metadata, Review};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i64,
    pub hotel_id: i64,
    pub average_score: i32,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub date: String,
    pub headline: String,
    pub language: String,
    pub pros: String,
    pub cons: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            hotel_id: review.hotel_id,
            average_score: review.average_score,
            country: review.country,
            kind: review.kind,
            name: review.name,
            date: review.date,
            headline: review.headline,
            language: review.language,
            pros: review.pros,
            cons: review.cons,
            source: review.source,
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewListResponse {
    pub metadata: Metadata,
    pub reviews: Vec<ReviewDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponse {
    pub review: ReviewDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewSummaryResponse {
    pub summary: String,
}
