use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use hotel_api::domain::{NewReview, Review, SortDirection, ValidatedFilters};
use hotel_api::error::{AppError, AppResult};
use hotel_api::infrastructure::repositories::ReviewRepository;

#[derive(Default)]
pub struct MockReviewRepo {
    pub reviews: Mutex<Vec<Review>>,
    pub fail: bool,
    /// Headlines whose upsert is rejected, to exercise per-review failure paths.
    pub reject_headlines: Vec<String>,
}

impl MockReviewRepo {
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Mutex::new(reviews),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn stored(&self) -> Vec<Review> {
        self.reviews.lock().expect("reviews mutex poisoned").clone()
    }
}

#[async_trait]
impl ReviewRepository for MockReviewRepo {
    async fn find_by_id(&self, hotel_id: i64, review_id: i64) -> AppResult<Option<Review>> {
        if self.fail {
            return Err(AppError::InternalError(anyhow::anyhow!("mock repository failure")));
        }
        let reviews = self.reviews.lock().expect("reviews mutex poisoned");
        Ok(reviews
            .iter()
            .find(|r| r.hotel_id == hotel_id && r.id == review_id)
            .cloned())
    }

    async fn list(
        &self,
        hotel_id: i64,
        search: &str,
        filters: &ValidatedFilters,
    ) -> AppResult<(Vec<Review>, i64)> {
        if self.fail {
            return Err(AppError::InternalError(anyhow::anyhow!("mock repository failure")));
        }
        let needle = search.to_lowercase();
        let reviews = self.reviews.lock().expect("reviews mutex poisoned");
        let mut matching: Vec<Review> = reviews
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .filter(|r| {
                needle.is_empty()
                    || r.headline.to_lowercase().contains(&needle)
                    || r.pros.to_lowercase().contains(&needle)
                    || r.cons.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        let column = filters.sort_column().to_string();
        matching.sort_by(|a, b| {
            let ordering = match column.as_str() {
                "average_score" => a.average_score.cmp(&b.average_score),
                "country" => a.country.cmp(&b.country),
                "date" => a.date.cmp(&b.date),
                "name" => a.name.cmp(&b.name),
                "language" => a.language.cmp(&b.language),
                _ => a.id.cmp(&b.id),
            };
            let ordering = match filters.sort_direction() {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            ordering.then(a.id.cmp(&b.id))
        });

        let total = matching.len() as i64;
        let window = matching
            .into_iter()
            .skip(filters.offset() as usize)
            .take(filters.limit() as usize)
            .collect();
        Ok((window, total))
    }

    async fn upsert(&self, hotel_id: i64, new: &NewReview) -> AppResult<Review> {
        if self.fail || self.reject_headlines.contains(&new.headline) {
            return Err(AppError::InternalError(anyhow::anyhow!("mock repository failure")));
        }
        let mut reviews = self.reviews.lock().expect("reviews mutex poisoned");
        let existing = reviews.iter().position(|r| {
            r.hotel_id == hotel_id
                && r.name == new.name
                && r.date == new.date
                && r.headline == new.headline
        });
        let id = match existing {
            Some(index) => reviews.remove(index).id,
            None => reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1,
        };

        let review = Review {
            id,
            hotel_id,
            average_score: new.average_score,
            country: new.country.clone(),
            kind: new.kind.clone(),
            name: new.name.clone(),
            date: new.date.clone(),
            headline: new.headline.clone(),
            language: new.language.clone(),
            pros: new.pros.clone(),
            cons: new.cons.clone(),
            source: new.source.clone(),
            created_at: Utc::now(),
        };
        reviews.push(review.clone());
        Ok(review)
    }
}
