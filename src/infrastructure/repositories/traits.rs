use crate::domain::{Hotel, NewHotel, NewReview, Review, ValidatedFilters};
use crate::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_by_id(&self, hotel_id: i64) -> AppResult<Option<Hotel>>;

    /// Returns the requested window of hotels matching `search` together with
    /// the number of all matching rows, ignoring pagination.
    async fn list(&self, search: &str, filters: &ValidatedFilters)
        -> AppResult<(Vec<Hotel>, i64)>;

    async fn upsert(&self, hotel: &NewHotel) -> AppResult<Hotel>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, hotel_id: i64, review_id: i64) -> AppResult<Option<Review>>;

    async fn list(
        &self,
        hotel_id: i64,
        search: &str,
        filters: &ValidatedFilters,
    ) -> AppResult<(Vec<Review>, i64)>;

    async fn upsert(&self, hotel_id: i64, review: &NewReview) -> AppResult<Review>;
}
