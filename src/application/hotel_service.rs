use std::sync::Arc;

use tracing::debug;

use crate::api::dtos::{HotelDto, HotelListResponse, HotelResponse};
use crate::api::query::QueryValues;
use crate::application::listing::{parse_listing_request, HOTEL_LISTING};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::HotelRepository;

#[derive(Clone)]
pub struct HotelService {
    hotel_repo: Arc<dyn HotelRepository>,
}

impl HotelService {
    pub fn new(hotel_repo: Arc<dyn HotelRepository>) -> Self {
        Self { hotel_repo }
    }

    pub async fn list(&self, params: &QueryValues) -> AppResult<HotelListResponse> {
        let request = parse_listing_request(params, &HOTEL_LISTING)?;
        let (hotels, total) = self
            .hotel_repo
            .list(&request.search, &request.filters)
            .await?;
        debug!(total, returned = hotels.len(), "listed hotels");

        let page = request.page(hotels, total);
        Ok(HotelListResponse {
            metadata: page.metadata,
            hotels: page.records.into_iter().map(HotelDto::from).collect(),
        })
    }

    pub async fn get(&self, hotel_id: i64) -> AppResult<HotelResponse> {
        let hotel = self
            .hotel_repo
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(AppError::not_found)?;
        Ok(HotelResponse {
            hotel: hotel.into(),
        })
    }
}
