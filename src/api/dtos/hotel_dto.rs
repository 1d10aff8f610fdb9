use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Address, Hotel, Metadata};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressDto {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            address: address.address,
            city: address.city,
            state: address.state,
            country: address.country,
            postal_code: address.postal_code,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HotelDto {
    pub hotel_id: i64,
    pub main_image_th: String,
    pub hotel_name: String,
    pub phone: String,
    pub email: String,
    pub address: AddressDto,
    pub stars: i32,
    pub rating: f64,
    pub review_count: i32,
    pub child_allowed: bool,
    pub pets_allowed: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelDto {
    fn from(hotel: Hotel) -> Self {
        Self {
            hotel_id: hotel.hotel_id,
            main_image_th: hotel.main_image_th,
            hotel_name: hotel.hotel_name,
            phone: hotel.phone,
            email: hotel.email,
            address: hotel.address.into(),
            stars: hotel.stars,
            rating: hotel.rating,
            review_count: hotel.review_count,
            child_allowed: hotel.child_allowed,
            pets_allowed: hotel.pets_allowed,
            description: hotel.description,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HotelListResponse {
    pub metadata: Metadata,
    pub hotels: Vec<HotelDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HotelResponse {
    pub hotel: HotelDto,
}
