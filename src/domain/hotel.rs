use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    pub hotel_id: i64,
    pub main_image_th: String,
    pub hotel_name: String,
    pub phone: String,
    pub email: String,
    #[sqlx(flatten)]
    pub address: Address,
    pub stars: i32,
    pub rating: f64,
    pub review_count: i32,
    pub child_allowed: bool,
    pub pets_allowed: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Hotel fields as supplied by the partner feed, before timestamps are assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewHotel {
    pub hotel_id: i64,
    pub main_image_th: String,
    pub hotel_name: String,
    pub phone: String,
    pub email: String,
    pub address: Address,
    pub stars: i32,
    pub rating: f64,
    pub review_count: i32,
    pub child_allowed: bool,
    pub pets_allowed: bool,
    pub description: String,
}

/// Sort keys accepted by the hotel listing, bare and descending.
pub const HOTEL_SORT_SAFELIST: &[&str] = &[
    "hotel_id",
    "hotel_name",
    "country",
    "city",
    "rating",
    "stars",
    "review_count",
    "-hotel_id",
    "-hotel_name",
    "-country",
    "-city",
    "-rating",
    "-stars",
    "-review_count",
];

pub const HOTEL_DEFAULT_SORT: &str = "hotel_id";
