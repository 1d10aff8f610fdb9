use serde::Deserialize;
use validator::Validate;

use crate::domain::{Address, NewHotel, NewReview};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartnerAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

/// Hotel payload from `/v3.0/property/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct PartnerHotel {
    #[validate(range(min = 1))]
    pub hotel_id: i64,
    pub main_image_th: String,
    #[validate(length(min = 1, message = "must be provided"))]
    pub hotel_name: String,
    pub phone: String,
    pub email: String,
    pub address: PartnerAddress,
    #[validate(range(min = 0, max = 5))]
    pub stars: i32,
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: f64,
    pub review_count: i32,
    pub child_allowed: bool,
    pub pets_allowed: bool,
    pub description: String,
}

/// One entry of `/v3.0/property/reviews/{id}/{limit}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartnerReview {
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
}

impl From<PartnerHotel> for NewHotel {
    fn from(hotel: PartnerHotel) -> Self {
        Self {
            hotel_id: hotel.hotel_id,
            main_image_th: hotel.main_image_th,
            hotel_name: hotel.hotel_name,
            phone: hotel.phone,
            email: hotel.email,
            address: Address {
                address: hotel.address.address,
                city: hotel.address.city,
                state: hotel.address.state,
                country: hotel.address.country,
                postal_code: hotel.address.postal_code,
            },
            stars: hotel.stars,
            rating: hotel.rating,
            review_count: hotel.review_count,
            child_allowed: hotel.child_allowed,
            pets_allowed: hotel.pets_allowed,
            description: hotel.description,
        }
    }
}

impl From<PartnerReview> for NewReview {
    fn from(review: PartnerReview) -> Self {
        Self {
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
        }
    }
}
