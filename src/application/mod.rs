pub mod listing;

mod hotel_service;
mod review_service;

pub use hotel_service::HotelService;
pub use listing::{parse_listing_request, ListingRequest, ListingResource, Page};
pub use review_service::ReviewService;
