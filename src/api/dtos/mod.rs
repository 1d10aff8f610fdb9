pub mod common;
pub mod hotel_dto;
pub mod review_dto;

pub use common::*;
pub use hotel_dto::*;
pub use review_dto::*;
