mod hotel;
mod review;
mod traits;
mod utils;

pub use hotel::HotelRepositoryImpl;
pub use review::ReviewRepositoryImpl;
pub use traits::{HotelRepository, ReviewRepository};
