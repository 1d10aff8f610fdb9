pub mod filters;
pub mod hotel;
pub mod metadata;
pub mod review;

pub use filters::{validate_filters, Filters, SortDirection, ValidatedFilters};
pub use hotel::{Address, Hotel, NewHotel, HOTEL_DEFAULT_SORT, HOTEL_SORT_SAFELIST};
pub use metadata::{calculate_metadata, Metadata};
pub use review::{NewReview, Review, REVIEW_DEFAULT_SORT, REVIEW_SORT_SAFELIST};
