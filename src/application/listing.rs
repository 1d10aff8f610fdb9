//! Shared orchestration for listing endpoints: coerce the query string,
//! validate paging and sorting, then attach pagination metadata to the
//! window of records returned by a repository.

use crate::api::query::{read_int, read_string, QueryValues};
use crate::domain::{
    calculate_metadata, Filters, Metadata, ValidatedFilters, HOTEL_DEFAULT_SORT,
    HOTEL_SORT_SAFELIST, REVIEW_DEFAULT_SORT, REVIEW_SORT_SAFELIST,
};
use crate::error::{AppError, AppResult};
use crate::validation::Validator;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Per-resource sorting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingResource {
    pub default_sort: &'static str,
    pub sort_safelist: &'static [&'static str],
}

pub const HOTEL_LISTING: ListingResource = ListingResource {
    default_sort: HOTEL_DEFAULT_SORT,
    sort_safelist: HOTEL_SORT_SAFELIST,
};

pub const REVIEW_LISTING: ListingResource = ListingResource {
    default_sort: REVIEW_DEFAULT_SORT,
    sort_safelist: REVIEW_SORT_SAFELIST,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub search: String,
    pub filters: ValidatedFilters,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub metadata: Metadata,
}

impl ListingRequest {
    pub fn page<T>(&self, records: Vec<T>, total_records: i64) -> Page<T> {
        Page {
            records,
            metadata: calculate_metadata(
                total_records,
                self.filters.page(),
                self.filters.page_size(),
            ),
        }
    }
}

/// Reads `search`, `page`, `page_size` and `sort`. Every malformed or
/// out-of-range parameter is reported together in one validation error.
pub fn parse_listing_request(
    params: &QueryValues,
    resource: &ListingResource,
) -> AppResult<ListingRequest> {
    let mut v = Validator::new();

    let search = read_string(params, "search", "");
    let page = read_int(params, "page", DEFAULT_PAGE, &mut v);
    let page_size = read_int(params, "page_size", DEFAULT_PAGE_SIZE, &mut v);
    let sort = read_string(params, "sort", resource.default_sort);

    let filters = Filters {
        page,
        page_size,
        sort,
        sort_safelist: resource.sort_safelist,
    }
    .validate(v)
    .map_err(AppError::from)?;

    Ok(ListingRequest { search, filters })
}
