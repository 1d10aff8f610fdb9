//! Paging, sorting, and safelist enforcement for listing queries.
//!
//! [`Filters`] is built per request from query parameters plus a resource
//! safelist. Only a [`ValidatedFilters`] reaches a repository, so the sort
//! value interpolated into `ORDER BY` has always been checked against the
//! safelist first.

use std::fmt;

use crate::validation::{permitted_value, Validator};

pub const MAX_PAGE: i64 = 10_000_000;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub page: i64,
    pub page_size: i64,
    pub sort: String,
    pub sort_safelist: &'static [&'static str],
}

impl Filters {
    /// Column name for `ORDER BY`, with any leading `-` removed.
    ///
    /// # Panics
    ///
    /// Panics when `sort` is not in the safelist. Callers must run
    /// [`validate_filters`] first; reaching this with an unchecked value is a
    /// bug in the calling code.
    pub fn sort_column(&self) -> &str {
        if permitted_value(&self.sort.as_str(), self.sort_safelist) {
            return self.sort.strip_prefix('-').unwrap_or(&self.sort);
        }

        panic!("unsafe sort parameter: {}", self.sort);
    }

    pub fn sort_direction(&self) -> SortDirection {
        if self.sort.starts_with('-') {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Runs [`validate_filters`] into `v`, yielding checked filters only when
    /// `v` holds no errors at all (including ones recorded before this call).
    pub fn validate(self, mut v: Validator) -> Result<ValidatedFilters, Validator> {
        validate_filters(&mut v, &self);
        if v.valid() {
            Ok(ValidatedFilters(self))
        } else {
            Err(v)
        }
    }
}

pub fn validate_filters(v: &mut Validator, filters: &Filters) {
    v.check(filters.page > 0, "page", "must be greater than zero");
    v.check(
        filters.page <= MAX_PAGE,
        "page",
        "must be a maximum of 10 million",
    );
    v.check(filters.page_size > 0, "page_size", "must be greater than zero");
    v.check(
        filters.page_size <= MAX_PAGE_SIZE,
        "page_size",
        "must be a maximum of 100",
    );
    v.check(
        permitted_value(&filters.sort.as_str(), filters.sort_safelist),
        "sort",
        "invalid sort value",
    );
}

/// Filters that passed [`validate_filters`]; the only form repositories accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFilters(Filters);

impl ValidatedFilters {
    pub fn page(&self) -> i64 {
        self.0.page
    }

    pub fn page_size(&self) -> i64 {
        self.0.page_size
    }

    pub fn sort_column(&self) -> &str {
        self.0.sort_column()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.0.sort_direction()
    }

    pub fn limit(&self) -> i64 {
        self.0.limit()
    }

    pub fn offset(&self) -> i64 {
        self.0.offset()
    }

    pub fn as_filters(&self) -> &Filters {
        &self.0
    }
}
