use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Standard error response structure for API errors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error label (e.g., "Not found", "Validation error")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable code (e.g., "NOT_FOUND")
    pub code: String,
    /// Per-field failures for validation errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
    pub code: String,
}

/// Paging, sorting and search parameters shared by every listing endpoint.
///
/// Values are read leniently from the raw query string, so this type only
/// documents them.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingQueryParams {
    /// Full-text search over the listed records
    pub search: Option<String>,
    /// 1-based page number, at most 10 million
    pub page: Option<i64>,
    /// Rows per page, 1 to 100
    pub page_size: Option<i64>,
    /// Sort column, prefixed with `-` for descending order
    pub sort: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SystemInfo {
    pub environment: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthcheckResponse {
    pub status: String,
    pub system_info: SystemInfo,
}
