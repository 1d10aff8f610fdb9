use actix_web::{web, HttpResponse};

use crate::api::dtos::{
    ErrorResponse, ListingQueryParams, ReviewListResponse, ReviewResponse, ReviewSummaryResponse,
};
use crate::api::query::{read_id_param, QueryValues};
use crate::api::routes::{method_not_allowed, AppState};
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/hotels/{hotel_id}/reviews")
            .route(web::get().to(list_reviews))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/hotels/{hotel_id}/reviews/{review_id}")
            .route(web::get().to(get_review))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/hotels/{hotel_id}/reviews/{review_id}/summary")
            .route(web::get().to(get_review_summary))
            .default_service(web::to(method_not_allowed)),
    );
}

fn review_path(path: &(String, String)) -> AppResult<(i64, i64)> {
    Ok((read_id_param(&path.0)?, read_id_param(&path.1)?))
}

#[utoipa::path(
    get,
    path = "/v1/hotels/{hotel_id}/reviews",
    params(
        ("hotel_id" = i64, Path, description = "Partner hotel id"),
        ListingQueryParams
    ),
    responses(
        (status = 200, description = "One page of the hotel's reviews", body = ReviewListResponse),
        (status = 404, description = "Invalid hotel id", body = ErrorResponse),
        (status = 422, description = "Invalid paging or sorting parameters", body = ErrorResponse),
    ),
    tag = "reviews"
)]
pub(crate) async fn list_reviews(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let hotel_id = read_id_param(&path)?;
    let params = QueryValues::from(query);
    let result = state.review_service.list(hotel_id, &params).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/v1/hotels/{hotel_id}/reviews/{review_id}",
    params(
        ("hotel_id" = i64, Path, description = "Partner hotel id"),
        ("review_id" = i64, Path, description = "Review id"),
    ),
    responses(
        (status = 200, description = "Review found", body = ReviewResponse),
        (status = 404, description = "Review not found for this hotel", body = ErrorResponse),
    ),
    tag = "reviews"
)]
pub(crate) async fn get_review(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (hotel_id, review_id) = review_path(&path)?;
    let result = state.review_service.get(hotel_id, review_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/v1/hotels/{hotel_id}/reviews/{review_id}/summary",
    params(
        ("hotel_id" = i64, Path, description = "Partner hotel id"),
        ("review_id" = i64, Path, description = "Review id"),
    ),
    responses(
        (status = 200, description = "Generated summary", body = ReviewSummaryResponse),
        (status = 404, description = "Review not found for this hotel", body = ErrorResponse),
        (status = 500, description = "Summary could not be generated", body = ErrorResponse),
        (status = 503, description = "Summaries are not configured", body = ErrorResponse),
    ),
    tag = "reviews"
)]
pub(crate) async fn get_review_summary(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (hotel_id, review_id) = review_path(&path)?;
    let result = state.review_service.summarize(hotel_id, review_id).await?;
    Ok(HttpResponse::Ok().json(result))
}
