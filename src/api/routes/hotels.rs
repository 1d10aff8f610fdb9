use actix_web::{web, HttpResponse};

use crate::api::dtos::{ErrorResponse, HotelListResponse, HotelResponse, ListingQueryParams};
use crate::api::query::{read_id_param, QueryValues};
use crate::api::routes::{method_not_allowed, AppState};
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/hotels")
            .route(web::get().to(list_hotels))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/hotels/{hotel_id}")
            .route(web::get().to(get_hotel))
            .default_service(web::to(method_not_allowed)),
    );
}

#[utoipa::path(
    get,
    path = "/v1/hotels",
    params(ListingQueryParams),
    responses(
        (status = 200, description = "One page of hotels", body = HotelListResponse),
        (status = 422, description = "Invalid paging or sorting parameters", body = ErrorResponse),
    ),
    tag = "hotels"
)]
pub(crate) async fn list_hotels(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let params = QueryValues::from(query);
    let result = state.hotel_service.list(&params).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/v1/hotels/{hotel_id}",
    params(("hotel_id" = i64, Path, description = "Partner hotel id")),
    responses(
        (status = 200, description = "Hotel found", body = HotelResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
    ),
    tag = "hotels"
)]
pub(crate) async fn get_hotel(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let hotel_id = read_id_param(&path)?;
    let result = state.hotel_service.get(hotel_id).await?;
    Ok(HttpResponse::Ok().json(result))
}
