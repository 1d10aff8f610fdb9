use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::healthcheck,
        crate::api::routes::ready,
        crate::api::routes::hotels::list_hotels,
        crate::api::routes::hotels::get_hotel,
        crate::api::routes::reviews::list_reviews,
        crate::api::routes::reviews::get_review,
        crate::api::routes::reviews::get_review_summary,
    ),
    components(
        schemas(
            crate::api::dtos::HealthcheckResponse,
            crate::api::dtos::SystemInfo,
            crate::api::dtos::HotelDto,
            crate::api::dtos::AddressDto,
            crate::api::dtos::HotelListResponse,
            crate::api::dtos::HotelResponse,
            crate::api::dtos::ReviewDto,
            crate::api::dtos::ReviewListResponse,
            crate::api::dtos::ReviewResponse,
            crate::api::dtos::ReviewSummaryResponse,
            crate::api::dtos::ErrorResponse,
            crate::api::dtos::ErrorDetail,
            crate::domain::Metadata,
        )
    ),
    tags(
        (name = "hotels", description = "Hotel listing and lookup"),
        (name = "reviews", description = "Hotel reviews and generated summaries"),
        (name = "health", description = "Health and readiness checks"),
    ),
    info(
        title = "Hotel API",
        version = "0.1.0",
        description = "Read-only hotel and review API with paginated, sortable listings",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
