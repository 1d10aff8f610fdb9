use std::sync::Arc;

use actix_web::{http::StatusCode, test as actix_test, web, App};
use hotel_api::api::routes;
use hotel_api::domain::SortDirection;
use serde_json::Value;

use crate::common::fixtures::{hotel, sample_hotels};
use crate::common::mocks::{MockHotelRepo, MockReviewRepo, MockSummarizer};
use crate::common::app_state;

fn state_with(repo: Arc<MockHotelRepo>) -> routes::AppState {
    app_state(
        repo,
        Arc::new(MockReviewRepo::default()),
        Arc::new(MockSummarizer::returning("summary")),
    )
}

macro_rules! hotel_app {
    ($repo:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state_with($repo)))
                .configure(routes::configure)
                .default_service(web::to(routes::not_found)),
        )
        .await
    };
}

#[actix_rt::test]
async fn list_hotels_uses_default_paging_and_sort() {
    let repo = Arc::new(MockHotelRepo::with_hotels(sample_hotels()));
    let app = hotel_app!(repo.clone());

    let req = actix_test::TestRequest::get().uri("/v1/hotels").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["metadata"]["current_page"], 1);
    assert_eq!(body["metadata"]["page_size"], 20);
    assert_eq!(body["metadata"]["first_page"], 1);
    assert_eq!(body["metadata"]["last_page"], 1);
    assert_eq!(body["metadata"]["total_records"], 5);
    assert_eq!(body["hotels"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["hotels"][0]["hotel_id"], 1);

    let filters = repo.recorded_filters().expect("repository was queried");
    assert_eq!(filters.sort_column(), "hotel_id");
    assert_eq!(filters.sort_direction(), SortDirection::Ascending);
    assert_eq!(filters.offset(), 0);
    assert_eq!(filters.limit(), 20);
}

#[actix_rt::test]
async fn list_hotels_returns_requested_window_with_metadata() {
    let hotels = (1..=12)
        .map(|id| hotel(id, &format!("Hotel {id:02}"), "Lyon", "FR", 8.0))
        .collect();
    let repo = Arc::new(MockHotelRepo::with_hotels(hotels));
    let app = hotel_app!(repo.clone());

    let req = actix_test::TestRequest::get()
        .uri("/v1/hotels?page=3&page_size=5&sort=-hotel_id")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(
        body["metadata"],
        serde_json::json!({
            "current_page": 3,
            "page_size": 5,
            "first_page": 1,
            "last_page": 3,
            "total_records": 12
        })
    );
    let ids: Vec<i64> = body["hotels"]
        .as_array()
        .expect("hotels array")
        .iter()
        .filter_map(|h| h["hotel_id"].as_i64())
        .collect();
    assert_eq!(ids, vec![2, 1]);

    let filters = repo.recorded_filters().expect("repository was queried");
    assert_eq!(filters.offset(), 10);
    assert_eq!(filters.sort_direction(), SortDirection::Descending);
}

#[actix_rt::test]
async fn list_hotels_search_filters_and_counts_matches() {
    let repo = Arc::new(MockHotelRepo::with_hotels(sample_hotels()));
    let app = hotel_app!(repo);

    let req = actix_test::TestRequest::get()
        .uri("/v1/hotels?search=MA&sort=-rating")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["metadata"]["total_records"], 2);
    assert_eq!(body["hotels"][0]["hotel_name"], "Dune Retreat");
    assert_eq!(body["hotels"][1]["hotel_name"], "Atlas Palace");
}

#[actix_rt::test]
async fn page_beyond_last_returns_empty_list_with_metadata() {
    let repo = Arc::new(MockHotelRepo::with_hotels(sample_hotels()));
    let app = hotel_app!(repo);

    let req = actix_test::TestRequest::get()
        .uri("/v1/hotels?page=9&page_size=2")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["hotels"], serde_json::json!([]));
    assert_eq!(body["metadata"]["current_page"], 9);
    assert_eq!(body["metadata"]["last_page"], 3);
    assert_eq!(body["metadata"]["total_records"], 5);
}

#[actix_rt::test]
async fn no_matches_yield_zeroed_metadata() {
    let repo = Arc::new(MockHotelRepo::with_hotels(sample_hotels()));
    let app = hotel_app!(repo);

    let req = actix_test::TestRequest::get()
        .uri("/v1/hotels?search=atlantis")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["hotels"], serde_json::json!([]));
    assert_eq!(
        body["metadata"],
        serde_json::json!({
            "current_page": 0,
            "page_size": 0,
            "first_page": 0,
            "last_page": 0,
            "total_records": 0
        })
    );
}

#[actix_rt::test]
async fn invalid_listing_parameters_are_reported_together() {
    let repo = Arc::new(MockHotelRepo::with_hotels(sample_hotels()));
    let app = hotel_app!(repo.clone());

    let req = actix_test::TestRequest::get()
        .uri("/v1/hotels?page=0&page_size=101&sort=password")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let details = body["details"].as_array().expect("details array");
    let fields: Vec<(&str, &str)> = details
        .iter()
        .filter_map(|d| Some((d["field"].as_str()?, d["message"].as_str()?)))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("page", "must be greater than zero"),
            ("page_size", "must be a maximum of 100"),
            ("sort", "invalid sort value"),
        ]
    );
    assert!(repo.recorded_filters().is_none());
}

#[actix_rt::test]
async fn non_integer_page_is_a_validation_error() {
    let repo = Arc::new(MockHotelRepo::with_hotels(sample_hotels()));
    let app = hotel_app!(repo);

    let req = actix_test::TestRequest::get()
        .uri("/v1/hotels?page=abc")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["message"], "page must be an integer value");
    assert_eq!(body["details"][0]["field"], "page");
}

#[actix_rt::test]
async fn repository_failure_is_hidden_behind_generic_500() {
    let repo = Arc::new(MockHotelRepo::failing());
    let app = hotel_app!(repo);

    let req = actix_test::TestRequest::get().uri("/v1/hotels").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "the server encountered a problem and could not process your request"
    );
    assert!(!body.to_string().contains("mock repository failure"));
}

#[actix_rt::test]
async fn get_hotel_returns_wrapped_hotel() {
    let repo = Arc::new(MockHotelRepo::with_hotels(sample_hotels()));
    let app = hotel_app!(repo);

    let req = actix_test::TestRequest::get().uri("/v1/hotels/2").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["hotel"]["hotel_id"], 2);
    assert_eq!(body["hotel"]["hotel_name"], "Blue Lagoon Inn");
    assert_eq!(body["hotel"]["address"]["city"], "Reykjavik");
}

#[actix_rt::test]
async fn get_hotel_with_bad_or_unknown_id_is_not_found() {
    let repo = Arc::new(MockHotelRepo::with_hotels(sample_hotels()));
    let app = hotel_app!(repo);

    for uri in ["/v1/hotels/0", "/v1/hotels/-4", "/v1/hotels/abc", "/v1/hotels/999"] {
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["message"], "the requested resource could not be found");
    }
}

#[actix_rt::test]
async fn unsupported_method_is_rejected_with_405() {
    let repo = Arc::new(MockHotelRepo::with_hotels(sample_hotels()));
    let app = hotel_app!(repo);

    let req = actix_test::TestRequest::post().uri("/v1/hotels").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["message"], "the method is not supported for this resource");
}
