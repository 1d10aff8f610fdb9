use std::time::Duration;

use hotel_api::api::query::QueryValues;
use hotel_api::application::listing::{parse_listing_request, REVIEW_LISTING};
use hotel_api::domain::ValidatedFilters;
use hotel_api::infrastructure::repositories::{
    HotelRepository, HotelRepositoryImpl, ReviewRepository, ReviewRepositoryImpl,
};

use crate::common::fixtures::{new_hotel, new_review};
use crate::common::TestDb;

fn filters(pairs: &[(&str, &str)]) -> ValidatedFilters {
    let params = QueryValues::from_pairs(pairs.iter().copied());
    parse_listing_request(&params, &REVIEW_LISTING)
        .expect("listing parameters should be valid")
        .filters
}

async fn seeded_repo(db: &TestDb) -> ReviewRepositoryImpl {
    let hotels = HotelRepositoryImpl::new(db.pool().clone(), Duration::from_secs(3));
    for id in [1, 2] {
        hotels
            .upsert(&new_hotel(id, &format!("Hotel {id}")))
            .await
            .expect("seed hotel");
    }

    let repo = ReviewRepositoryImpl::new(db.pool().clone(), Duration::from_secs(3));
    repo.upsert(1, &new_review("Ana", "Spotless rooms", 9))
        .await
        .expect("seed review");
    repo.upsert(1, &new_review("Ben", "Noisy street", 5))
        .await
        .expect("seed review");
    repo.upsert(2, &new_review("Cleo", "Spotless pool", 8))
        .await
        .expect("seed review");
    repo
}

#[tokio::test]
async fn list_is_scoped_to_hotel() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repo = seeded_repo(&db).await;

    let (reviews, total) = repo
        .list(1, "", &filters(&[("sort", "-average_score")]))
        .await
        .expect("list reviews");

    assert_eq!(total, 2);
    let names: Vec<&str> = reviews.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Ben"]);
}

#[tokio::test]
async fn search_uses_full_text_within_hotel() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repo = seeded_repo(&db).await;

    let (reviews, total) = repo
        .list(1, "spotless", &filters(&[]))
        .await
        .expect("search reviews");

    assert_eq!(total, 1);
    assert_eq!(reviews[0].headline, "Spotless rooms");
}

#[tokio::test]
async fn upsert_on_natural_key_keeps_single_row() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repo = seeded_repo(&db).await;

    let mut revised = new_review("Ana", "Spotless rooms", 10);
    revised.pros = "everything".to_string();
    let stored = repo.upsert(1, &revised).await.expect("upsert review");

    assert_eq!(stored.average_score, 10);
    let (_, total) = repo.list(1, "", &filters(&[])).await.expect("list reviews");
    assert_eq!(total, 2);

    let found = repo
        .find_by_id(1, stored.id)
        .await
        .expect("find review")
        .expect("review exists");
    assert_eq!(found.pros, "everything");
}

#[tokio::test]
async fn find_by_id_requires_matching_hotel() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repo = seeded_repo(&db).await;

    let (reviews, _) = repo.list(2, "", &filters(&[])).await.expect("list reviews");
    let review_id = reviews[0].id;

    assert!(repo.find_by_id(2, review_id).await.expect("query runs").is_some());
    assert!(repo.find_by_id(1, review_id).await.expect("query runs").is_none());
}
